//! Submission kinds and the payload handed to the submission client

use serde::{Deserialize, Serialize};

use crate::feedback::FeedbackSubmission;
use crate::form::FormSubmission;

/// Which record a submission belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Form,
    Feedback,
}

impl SubmissionKind {
    /// Local record file for this kind
    pub fn file_name(&self) -> &'static str {
        match self {
            SubmissionKind::Form => "formdata.json",
            SubmissionKind::Feedback => "feedback.json",
        }
    }

    /// Top-level list key inside the record file
    pub fn list_key(&self) -> &'static str {
        match self {
            SubmissionKind::Form => "forms",
            SubmissionKind::Feedback => "feedbacks",
        }
    }
}

impl std::fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionKind::Form => f.write_str("form"),
            SubmissionKind::Feedback => f.write_str("feedback"),
        }
    }
}

/// A snapshot ready to be persisted and/or posted
///
/// Serializes untagged: the wire body is the bare form or feedback object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Submission {
    Form(FormSubmission),
    Feedback(FeedbackSubmission),
}

impl Submission {
    pub fn kind(&self) -> SubmissionKind {
        match self {
            Submission::Form(_) => SubmissionKind::Form,
            Submission::Feedback(_) => SubmissionKind::Feedback,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl From<FormSubmission> for Submission {
    fn from(value: FormSubmission) -> Self {
        Submission::Form(value)
    }
}

impl From<FeedbackSubmission> for Submission {
    fn from(value: FeedbackSubmission) -> Self {
        Submission::Feedback(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_body_is_bare_object() {
        let sub = Submission::from(FeedbackSubmission { star_rating: 2 });
        assert_eq!(sub.to_json().unwrap(), r#"{"starRating":2}"#);
        assert_eq!(sub.kind(), SubmissionKind::Feedback);
    }

    #[test]
    fn test_untagged_deserialize_picks_form() {
        let json = r#"{"name":"A","companyName":"B","designation":"C","phoneNumber":"0123456789","email":"a@b.co"}"#;
        let sub: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(sub.kind(), SubmissionKind::Form);
    }

    #[test]
    fn test_record_file_names() {
        assert_eq!(SubmissionKind::Form.file_name(), "formdata.json");
        assert_eq!(SubmissionKind::Feedback.list_key(), "feedbacks");
    }
}
