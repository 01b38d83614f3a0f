//! Contact form session
//!
//! Lifecycle: `Editing -> Validating -> Editing` on a rejected attempt,
//! `Editing -> Validating -> Submitting -> Submitted | Failed` on an accepted
//! one. Entering the Form screen resets the session.

use kiosk_core::{validate, FieldId, FormFields, FormSubmission, PhoneDigitPolicy, ValidationReport};

use crate::transient::TransientMessages;

/// Where a form or feedback session is in its submit lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Validating,
    /// Snapshot handed to the submission client, result outstanding
    Submitting,
    Submitted,
    Failed { reason: String },
}

impl SubmitPhase {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitPhase::Editing => "editing",
            SubmitPhase::Validating => "validating",
            SubmitPhase::Submitting => "submitting",
            SubmitPhase::Submitted => "submitted",
            SubmitPhase::Failed { .. } => "failed",
        }
    }
}

/// Result of [`FormSession::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Every field is valid; this snapshot must be sent
    Accepted(FormSubmission),
    /// At least one field is invalid
    Rejected {
        report: ValidationReport,
        /// Fields that now show a message, with the generation to clear
        shown: Vec<(FieldId, u64)>,
        /// Fields whose earlier message was removed because they now pass
        cleared: Vec<FieldId>,
    },
    /// Not in `Editing` (a snapshot is already out)
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct FormSession {
    pub fields: FormFields,
    pub messages: TransientMessages<FieldId>,
    phase: SubmitPhase,
    focus: Option<FieldId>,
    ticket: Option<u64>,
    submission_count: u64,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn focus(&self) -> Option<FieldId> {
        self.focus
    }

    /// Snapshots produced since start, across resets
    pub fn submission_count(&self) -> u64 {
        self.submission_count
    }

    /// Clear values, messages and phase; keeps the submission count
    pub fn reset(&mut self) {
        self.fields.clear();
        self.messages.clear();
        self.phase = SubmitPhase::Editing;
        self.focus = None;
        self.ticket = None;
    }

    pub fn is_editable(&self) -> bool {
        self.phase == SubmitPhase::Editing
    }

    /// Move input focus, returning whether it changed
    pub fn set_focus(&mut self, field: FieldId) -> bool {
        if self.focus == Some(field) {
            return false;
        }
        self.focus = Some(field);
        true
    }

    /// Replace a field's text, returning whether anything changed
    pub fn set_text(&mut self, field: FieldId, text: impl Into<String>) -> bool {
        if !self.is_editable() {
            return false;
        }
        let text = text.into();
        if self.fields.get(field) == text {
            return false;
        }
        self.fields.set(field, text);
        true
    }

    /// Validate and, if everything passes, take the submission snapshot
    pub fn submit(&mut self, policy: PhoneDigitPolicy, ticket: u64) -> SubmitAttempt {
        if !self.is_editable() {
            return SubmitAttempt::Ignored;
        }

        self.phase = SubmitPhase::Validating;
        let report = validate(&self.fields, policy);

        if report.is_valid() {
            self.messages.clear();
            self.phase = SubmitPhase::Submitting;
            self.ticket = Some(ticket);
            self.submission_count += 1;
            return SubmitAttempt::Accepted(self.fields.snapshot());
        }

        let cleared = report
            .iter()
            .filter(|(_, result)| result.valid)
            .map(|(field, _)| field)
            .filter(|field| self.messages.dismiss(*field))
            .collect();
        let shown = report
            .errors()
            .map(|(field, message)| (field, self.messages.show(field, message)))
            .collect();

        self.phase = SubmitPhase::Editing;
        SubmitAttempt::Rejected {
            report,
            shown,
            cleared,
        }
    }

    /// Record the asynchronous send result for the snapshot from `ticket`
    ///
    /// Results for an older snapshot (the form was re-entered meanwhile) are
    /// ignored.
    pub fn complete(&mut self, ticket: u64, error: Option<String>) -> bool {
        if self.ticket != Some(ticket) || self.phase != SubmitPhase::Submitting {
            return false;
        }
        self.phase = match error {
            None => SubmitPhase::Submitted,
            Some(reason) => SubmitPhase::Failed { reason },
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormSession {
        let mut form = FormSession::new();
        form.set_text(FieldId::Name, "  Ada Lovelace ");
        form.set_text(FieldId::CompanyName, "Analytical Engines");
        form.set_text(FieldId::Designation, "Analyst");
        form.set_text(FieldId::PhoneNumber, "0123456789");
        form.set_text(FieldId::Email, "ada@engines.io");
        form
    }

    #[test]
    fn test_valid_submit_produces_trimmed_snapshot() {
        let mut form = filled();
        match form.submit(PhoneDigitPolicy::default(), 1) {
            SubmitAttempt::Accepted(snapshot) => assert_eq!(snapshot.name, "Ada Lovelace"),
            other => panic!("expected Accepted, got {other:?}"),
        }
        assert_eq!(form.phase(), &SubmitPhase::Submitting);
        assert_eq!(form.submission_count(), 1);
    }

    #[test]
    fn test_second_submit_is_ignored_while_submitting() {
        let mut form = filled();
        form.submit(PhoneDigitPolicy::default(), 1);
        assert_eq!(
            form.submit(PhoneDigitPolicy::default(), 2),
            SubmitAttempt::Ignored
        );
        assert_eq!(form.submission_count(), 1);
    }

    #[test]
    fn test_invalid_submit_shows_message_per_invalid_field() {
        let mut form = filled();
        form.set_text(FieldId::Email, "not-an-email");
        form.set_text(FieldId::Designation, "   ");

        let SubmitAttempt::Rejected { shown, .. } = form.submit(PhoneDigitPolicy::default(), 1)
        else {
            panic!("expected Rejected");
        };

        let fields: Vec<_> = shown.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec![FieldId::Designation, FieldId::Email]);
        assert_eq!(form.messages.get(FieldId::Designation), Some("Enter your designation"));
        assert_eq!(form.messages.get(FieldId::Email), Some("Enter a valid email"));
        assert_eq!(form.messages.get(FieldId::Name), None);
        assert_eq!(form.phase(), &SubmitPhase::Editing);
        assert_eq!(form.submission_count(), 0);
    }

    #[test]
    fn test_resubmit_clears_messages_of_fixed_fields() {
        let mut form = filled();
        form.set_text(FieldId::Email, "bad");
        form.set_text(FieldId::Name, "");
        form.submit(PhoneDigitPolicy::default(), 1);

        form.set_text(FieldId::Email, "ada@engines.io");
        let SubmitAttempt::Rejected { cleared, .. } = form.submit(PhoneDigitPolicy::default(), 2)
        else {
            panic!("expected Rejected");
        };
        assert_eq!(cleared, vec![FieldId::Email]);
        assert_eq!(form.messages.get(FieldId::Email), None);
        assert!(form.messages.get(FieldId::Name).is_some());
    }

    #[test]
    fn test_complete_matches_ticket() {
        let mut form = filled();
        form.submit(PhoneDigitPolicy::default(), 7);

        assert!(!form.complete(6, None));
        assert!(form.complete(7, Some("timeout".into())));
        assert_eq!(
            form.phase(),
            &SubmitPhase::Failed {
                reason: "timeout".into()
            }
        );
    }

    #[test]
    fn test_reset_keeps_count_and_clears_everything_else() {
        let mut form = filled();
        form.set_focus(FieldId::Email);
        form.submit(PhoneDigitPolicy::default(), 1);
        form.reset();

        assert!(form.fields.is_empty());
        assert!(form.messages.is_empty());
        assert_eq!(form.focus(), None);
        assert!(form.is_editable());
        assert_eq!(form.submission_count(), 1);
    }

    #[test]
    fn test_edits_rejected_after_snapshot() {
        let mut form = filled();
        form.submit(PhoneDigitPolicy::default(), 1);
        assert!(!form.set_text(FieldId::Name, "Changed"));
        assert_eq!(form.fields.name, "  Ada Lovelace ");
    }
}
