//! Contact form fields and the immutable submission snapshot

use serde::{Deserialize, Serialize};

/// A named text slot on the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldId {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "companyName")]
    CompanyName,
    #[serde(rename = "designation")]
    Designation,
    #[serde(rename = "phoneNumber")]
    PhoneNumber,
    #[serde(rename = "email")]
    Email,
}

impl FieldId {
    /// Fields in on-screen order
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::CompanyName,
        FieldId::Designation,
        FieldId::PhoneNumber,
        FieldId::Email,
    ];

    /// Wire name, matching the submission payload keys
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::CompanyName => "companyName",
            FieldId::Designation => "designation",
            FieldId::PhoneNumber => "phoneNumber",
            FieldId::Email => "email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::CompanyName => "Company Name",
            FieldId::Designation => "Designation",
            FieldId::PhoneNumber => "Phone Number",
            FieldId::Email => "Email",
        }
    }

    /// Parse a wire name (as sent by host integrations)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Next field in on-screen order, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous field in on-screen order, wrapping around
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Current text of every form field, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub company_name: String,
    pub designation: String,
    pub phone_number: String,
    pub email: String,
}

impl FormFields {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::CompanyName => &self.company_name,
            FieldId::Designation => &self.designation,
            FieldId::PhoneNumber => &self.phone_number,
            FieldId::Email => &self.email,
        }
    }

    pub fn get_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::CompanyName => &mut self.company_name,
            FieldId::Designation => &mut self.designation,
            FieldId::PhoneNumber => &mut self.phone_number,
            FieldId::Email => &mut self.email,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Snapshot with surrounding whitespace trimmed from every value
    pub fn snapshot(&self) -> FormSubmission {
        FormSubmission {
            name: self.name.trim().to_string(),
            company_name: self.company_name.trim().to_string(),
            designation: self.designation.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

/// Immutable snapshot of a valid contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub name: String,
    pub company_name: String,
    pub designation: String,
    pub phone_number: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_trims_values() {
        let mut fields = FormFields::default();
        fields.set(FieldId::Name, "  Ada Lovelace ");
        fields.set(FieldId::Email, "ada@example.com\n");

        let snap = fields.snapshot();
        assert_eq!(snap.name, "Ada Lovelace");
        assert_eq!(snap.email, "ada@example.com");
    }

    #[test]
    fn test_submission_serializes_with_wire_keys() {
        let sub = FormSubmission {
            name: "Ada".into(),
            company_name: "Engines Ltd".into(),
            designation: "Analyst".into(),
            phone_number: "0123456789".into(),
            email: "ada@example.com".into(),
        };
        let value = serde_json::to_value(&sub).unwrap();
        for field in FieldId::ALL {
            assert!(value.get(field.key()).is_some(), "missing {}", field.key());
        }
    }

    #[test]
    fn test_field_key_round_trip() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::from_key(field.key()), Some(field));
        }
        assert_eq!(FieldId::from_key("address"), None);
    }

    #[test]
    fn test_field_navigation_wraps() {
        assert_eq!(FieldId::Email.next(), FieldId::Name);
        assert_eq!(FieldId::Name.prev(), FieldId::Email);
        assert_eq!(FieldId::Name.next(), FieldId::CompanyName);
    }

    #[test]
    fn test_clear_empties_all_fields() {
        let mut fields = FormFields::default();
        fields.set(FieldId::Designation, "CTO");
        assert!(!fields.is_empty());
        fields.clear();
        assert!(fields.is_empty());
    }
}
