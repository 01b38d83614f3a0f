//! Contact form validation
//!
//! Every rule is evaluated independently so the caller can show a message for
//! each invalid field at once. Validation is pure: it neither touches UI state
//! nor starts timers.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::form::{FieldId, FormFields};

/// `local @ domain . tld` with no `@` or whitespace in any part
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex")
});

static DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid digits regex"));

/// Accepted phone number lengths (ASCII digits only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhoneDigitPolicy {
    /// Exactly `digits` digits
    Exact { digits: u8 },
    /// Between `min` and `max` digits inclusive
    Range { min: u8, max: u8 },
}

impl Default for PhoneDigitPolicy {
    fn default() -> Self {
        PhoneDigitPolicy::Exact { digits: 10 }
    }
}

impl PhoneDigitPolicy {
    pub fn accepts_len(&self, len: usize) -> bool {
        match *self {
            PhoneDigitPolicy::Exact { digits } => len == digits as usize,
            PhoneDigitPolicy::Range { min, max } => (min as usize..=max as usize).contains(&len),
        }
    }

    pub fn message(&self) -> String {
        match *self {
            PhoneDigitPolicy::Exact { digits } => format!("Enter a valid {digits}-digit phone"),
            PhoneDigitPolicy::Range { min, max } => {
                format!("Enter a valid phone ({min}-{max} digits)")
            }
        }
    }

    /// Whether the bounds make sense (non-zero, min <= max)
    pub fn is_well_formed(&self) -> bool {
        match *self {
            PhoneDigitPolicy::Exact { digits } => digits > 0,
            PhoneDigitPolicy::Range { min, max } => min > 0 && min <= max,
        }
    }
}

/// Outcome of checking a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// Empty when valid
    pub message: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Per-field results of one validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    results: BTreeMap<FieldId, ValidationResult>,
}

impl ValidationReport {
    /// Logical AND of every field result
    pub fn is_valid(&self) -> bool {
        self.results.values().all(|r| r.valid)
    }

    pub fn get(&self, field: FieldId) -> Option<&ValidationResult> {
        self.results.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &ValidationResult)> {
        self.results.iter().map(|(f, r)| (*f, r))
    }

    /// Invalid fields with their messages, in on-screen order
    pub fn errors(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.results
            .iter()
            .filter(|(_, r)| !r.valid)
            .map(|(f, r)| (*f, r.message.as_str()))
    }
}

fn required(value: &str, message: &str) -> ValidationResult {
    if value.trim().is_empty() {
        ValidationResult::invalid(message)
    } else {
        ValidationResult::ok()
    }
}

/// Check a phone number against the digit policy
pub fn validate_phone(value: &str, policy: PhoneDigitPolicy) -> ValidationResult {
    let value = value.trim();
    if DIGITS_REGEX.is_match(value) && policy.accepts_len(value.len()) {
        ValidationResult::ok()
    } else {
        ValidationResult::invalid(policy.message())
    }
}

/// Check an email address shape
pub fn validate_email(value: &str) -> ValidationResult {
    if EMAIL_REGEX.is_match(value.trim()) {
        ValidationResult::ok()
    } else {
        ValidationResult::invalid("Enter a valid email")
    }
}

/// Check a single field
pub fn validate_field(field: FieldId, value: &str, policy: PhoneDigitPolicy) -> ValidationResult {
    match field {
        FieldId::Name => required(value, "Please enter your name"),
        FieldId::CompanyName => required(value, "Enter your company name"),
        FieldId::Designation => required(value, "Enter your designation"),
        FieldId::PhoneNumber => validate_phone(value, policy),
        FieldId::Email => validate_email(value),
    }
}

/// Validate every field of the form
pub fn validate(fields: &FormFields, policy: PhoneDigitPolicy) -> ValidationReport {
    let results = FieldId::ALL
        .into_iter()
        .map(|field| (field, validate_field(field, fields.get(field), policy)))
        .collect();
    ValidationReport { results }
}
