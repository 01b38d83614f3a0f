//! # kiosk-core - Core Domain Types
//!
//! Foundation crate for the kiosk presenter. Provides domain types, form
//! validation, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, serde_json, thiserror, regex, tracing, dirs).
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`Screen`] - The six mutually-exclusive kiosk panels
//! - [`AppPhase`] - Application lifecycle phase
//! - [`FieldId`], [`FormFields`], [`FormSubmission`] - Contact form data
//! - [`Rating`], [`FeedbackSubmission`] - Star rating data
//! - [`Submission`], [`SubmissionKind`] - Payloads handed to the submission client
//!
//! ### Validation (`validation`)
//! - [`validate()`] - Check every form field, reporting all failures
//! - [`PhoneDigitPolicy`] - Exact or ranged phone length rule
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use kiosk_core::prelude::*;
//! ```

pub mod error;
pub mod feedback;
pub mod form;
pub mod logging;
pub mod prelude;
pub mod submission;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use feedback::{FeedbackSubmission, Rating, MAX_STARS};
pub use form::{FieldId, FormFields, FormSubmission};
pub use submission::{Submission, SubmissionKind};
pub use types::{AppPhase, Screen};
pub use validation::{
    validate, validate_email, validate_field, validate_phone, PhoneDigitPolicy, ValidationReport,
    ValidationResult,
};
