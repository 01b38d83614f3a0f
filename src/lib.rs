//! Kiosk Presenter Library
//!
//! A kiosk flow (welcome, videos, contact form, star rating, thank-you)
//! driven from the terminal or by a host application over NDJSON.

// Module declarations
pub mod app;
pub mod headless;

// Re-export main entry points
pub use app::{run_headless, run_with_kiosk};
