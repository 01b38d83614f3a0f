//! Centralized theme for the kiosk TUI.
//!
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions

pub mod palette;
pub mod styles;
