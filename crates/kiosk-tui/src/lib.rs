//! kiosk-tui - Terminal UI for the kiosk presenter
//!
//! This crate provides the ratatui-based terminal interface. It creates an Engine
//! from kiosk-app and adds terminal rendering, event polling, and one widget per
//! kiosk screen.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run_with_kiosk;
