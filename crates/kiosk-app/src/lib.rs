//! kiosk-app - Application state and orchestration for the kiosk presenter
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! kiosk flow, the Engine abstraction shared by the terminal and headless
//! runners, configuration loading, message timers and the video player seam.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod feedback_session;
pub mod form_session;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod screen;
pub mod signals;
pub mod state;
pub mod transient;
pub mod video;

// Re-export primary types
pub use config::{Settings, VideoClip};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use form_session::{FormSession, SubmitPhase};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Control, Message};
pub use screen::{ScreenController, Transition};
pub use state::AppState;
pub use video::{PlaybackObserver, TimedPlayer, VideoPlayer};
