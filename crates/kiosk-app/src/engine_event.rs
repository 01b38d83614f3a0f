//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless host bridge turns them into NDJSON;
//! `SubmissionFailed` doubles as the diagnostic channel for background sends
//! the visitor never waits on.

use kiosk_core::{FieldId, Screen, SubmissionKind};

use crate::config::VideoClip;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Screens
    // ─────────────────────────────────────────────────────────
    /// A different panel became visible
    ScreenChanged { from: Option<Screen>, to: Screen },

    // ─────────────────────────────────────────────────────────
    // Form
    // ─────────────────────────────────────────────────────────
    /// A field's value changed (including resets on entering the form)
    FieldTextChanged { field: FieldId, text: String },

    /// A field message appeared, was replaced, or cleared (`None`)
    FieldMessageChanged {
        field: FieldId,
        message: Option<String>,
    },

    /// A form field gained focus; touch hosts open an on-screen keyboard
    KeyboardRequested { field: FieldId },

    // ─────────────────────────────────────────────────────────
    // Feedback
    // ─────────────────────────────────────────────────────────
    /// Stars `[0, stars)` are highlighted
    RatingChanged { stars: u8 },

    // ─────────────────────────────────────────────────────────
    // Video
    // ─────────────────────────────────────────────────────────
    VideoStarted { clip: VideoClip },

    VideoStopped,

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────
    /// A background send failed (the visitor already saw ThankYou)
    SubmissionFailed {
        kind: SubmissionKind,
        error: String,
        queued: bool,
    },

    /// The retry queue length changed
    PendingChanged { pending: usize },

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ScreenChanged { .. } => "screen_changed",
            Self::FieldTextChanged { .. } => "field_text_changed",
            Self::FieldMessageChanged { .. } => "field_message_changed",
            Self::KeyboardRequested { .. } => "keyboard_requested",
            Self::RatingChanged { .. } => "rating_changed",
            Self::VideoStarted { .. } => "video_started",
            Self::VideoStopped => "video_stopped",
            Self::SubmissionFailed { .. } => "submission_failed",
            Self::PendingChanged { .. } => "pending_changed",
            Self::Shutdown => "shutdown",
        }
    }
}
