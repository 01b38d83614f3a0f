//! Message types for the application (TEA pattern)

use kiosk_core::{FieldId, Screen};
use kiosk_submit::{DrainReport, SubmissionOutcome};
use serde::{Deserialize, Serialize};

use crate::input_key::InputKey;

/// Buttons a visitor can press, independent of how the host draws them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Home: start the tour
    Explore,
    /// VideoSelection: play the clip at this index
    PlayClip(usize),
    /// VideoSelection: stop the playing clip
    StopClip,
    /// VideoSelection: move on to AreYouReady
    Continue,
    /// AreYouReady: open the contact form
    StartForm,
    /// AreYouReady: open the star rating
    StartFeedback,
    /// Form: validate and send
    SubmitForm,
    /// Feedback: send the selected rating
    SubmitFeedback,
    /// Any screen: back to Home
    Home,
}

/// All possible messages in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Show Home and, if configured, retry queued submissions
    Start,

    /// Stop the engine (Ctrl+C, signal handler, host `quit`)
    Quit,

    /// A visitor pressed a control
    Activate(Control),

    /// Host-driven navigation (capability checks still apply)
    ShowScreen(Screen),

    // ─────────────────────────────────────────────────────────
    // Form Input
    // ─────────────────────────────────────────────────────────
    /// Replace a field's text (host text input, or a terminal keystroke)
    SetFieldText { field: FieldId, text: String },

    /// A form field gained input focus
    FocusField(FieldId),

    /// A field message's clear delay elapsed
    MessageExpired { field: FieldId, generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Feedback
    // ─────────────────────────────────────────────────────────
    /// A star was tapped (1..=5)
    SelectRating(u8),

    // ─────────────────────────────────────────────────────────
    // Video
    // ─────────────────────────────────────────────────────────
    /// Move the clip highlight on the selection screen
    MoveClipCursor(isize),

    /// The player reached the end of the clip registered with `token`
    VideoFinished { token: u64 },

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────
    /// The submission client finished with the snapshot from `ticket`
    SubmissionCompleted {
        ticket: u64,
        outcome: SubmissionOutcome,
    },

    /// Queued submissions were re-sent
    PendingDrained(DrainReport),

    /// Re-sending the queue failed before any POST
    PendingDrainFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Timeouts
    // ─────────────────────────────────────────────────────────
    /// The ThankYou idle timer for visit `visit` elapsed
    ThankYouTimeout { visit: u64 },
}
