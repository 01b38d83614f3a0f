//! Headless mode - NDJSON host bridge
//!
//! Lets a host application (a touch UI, a browser shell, an E2E script) drive
//! the kiosk engine without the terminal UI. The host writes one JSON command
//! per line to stdin and reads rendering instructions from stdout.
//!
//! # Event Format
//!
//! Events are NDJSON, one per line, tagged by an "event" field:
//!
//! ```json
//! {"event":"screen_shown","screen":"form","from":"are_you_ready","timestamp":1704700001000}
//! {"event":"field_message","field":"email","message":"Enter a valid email","timestamp":1704700002000}
//! {"event":"stars","stars":4,"timestamp":1704700003000}
//! ```
//!
//! # Commands
//!
//! ```json
//! {"cmd":"activate","control":"submit_form"}
//! {"cmd":"activate","control":{"play_clip":0}}
//! {"cmd":"set_text","field":"email","text":"ada@example.com"}
//! {"cmd":"focus","field":"email"}
//! {"cmd":"select_rating","stars":4}
//! {"cmd":"video_finished"}
//! {"cmd":"quit"}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use kiosk_app::{Control, EngineEvent, Message};
use kiosk_core::{FieldId, Screen, SubmissionKind};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Engine is up; commands are accepted from now on
    Ready { kiosk_path: String, timestamp: i64 },

    /// Exactly this screen is visible now
    ScreenShown {
        screen: Screen,
        from: Option<Screen>,
        timestamp: i64,
    },

    /// A field's text changed (resets included)
    FieldText {
        field: &'static str,
        text: String,
        timestamp: i64,
    },

    /// A field message appeared or was cleared (`null`)
    FieldMessage {
        field: &'static str,
        message: Option<String>,
        timestamp: i64,
    },

    /// Highlight stars `[0, stars)`
    Stars { stars: u8, timestamp: i64 },

    /// Start playing a clip; answer with `video_finished` when it ends
    PlayVideo {
        id: String,
        title: String,
        duration_secs: u64,
        timestamp: i64,
    },

    StopVideo { timestamp: i64 },

    /// Open an on-screen keyboard for this field
    KeyboardRequested { field: &'static str, timestamp: i64 },

    /// A background delivery failed
    SubmissionFailed {
        kind: SubmissionKind,
        error: String,
        queued: bool,
        timestamp: i64,
    },

    /// Retry queue length
    Pending { pending: usize, timestamp: i64 },

    /// Bad command or bridge-level problem
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    Shutdown { timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Write this event as one NDJSON line and flush
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn ready(kiosk_path: &std::path::Path) -> Self {
        Self::Ready {
            kiosk_path: kiosk_path.display().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Rendering instruction for an engine event
    pub fn from_engine_event(event: &EngineEvent) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::ScreenChanged { from, to } => Self::ScreenShown {
                screen: *to,
                from: *from,
                timestamp,
            },
            EngineEvent::FieldTextChanged { field, text } => Self::FieldText {
                field: field.key(),
                text: text.clone(),
                timestamp,
            },
            EngineEvent::FieldMessageChanged { field, message } => Self::FieldMessage {
                field: field.key(),
                message: message.clone(),
                timestamp,
            },
            EngineEvent::KeyboardRequested { field } => Self::KeyboardRequested {
                field: field.key(),
                timestamp,
            },
            EngineEvent::RatingChanged { stars } => Self::Stars {
                stars: *stars,
                timestamp,
            },
            EngineEvent::VideoStarted { clip } => Self::PlayVideo {
                id: clip.id.clone(),
                title: clip.title.clone(),
                duration_secs: clip.duration_secs,
                timestamp,
            },
            EngineEvent::VideoStopped => Self::StopVideo { timestamp },
            EngineEvent::SubmissionFailed {
                kind,
                error,
                queued,
            } => Self::SubmissionFailed {
                kind: *kind,
                error: error.clone(),
                queued: *queued,
                timestamp,
            },
            EngineEvent::PendingChanged { pending } => Self::Pending {
                pending: *pending,
                timestamp,
            },
            EngineEvent::Shutdown => Self::Shutdown { timestamp },
        }
    }
}

/// One line of host input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum HostCommand {
    /// A visitor pressed a control
    Activate { control: Control },
    /// Navigate directly (capability checks still apply)
    Show { screen: Screen },
    SetText { field: String, text: String },
    Focus { field: String },
    SelectRating { stars: u8 },
    /// The clip the host was told to play has ended
    VideoFinished,
    Quit,
}

impl HostCommand {
    /// Parse one stdin line
    pub fn parse(line: &str) -> Result<Self, String> {
        serde_json::from_str(line).map_err(|e| format!("invalid command {line:?}: {e}"))
    }

    /// Engine message for this command
    ///
    /// `VideoFinished` is answered through the playback observer instead and
    /// has no message of its own.
    pub fn into_message(self) -> Result<Option<Message>, String> {
        let message = match self {
            HostCommand::Activate { control } => Message::Activate(control),
            HostCommand::Show { screen } => Message::ShowScreen(screen),
            HostCommand::SetText { field, text } => Message::SetFieldText {
                field: parse_field(&field)?,
                text,
            },
            HostCommand::Focus { field } => Message::FocusField(parse_field(&field)?),
            HostCommand::SelectRating { stars } => Message::SelectRating(stars),
            HostCommand::Quit => Message::Quit,
            HostCommand::VideoFinished => return Ok(None),
        };
        Ok(Some(message))
    }
}

fn parse_field(key: &str) -> Result<FieldId, String> {
    FieldId::from_key(key).ok_or_else(|| format!("unknown field {key:?}"))
}
