//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `navigation`: Screen transitions and their side effects
//! - `form`: Contact form input and submit
//! - `feedback`: Star rating selection and submit
//! - `video`: Clip playback on the selection screen
//! - `submission`: Results coming back from the submission client
//! - `keys`: Terminal key mapping per screen

pub(crate) mod feedback;
pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod submission;
pub(crate) mod update;
pub(crate) mod video;


use std::time::Duration;

use kiosk_core::{FieldId, Submission};

use crate::config::VideoClip;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Clear `field`'s message after `delay` unless it was replaced
    ScheduleMessageClear {
        field: FieldId,
        generation: u64,
        delay: Duration,
    },

    /// Abort pending clears without firing them
    CancelMessageClears { fields: Vec<FieldId> },

    /// Abort every pending clear (leaving the form)
    CancelAllMessageClears,

    /// Hand a snapshot to the submission client (fire-and-forget)
    Submit { ticket: u64, submission: Submission },

    /// Re-send queued submissions
    DrainPending,

    /// Start the player with an observer for `token`
    PlayVideo { clip: VideoClip, token: u64 },

    /// Stop the player
    StopVideo,

    /// Return to Home when visit `visit` of ThankYou is still showing
    ScheduleThankYouTimeout { visit: u64, delay: Duration },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the event loop to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }

    /// Append `other`'s actions; `other`'s message wins if both have one
    pub fn merge(mut self, other: UpdateResult) -> Self {
        self.actions.extend(other.actions);
        if other.message.is_some() {
            self.message = other.message;
        }
        self
    }
}
