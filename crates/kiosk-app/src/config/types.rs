//! Configuration types (`.kiosk/config.toml`)

use std::time::Duration;

use kiosk_core::prelude::*;
use kiosk_core::PhoneDigitPolicy;
use serde::{Deserialize, Serialize};

/// Kiosk settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub capabilities: Capabilities,

    #[serde(default)]
    pub validation: ValidationSettings,

    #[serde(default)]
    pub feedback: FeedbackSettings,

    #[serde(default)]
    pub submission: SubmissionSettings,

    #[serde(default)]
    pub timing: TimingSettings,

    /// Clips offered on the video selection screen
    #[serde(default)]
    pub videos: Vec<VideoClip>,
}

/// Which parts of the flow this kiosk offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Capabilities {
    /// Offer the video selection screen after Home
    #[serde(default = "default_true")]
    pub has_video: bool,

    /// Offer the star rating screen
    #[serde(default = "default_true")]
    pub has_feedback: bool,

    /// POST submissions to `submission.endpoint_url`
    #[serde(default)]
    pub submits_remotely: bool,

    /// Keep every submission in the local record files
    #[serde(default = "default_true")]
    pub persists_locally: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            has_video: true,
            has_feedback: true,
            submits_remotely: false,
            persists_locally: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationSettings {
    #[serde(default)]
    pub phone_policy: PhoneDigitPolicy,
}

/// When a star selection is sent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackSubmitPolicy {
    /// Wait for the explicit submit control
    #[default]
    OnButton,
    /// Submit as soon as a star is selected
    OnSelect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedbackSettings {
    #[serde(default)]
    pub submit_policy: FeedbackSubmitPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmissionSettings {
    /// Remote POST target (required when `submits_remotely`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Re-send queued submissions when the kiosk starts
    #[serde(default = "default_true")]
    pub retry_pending_on_start: bool,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            timeout_ms: default_timeout_ms(),
            retry_pending_on_start: true,
        }
    }
}

impl SubmissionSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimingSettings {
    /// How long a field error stays visible
    #[serde(default = "default_message_clear_ms")]
    pub message_clear_ms: u64,

    /// Return from ThankYou to Home after this long; 0 disables
    #[serde(default)]
    pub thank_you_timeout_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            message_clear_ms: default_message_clear_ms(),
            thank_you_timeout_ms: 0,
        }
    }
}

impl TimingSettings {
    pub fn message_clear_delay(&self) -> Duration {
        Duration::from_millis(self.message_clear_ms)
    }

    pub fn thank_you_timeout(&self) -> Option<Duration> {
        (self.thank_you_timeout_ms > 0).then(|| Duration::from_millis(self.thank_you_timeout_ms))
    }
}

/// A clip on the video selection screen
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoClip {
    /// Host-side identifier (file name, asset key, ...)
    pub id: String,
    pub title: String,
    /// Playback length used by the built-in timed player
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,
}

impl VideoClip {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }
}

fn default_true() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_message_clear_ms() -> u64 {
    2_000
}

fn default_duration_secs() -> u64 {
    30
}

impl Settings {
    /// Reject combinations the kiosk cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.capabilities.submits_remotely {
            match self.submission.endpoint_url.as_deref().map(str::trim) {
                None | Some("") => {
                    return Err(Error::config_invalid(
                        "submits_remotely is set but submission.endpoint_url is missing",
                    ))
                }
                Some(_) => {}
            }
        }

        if !self.validation.phone_policy.is_well_formed() {
            return Err(Error::config_invalid(format!(
                "phone_policy bounds are invalid: {:?}",
                self.validation.phone_policy
            )));
        }

        if self.capabilities.has_video && self.videos.is_empty() {
            warn!("has_video is set but no [[videos]] are configured");
        }

        Ok(())
    }

    /// Replace invalid parts with safe values
    ///
    /// Remote sending is switched off without an endpoint and a malformed
    /// phone policy falls back to the default.
    pub fn sanitized(mut self) -> Self {
        let has_endpoint = self
            .submission
            .endpoint_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty());
        if self.capabilities.submits_remotely && !has_endpoint {
            warn!("Remote submission disabled: no endpoint_url configured");
            self.capabilities.submits_remotely = false;
        }

        if !self.validation.phone_policy.is_well_formed() {
            warn!(
                "Ignoring invalid phone_policy {:?}, using default",
                self.validation.phone_policy
            );
            self.validation.phone_policy = PhoneDigitPolicy::default();
        }

        self
    }

    /// Endpoint to post to, if remote sending is on
    pub fn remote_endpoint(&self) -> Option<&str> {
        if self.capabilities.submits_remotely {
            self.submission.endpoint_url.as_deref()
        } else {
            None
        }
    }
}
