//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use kiosk_core::{AppPhase, Screen, SubmissionKind};

use crate::config::{Settings, VideoClip};
use crate::feedback_session::FeedbackSession;
use crate::form_session::FormSession;
use crate::screen::ScreenController;
use crate::video::VideoState;

/// A submission that did not fully reach its destinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFailure {
    pub kind: SubmissionKind,
    pub error: String,
    /// Parked in the retry queue
    pub queued: bool,
}

/// Delivery counters shown in the status line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub delivered: u64,
    pub failed: u64,
    /// Entries waiting in the retry queue
    pub pending: usize,
    pub last_failure: Option<SubmissionFailure>,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Kiosk directory holding `.kiosk/`
    pub kiosk_path: PathBuf,

    pub settings: Settings,

    pub screens: ScreenController,

    pub form: FormSession,

    pub feedback: FeedbackSession,

    pub video: VideoState,

    pub diagnostics: Diagnostics,

    next_ticket: u64,

    /// Bumped on every entry to ThankYou so stale idle timers are ignored
    thank_you_visit: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(PathBuf::from("."), Settings::default())
    }

    pub fn with_settings(kiosk_path: PathBuf, settings: Settings) -> Self {
        Self {
            phase: AppPhase::Initializing,
            kiosk_path,
            settings,
            screens: ScreenController::new(),
            form: FormSession::new(),
            feedback: FeedbackSession::new(),
            video: VideoState::new(),
            diagnostics: Diagnostics::default(),
            next_ticket: 0,
            thank_you_visit: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn active_screen(&self) -> Option<Screen> {
        self.screens.active()
    }

    pub fn videos(&self) -> &[VideoClip] {
        &self.settings.videos
    }

    /// Clip highlighted or playing on the selection screen
    pub fn now_playing_clip(&self) -> Option<&VideoClip> {
        self.video
            .now_playing()
            .and_then(|p| self.settings.videos.get(p.clip_index))
    }

    /// Allocate an id for the next submission snapshot
    pub fn next_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    pub fn begin_thank_you_visit(&mut self) -> u64 {
        self.thank_you_visit += 1;
        self.thank_you_visit
    }

    pub fn thank_you_visit(&self) -> u64 {
        self.thank_you_visit
    }

    /// Whether `screen` is reachable with the configured capabilities
    pub fn is_enabled(&self, screen: Screen) -> bool {
        match screen {
            Screen::VideoSelection => self.settings.capabilities.has_video,
            Screen::Feedback => self.settings.capabilities.has_feedback,
            _ => true,
        }
    }
}
