//! Core domain types: application phase and screens

use serde::{Deserialize, Serialize};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Engine created, no screen shown yet
    #[default]
    Initializing,
    /// Kiosk flow is live
    Running,
    /// Application is shutting down
    Quitting,
}

/// One mutually-exclusive full-panel UI state in the kiosk flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Home,
    VideoSelection,
    Form,
    ThankYou,
    AreYouReady,
    Feedback,
}

impl Screen {
    /// Every screen, in flow order
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::VideoSelection,
        Screen::AreYouReady,
        Screen::Form,
        Screen::Feedback,
        Screen::ThankYou,
    ];

    /// Stable identifier used by host integrations
    pub fn id(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::VideoSelection => "video_selection",
            Screen::Form => "form",
            Screen::ThankYou => "thank_you",
            Screen::AreYouReady => "are_you_ready",
            Screen::Feedback => "feedback",
        }
    }

    /// Human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Welcome",
            Screen::VideoSelection => "Choose a Video",
            Screen::Form => "Contact Details",
            Screen::ThankYou => "Thank You",
            Screen::AreYouReady => "Are You Ready?",
            Screen::Feedback => "Rate Your Experience",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_screens_unique() {
        let mut ids: Vec<_> = Screen::ALL.iter().map(|s| s.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_screen_serde_matches_id() {
        for screen in Screen::ALL {
            let json = serde_json::to_string(&screen).unwrap();
            assert_eq!(json, format!("\"{}\"", screen.id()));
        }
    }

    #[test]
    fn test_default_phase_is_initializing() {
        assert_eq!(AppPhase::default(), AppPhase::Initializing);
    }
}
