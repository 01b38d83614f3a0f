//! Screen visibility
//!
//! Exactly one of the six panels is visible once the kiosk has started.
//! [`ScreenController`] only tracks which; navigation side effects (video
//! reset, form reset, timer cancellation) live in the navigation handler.

use kiosk_core::Screen;

/// Result of [`ScreenController::show`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The requested screen was already active
    Unchanged(Screen),
    Changed { from: Option<Screen>, to: Screen },
}

impl Transition {
    pub fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScreenController {
    active: Option<Screen>,
    transitions: u64,
}

impl ScreenController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `screen` the only visible panel
    pub fn show(&mut self, screen: Screen) -> Transition {
        if self.active == Some(screen) {
            return Transition::Unchanged(screen);
        }
        let from = self.active.replace(screen);
        self.transitions += 1;
        Transition::Changed { from, to: screen }
    }

    /// Visible panel; `None` before the first `show`
    pub fn active(&self) -> Option<Screen> {
        self.active
    }

    pub fn is_active(&self, screen: Screen) -> bool {
        self.active == Some(screen)
    }

    /// Visibility flag of every panel, in [`Screen::ALL`] order
    pub fn visible(&self) -> [(Screen, bool); 6] {
        Screen::ALL.map(|s| (s, self.is_active(s)))
    }

    /// Number of panels currently visible (0 before start, 1 after)
    pub fn active_count(&self) -> usize {
        self.visible().iter().filter(|(_, v)| *v).count()
    }

    /// Number of effective screen changes so far
    pub fn transitions(&self) -> u64 {
        self.transitions
    }
}
