//! Status bar widget
//!
//! Displays the app phase, delivery counters and the key hints for the
//! visible panel.

use kiosk_app::state::AppState;
use kiosk_core::{AppPhase, Screen};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn phase_indicator(&self) -> Span<'static> {
        match self.state.phase {
            AppPhase::Initializing => Span::styled("○ Starting", styles::text_muted()),
            AppPhase::Running => Span::styled("● Running", styles::status_green()),
            AppPhase::Quitting => Span::styled("✗ Stopping", styles::status_red()),
        }
    }

    /// Delivered / failed / pending counters
    fn delivery(&self) -> Vec<Span<'static>> {
        let d = &self.state.diagnostics;
        let mut spans = vec![Span::styled(
            format!("✓ {} sent", d.delivered),
            styles::text_secondary(),
        )];
        if d.failed > 0 {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("✗ {} failed", d.failed),
                styles::status_red(),
            ));
        }
        if d.pending > 0 {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("↻ {} pending", d.pending),
                styles::status_yellow(),
            ));
        }
        spans
    }

    fn hints(&self) -> &'static str {
        match self.state.active_screen() {
            Some(Screen::Home) => "Enter start  q quit",
            Some(Screen::VideoSelection) => "↑↓ choose  Enter play  s stop  n next  Esc home",
            Some(Screen::AreYouReady) => "Enter form  r rate  Esc home",
            Some(Screen::Form) => "Tab next field  Enter submit  Esc home",
            Some(Screen::Feedback) => "←→ or 1-5 rate  Enter submit  Esc home",
            Some(Screen::ThankYou) => "Enter home",
            None => "Ctrl+C quit",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" "), self.phase_indicator(), Span::raw("  │  ")];
        spans.extend(self.delivery());
        spans.push(Span::raw("  │  "));
        spans.push(Span::styled(self.hints(), styles::keybinding()));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
