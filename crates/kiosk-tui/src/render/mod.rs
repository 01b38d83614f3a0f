//! Main render/view function (View in TEA pattern)


use kiosk_app::config::FeedbackSubmitPolicy;
use kiosk_app::state::AppState;
use kiosk_core::Screen;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: exactly one panel is drawn, the one the screen
/// controller reports as active.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let screen = state.active_screen();

    frame.render_widget(widgets::MainHeader::new(screen), areas.header);

    match screen {
        Some(Screen::Home) => frame.render_widget(widgets::HomePanel, areas.body),
        Some(Screen::VideoSelection) => frame.render_widget(
            widgets::VideoSelectionPanel::new(
                state.videos(),
                state.video.cursor,
                state.video.now_playing(),
            ),
            areas.body,
        ),
        Some(Screen::AreYouReady) => frame.render_widget(
            widgets::AreYouReadyPanel::new(state.is_enabled(Screen::Feedback)),
            areas.body,
        ),
        Some(Screen::Form) => {
            frame.render_widget(widgets::FormPanel::new(&state.form), areas.body)
        }
        Some(Screen::Feedback) => frame.render_widget(
            widgets::FeedbackPanel::new(
                state.feedback.rating(),
                state.feedback.phase(),
                state.settings.feedback.submit_policy == FeedbackSubmitPolicy::OnSelect,
            ),
            areas.body,
        ),
        Some(Screen::ThankYou) => frame.render_widget(
            widgets::ThankYouPanel::new(
                state
                    .settings
                    .timing
                    .thank_you_timeout()
                    .map(|d| d.as_secs()),
            ),
            areas.body,
        ),
        // Nothing to draw before the engine starts
        None => {}
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
