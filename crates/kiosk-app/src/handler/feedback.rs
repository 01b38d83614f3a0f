//! Star rating handlers

use kiosk_core::{Screen, Submission};
use tracing::{debug, info};

use crate::config::FeedbackSubmitPolicy;
use crate::state::AppState;

use super::{navigation::show_screen, UpdateAction, UpdateResult};

pub fn handle_select(state: &mut AppState, stars: u8) -> UpdateResult {
    if !state.screens.is_active(Screen::Feedback) {
        return UpdateResult::none();
    }
    if !state.feedback.select(stars) {
        return UpdateResult::none();
    }
    debug!("Rating {}", stars);

    match state.settings.feedback.submit_policy {
        FeedbackSubmitPolicy::OnSelect => submit(state),
        FeedbackSubmitPolicy::OnButton => UpdateResult::none(),
    }
}

/// Send the rating and move to ThankYou; no-op without a rating
pub fn submit(state: &mut AppState) -> UpdateResult {
    let ticket = state.next_ticket();
    match state.feedback.submit(ticket) {
        Some(snapshot) => {
            info!("Feedback submitted: {} star(s)", snapshot.star_rating);
            UpdateResult::action(UpdateAction::Submit {
                ticket,
                submission: Submission::from(snapshot),
            })
            .merge(show_screen(state, Screen::ThankYou))
        }
        None => {
            debug!("Feedback submit ignored: no rating selected");
            UpdateResult::none()
        }
    }
}
