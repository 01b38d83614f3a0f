//! Screen transitions and the side effects that go with them

use kiosk_core::{AppPhase, FieldId, Screen};
use tracing::{debug, info, warn};

use crate::message::Control;
use crate::screen::Transition;
use crate::state::AppState;

use super::{feedback, form, video, UpdateAction, UpdateResult};

/// Show Home for the first time and kick off the retry queue
pub fn handle_start(state: &mut AppState) -> UpdateResult {
    if state.phase != AppPhase::Initializing {
        debug!("Start ignored: engine already {:?}", state.phase);
        return UpdateResult::none();
    }
    state.phase = AppPhase::Running;

    let mut result = show_screen(state, Screen::Home);
    if state.settings.submission.retry_pending_on_start && state.settings.remote_endpoint().is_some()
    {
        result.actions.push(UpdateAction::DrainPending);
    }
    result
}

/// Make `target` the visible screen
///
/// No-op when `target` is already visible or disabled by capabilities.
/// Otherwise playback is stopped, leaving Form cancels its message timers,
/// entering Form or Feedback resets that session, and entering ThankYou arms
/// the idle timeout when configured.
pub fn show_screen(state: &mut AppState, target: Screen) -> UpdateResult {
    if !state.is_enabled(target) {
        warn!("{} is disabled by configuration", target);
        return UpdateResult::none();
    }

    let from = match state.screens.show(target) {
        Transition::Unchanged(_) => return UpdateResult::none(),
        Transition::Changed { from, .. } => from,
    };

    let mut actions = Vec::new();

    if state.video.release().is_some() {
        actions.push(UpdateAction::StopVideo);
    }

    if from == Some(Screen::Form) {
        actions.push(UpdateAction::CancelAllMessageClears);
    }

    match target {
        Screen::Form => {
            state.form.reset();
            state.form.set_focus(FieldId::Name);
        }
        Screen::Feedback => state.feedback.reset(),
        Screen::ThankYou => {
            let visit = state.begin_thank_you_visit();
            if let Some(delay) = state.settings.timing.thank_you_timeout() {
                actions.push(UpdateAction::ScheduleThankYouTimeout { visit, delay });
            }
        }
        _ => {}
    }

    match from {
        Some(from) => info!("Screen {} -> {}", from, target),
        None => info!("Screen {}", target),
    }
    UpdateResult::actions(actions)
}

/// Route a pressed control to its handler
///
/// Controls that do not belong to the visible screen are ignored.
pub fn handle_control(state: &mut AppState, control: Control) -> UpdateResult {
    let active = state.active_screen();
    match (control, active) {
        (Control::Home, Some(_)) => show_screen(state, Screen::Home),

        (Control::Explore, Some(Screen::Home)) => {
            if state.settings.capabilities.has_video {
                show_screen(state, Screen::VideoSelection)
            } else {
                show_screen(state, Screen::AreYouReady)
            }
        }

        (Control::PlayClip(index), Some(Screen::VideoSelection)) => video::play_clip(state, index),
        (Control::StopClip, Some(Screen::VideoSelection)) => video::stop_clip(state),
        (Control::Continue, Some(Screen::VideoSelection)) => {
            show_screen(state, Screen::AreYouReady)
        }

        (Control::StartForm, Some(Screen::AreYouReady)) => show_screen(state, Screen::Form),
        (Control::StartFeedback, Some(Screen::AreYouReady)) => {
            show_screen(state, Screen::Feedback)
        }

        (Control::SubmitForm, Some(Screen::Form)) => form::submit(state),
        (Control::SubmitFeedback, Some(Screen::Feedback)) => feedback::submit(state),

        (control, active) => {
            debug!("Ignoring {:?} on {:?}", control, active);
            UpdateResult::none()
        }
    }
}

pub fn handle_thank_you_timeout(state: &mut AppState, visit: u64) -> UpdateResult {
    if state.screens.is_active(Screen::ThankYou) && state.thank_you_visit() == visit {
        debug!("ThankYou idle timeout elapsed");
        show_screen(state, Screen::Home)
    } else {
        UpdateResult::none()
    }
}
