//! Contact form handlers

use kiosk_core::{FieldId, Screen, Submission};
use tracing::{debug, info};

use crate::form_session::SubmitAttempt;
use crate::state::AppState;

use super::{navigation::show_screen, UpdateAction, UpdateResult};

pub fn handle_set_text(state: &mut AppState, field: FieldId, text: String) -> UpdateResult {
    if state.screens.is_active(Screen::Form) {
        state.form.set_text(field, text);
    } else {
        debug!("Text for {} ignored outside the form", field);
    }
    UpdateResult::none()
}

pub fn handle_focus(state: &mut AppState, field: FieldId) -> UpdateResult {
    if state.screens.is_active(Screen::Form) {
        state.form.set_focus(field);
    }
    UpdateResult::none()
}

pub fn handle_message_expired(state: &mut AppState, field: FieldId, generation: u64) -> UpdateResult {
    if !state.form.messages.expire(field, generation) {
        debug!("Stale clear for {} (generation {})", field, generation);
    }
    UpdateResult::none()
}

/// Validate; on success send the snapshot and move to ThankYou
pub fn submit(state: &mut AppState) -> UpdateResult {
    let ticket = state.next_ticket();
    let policy = state.settings.validation.phone_policy;

    match state.form.submit(policy, ticket) {
        SubmitAttempt::Accepted(snapshot) => {
            info!("Form submitted (#{})", state.form.submission_count());
            UpdateResult::action(UpdateAction::Submit {
                ticket,
                submission: Submission::from(snapshot),
            })
            .merge(show_screen(state, Screen::ThankYou))
        }
        SubmitAttempt::Rejected { shown, cleared, .. } => {
            debug!("Form rejected: {} invalid field(s)", shown.len());
            let delay = state.settings.timing.message_clear_delay();
            let mut actions = Vec::with_capacity(shown.len() + 1);
            if !cleared.is_empty() {
                actions.push(UpdateAction::CancelMessageClears { fields: cleared });
            }
            actions.extend(shown.into_iter().map(|(field, generation)| {
                UpdateAction::ScheduleMessageClear {
                    field,
                    generation,
                    delay,
                }
            }));
            UpdateResult::actions(actions)
        }
        SubmitAttempt::Ignored => {
            debug!("Form submit ignored while {}", state.form.phase().label());
            UpdateResult::none()
        }
    }
}

/// Text of the focused field with `c` appended
pub fn typed(state: &AppState, c: char) -> Option<(FieldId, String)> {
    let field = state.form.focus()?;
    let mut text = state.form.fields.get(field).to_string();
    text.push(c);
    Some((field, text))
}

/// Text of the focused field with its last character removed
pub fn erased(state: &AppState) -> Option<(FieldId, String)> {
    let field = state.form.focus()?;
    let mut text = state.form.fields.get(field).to_string();
    text.pop()?;
    Some((field, text))
}
