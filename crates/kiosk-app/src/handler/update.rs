//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{feedback, form, keys::handle_key, navigation, submission, video, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and actions
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Tick => UpdateResult::none(),

        Message::Start => navigation::handle_start(state),

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Activate(control) => navigation::handle_control(state, control),

        Message::ShowScreen(screen) => navigation::show_screen(state, screen),

        // ─────────────────────────────────────────────────────────
        // Form Input
        // ─────────────────────────────────────────────────────────
        Message::SetFieldText { field, text } => form::handle_set_text(state, field, text),
        Message::FocusField(field) => form::handle_focus(state, field),
        Message::MessageExpired { field, generation } => {
            form::handle_message_expired(state, field, generation)
        }

        // ─────────────────────────────────────────────────────────
        // Feedback
        // ─────────────────────────────────────────────────────────
        Message::SelectRating(stars) => feedback::handle_select(state, stars),

        // ─────────────────────────────────────────────────────────
        // Video
        // ─────────────────────────────────────────────────────────
        Message::MoveClipCursor(delta) => video::handle_move_cursor(state, delta),
        Message::VideoFinished { token } => video::handle_finished(state, token),

        // ─────────────────────────────────────────────────────────
        // Submission
        // ─────────────────────────────────────────────────────────
        Message::SubmissionCompleted { ticket, outcome } => {
            submission::handle_completed(state, ticket, outcome)
        }
        Message::PendingDrained(report) => submission::handle_drained(state, report),
        Message::PendingDrainFailed { error } => submission::handle_drain_failed(state, error),

        Message::ThankYouTimeout { visit } => navigation::handle_thank_you_timeout(state, visit),
    }
}
