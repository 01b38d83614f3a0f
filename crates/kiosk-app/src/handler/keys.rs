//! Key event handlers for each screen

use kiosk_core::{FieldId, Screen, MAX_STARS};

use crate::input_key::InputKey;
use crate::message::{Control, Message};
use crate::state::AppState;

use super::form::{erased, typed};

/// Convert key events to messages based on the visible screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.active_screen()? {
        Screen::Home => handle_key_home(key),
        Screen::VideoSelection => handle_key_video_selection(state, key),
        Screen::AreYouReady => handle_key_are_you_ready(state, key),
        Screen::Form => handle_key_form(state, key),
        Screen::Feedback => handle_key_feedback(state, key),
        Screen::ThankYou => handle_key_thank_you(key),
    }
}

fn activate(control: Control) -> Option<Message> {
    Some(Message::Activate(control))
}

fn handle_key_home(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => activate(Control::Explore),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_video_selection(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::MoveClipCursor(-1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveClipCursor(1)),
        InputKey::Enter => activate(Control::PlayClip(state.video.cursor)),
        InputKey::Char('s') => activate(Control::StopClip),
        InputKey::Char('n') | InputKey::Tab => activate(Control::Continue),
        InputKey::Esc => activate(Control::Home),
        // 1-9 plays the clip directly
        key => match key.digit() {
            Some(d @ 1..=9) => activate(Control::PlayClip(d as usize - 1)),
            _ => None,
        },
    }
}

fn handle_key_are_you_ready(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('f') => activate(Control::StartForm),
        InputKey::Char('r') if state.settings.capabilities.has_feedback => {
            activate(Control::StartFeedback)
        }
        InputKey::Esc => activate(Control::Home),
        _ => None,
    }
}

fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.form.focus().unwrap_or(FieldId::Name);
    match key {
        InputKey::Tab | InputKey::Down => Some(Message::FocusField(focus.next())),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusField(focus.prev())),
        InputKey::Enter => activate(Control::SubmitForm),
        InputKey::Esc => activate(Control::Home),
        InputKey::Backspace => {
            erased(state).map(|(field, text)| Message::SetFieldText { field, text })
        }
        InputKey::Char(c) => {
            typed(state, c).map(|(field, text)| Message::SetFieldText { field, text })
        }
        _ => None,
    }
}

fn handle_key_feedback(state: &AppState, key: InputKey) -> Option<Message> {
    let stars = state.feedback.rating().stars();
    match key {
        InputKey::Left => Some(Message::SelectRating(stars.saturating_sub(1).max(1))),
        InputKey::Right => Some(Message::SelectRating((stars + 1).min(MAX_STARS))),
        InputKey::Enter => activate(Control::SubmitFeedback),
        InputKey::Esc => activate(Control::Home),
        key => match key.digit() {
            Some(d @ 1..=5) => Some(Message::SelectRating(d)),
            _ => None,
        },
    }
}

fn handle_key_thank_you(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => activate(Control::Home),
        _ => None,
    }
}
