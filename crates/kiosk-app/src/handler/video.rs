//! Clip playback handlers

use kiosk_core::Screen;
use tracing::{debug, info, warn};

use crate::state::AppState;

use super::{navigation::show_screen, UpdateAction, UpdateResult};

pub fn play_clip(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(clip) = state.settings.videos.get(index).cloned() else {
        warn!("No clip at index {}", index);
        return UpdateResult::none();
    };

    let mut actions = Vec::with_capacity(2);
    if state.video.release().is_some() {
        actions.push(UpdateAction::StopVideo);
    }
    let token = state.video.register(index);
    state.video.cursor = index;
    info!("Playing {} ({})", clip.title, clip.id);
    actions.push(UpdateAction::PlayVideo { clip, token });
    UpdateResult::actions(actions)
}

pub fn stop_clip(state: &mut AppState) -> UpdateResult {
    match state.video.release() {
        Some(_) => UpdateResult::action(UpdateAction::StopVideo),
        None => UpdateResult::none(),
    }
}

pub fn handle_finished(state: &mut AppState, token: u64) -> UpdateResult {
    if !state.video.is_current(token) {
        debug!("Ignoring completion for released playback {}", token);
        return UpdateResult::none();
    }
    state.video.release();
    UpdateResult::action(UpdateAction::StopVideo).merge(show_screen(state, Screen::VideoSelection))
}

pub fn handle_move_cursor(state: &mut AppState, delta: isize) -> UpdateResult {
    let len = state.settings.videos.len();
    state.video.move_cursor(delta, len);
    UpdateResult::none()
}
