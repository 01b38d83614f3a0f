//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use kiosk_submit::SubmissionClient;
use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::video::{PlaybackObserver, VideoPlayer};

pub mod submission;
pub mod timers;

pub use timers::MessageTimers;

/// Everything actions can touch outside `AppState`
pub struct ActionContext<'a> {
    pub msg_tx: &'a mpsc::Sender<Message>,
    pub timers: &'a mut MessageTimers,
    pub client: &'a Arc<SubmissionClient>,
    pub player: &'a mut dyn VideoPlayer,
}

/// Execute an action, spawning a background task where it waits on anything
pub fn handle_action(action: UpdateAction, ctx: &mut ActionContext<'_>) {
    match action {
        UpdateAction::ScheduleMessageClear {
            field,
            generation,
            delay,
        } => {
            ctx.timers
                .schedule(field, generation, delay, ctx.msg_tx.clone());
        }

        UpdateAction::CancelMessageClears { fields } => ctx.timers.cancel(&fields),

        UpdateAction::CancelAllMessageClears => ctx.timers.cancel_all(),

        UpdateAction::Submit { ticket, submission } => {
            submission::spawn_submit(ctx.client.clone(), ticket, submission, ctx.msg_tx.clone());
        }

        UpdateAction::DrainPending => {
            submission::spawn_drain(ctx.client.clone(), ctx.msg_tx.clone());
        }

        UpdateAction::PlayVideo { clip, token } => {
            let observer = PlaybackObserver::new(token, ctx.msg_tx.clone());
            ctx.player.play(&clip, observer);
        }

        UpdateAction::StopVideo => ctx.player.stop(),

        UpdateAction::ScheduleThankYouTimeout { visit, delay } => {
            ctx.timers.schedule_idle(visit, delay, ctx.msg_tx.clone());
        }
    }
}
