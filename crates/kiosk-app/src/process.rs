//! Message processing: TEA update loop plus action dispatch

use crate::actions::{handle_action, ActionContext};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed immediately; actions are dispatched in
/// the order the handlers returned them.
pub fn process_message(state: &mut AppState, message: Message, ctx: &mut ActionContext<'_>) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        for action in result.actions {
            handle_action(action, ctx);
        }
        msg = result.message;
    }
}
