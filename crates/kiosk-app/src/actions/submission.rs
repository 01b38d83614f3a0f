//! Background submission tasks

use std::sync::Arc;

use kiosk_core::Submission;
use kiosk_submit::SubmissionClient;
use tokio::sync::mpsc;
use tracing::debug;

use crate::message::Message;

/// Send one snapshot; the result comes back as `SubmissionCompleted`
pub fn spawn_submit(
    client: Arc<SubmissionClient>,
    ticket: u64,
    submission: Submission,
    msg_tx: mpsc::Sender<Message>,
) {
    tokio::spawn(async move {
        let outcome = client.send(&submission).await;
        debug!("Submission {} finished: success={}", ticket, outcome.is_success());
        let _ = msg_tx
            .send(Message::SubmissionCompleted { ticket, outcome })
            .await;
    });
}

/// Re-send the retry queue
pub fn spawn_drain(client: Arc<SubmissionClient>, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let msg = match client.drain_pending().await {
            Ok(report) => Message::PendingDrained(report),
            Err(e) => Message::PendingDrainFailed {
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}
