//! Clear timers for field messages and the ThankYou idle timer
//!
//! All field clears run on one worker task that owns a queue ordered by
//! `(deadline, seq)`, so clears with equal deadlines are posted in the order
//! they were scheduled, whatever the runtime flavor. Scheduling a field again
//! replaces its queued clear; the generation check in the handler covers a
//! clear already sitting in the channel.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use kiosk_core::FieldId;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

use crate::message::Message;

type ClearKey = (Instant, u64);

#[derive(Debug)]
enum ClearCommand {
    Schedule {
        field: FieldId,
        generation: u64,
        key: ClearKey,
    },
    Cancel(Vec<FieldId>),
    CancelAll,
}

/// Pending clears, owned by the worker task
#[derive(Debug, Default)]
struct ClearQueue {
    due: BTreeMap<ClearKey, (FieldId, u64)>,
    by_field: HashMap<FieldId, ClearKey>,
}

impl ClearQueue {
    fn apply(&mut self, command: ClearCommand) {
        match command {
            ClearCommand::Schedule {
                field,
                generation,
                key,
            } => {
                if let Some(previous) = self.by_field.insert(field, key) {
                    self.due.remove(&previous);
                }
                self.due.insert(key, (field, generation));
            }
            ClearCommand::Cancel(fields) => {
                for field in fields {
                    if let Some(key) = self.by_field.remove(&field) {
                        self.due.remove(&key);
                    }
                }
            }
            ClearCommand::CancelAll => {
                self.due.clear();
                self.by_field.clear();
            }
        }
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.due.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Earliest clear whose deadline has passed
    fn pop_due(&mut self, now: Instant) -> Option<(FieldId, u64)> {
        let (&key, _) = self
            .due
            .iter()
            .next()
            .filter(|((deadline, _), _)| *deadline <= now)?;
        let entry = self.due.remove(&key)?;
        self.by_field.remove(&entry.0);
        Some(entry)
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Worker loop: commands win over expiries, one clear is posted per pass
async fn run_clears(
    mut commands: mpsc::UnboundedReceiver<ClearCommand>,
    msg_tx: mpsc::Sender<Message>,
) {
    let mut queue = ClearQueue::default();
    loop {
        tokio::select! {
            biased;
            command = commands.recv() => match command {
                Some(command) => queue.apply(command),
                None => return,
            },
            _ = wait_until(queue.next_deadline()) => {
                if let Some((field, generation)) = queue.pop_due(Instant::now()) {
                    if msg_tx
                        .send(Message::MessageExpired { field, generation })
                        .await
                        .is_err()
                    {
                        return;
                    }
                }
            }
        }
    }
}

#[derive(Debug)]
struct ClearWorker {
    commands: mpsc::UnboundedSender<ClearCommand>,
    handle: JoinHandle<()>,
}

#[derive(Debug, Default)]
pub struct MessageTimers {
    clears: Option<ClearWorker>,
    /// Deadlines of clears not yet cancelled, mirrored for `pending`
    deadlines: HashMap<FieldId, Instant>,
    next_seq: u64,
    idle: Option<JoinHandle<()>>,
}

impl MessageTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post `MessageExpired` for `field` after `delay`
    ///
    /// The worker starts on first use and posts to `msg_tx` from then on.
    pub fn schedule(
        &mut self,
        field: FieldId,
        generation: u64,
        delay: Duration,
        msg_tx: mpsc::Sender<Message>,
    ) {
        let deadline = Instant::now() + delay;
        let seq = self.next_seq;
        self.next_seq += 1;

        self.send(
            ClearCommand::Schedule {
                field,
                generation,
                key: (deadline, seq),
            },
            Some(msg_tx),
        );
        self.deadlines.insert(field, deadline);
        trace!("Clear for {} scheduled in {:?}", field, delay);
    }

    pub fn cancel(&mut self, fields: &[FieldId]) {
        for field in fields {
            self.deadlines.remove(field);
        }
        self.send(ClearCommand::Cancel(fields.to_vec()), None);
    }

    pub fn cancel_all(&mut self) {
        self.deadlines.clear();
        self.send(ClearCommand::CancelAll, None);
    }

    /// Field clears that have not fired yet
    pub fn pending(&self) -> usize {
        let now = Instant::now();
        self.deadlines.values().filter(|d| **d > now).count()
    }

    fn send(&mut self, command: ClearCommand, msg_tx: Option<mpsc::Sender<Message>>) {
        if self.clears.is_none() {
            // Nothing queued yet, so a cancel has nothing to do
            let Some(msg_tx) = msg_tx else { return };
            let (commands, rx) = mpsc::unbounded_channel();
            self.clears = Some(ClearWorker {
                commands,
                handle: tokio::spawn(run_clears(rx, msg_tx)),
            });
        }
        if let Some(worker) = &self.clears {
            let _ = worker.commands.send(command);
        }
    }

    /// Post `ThankYouTimeout` for `visit` after `delay`
    pub fn schedule_idle(&mut self, visit: u64, delay: Duration, msg_tx: mpsc::Sender<Message>) {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = msg_tx.send(Message::ThankYouTimeout { visit }).await;
        });
        if let Some(previous) = self.idle.replace(handle) {
            previous.abort();
        }
    }

    /// Abort everything (engine shutdown)
    pub fn shutdown(&mut self) {
        self.deadlines.clear();
        if let Some(worker) = self.clears.take() {
            worker.handle.abort();
        }
        if let Some(handle) = self.idle.take() {
            handle.abort();
        }
    }
}

impl Drop for MessageTimers {
    fn drop(&mut self) {
        self.shutdown();
    }
}
