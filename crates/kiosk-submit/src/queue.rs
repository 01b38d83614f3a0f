//! Durable queue of remote sends that failed
//!
//! The kiosk never blocks the visitor on the network, so a failed POST is
//! parked here (`pending.json`) and re-sent on the next start.

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use kiosk_core::prelude::*;
use kiosk_core::{Submission, SubmissionKind};
use serde::{Deserialize, Serialize};

use crate::store::JsonListFile;

/// File name of the queue inside the data directory
pub const PENDING_FILENAME: &str = "pending.json";

/// A submission waiting to be re-posted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingSubmission {
    pub id: u64,
    pub kind: SubmissionKind,
    pub payload: Submission,
    pub attempts: u32,
    pub last_error: String,
    pub queued_at: DateTime<Utc>,
}

/// Where a freshly queued submission landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enqueued {
    pub id: u64,
    /// Queue length right after this entry was written
    pub len: usize,
}

#[derive(Debug)]
pub struct PendingQueue {
    file: JsonListFile,
    lock: Mutex<()>,
}

impl PendingQueue {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonListFile::new(dir.into().join(PENDING_FILENAME), "pending"),
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| Error::persistence("pending queue lock poisoned"))
    }

    fn read(&self) -> Result<Vec<PendingSubmission>> {
        let mut entries = Vec::new();
        for value in self.file.read()? {
            match serde_json::from_value(value) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!("Dropping unreadable pending entry: {}", e),
            }
        }
        Ok(entries)
    }

    fn write(&self, entries: &[PendingSubmission]) -> Result<()> {
        let values = entries
            .iter()
            .map(serde_json::to_value)
            .collect::<serde_json::Result<Vec<_>>>()?;
        self.file.write(&values)
    }

    /// Queue a failed send
    pub fn enqueue(&self, payload: &Submission, error: &str) -> Result<Enqueued> {
        let _guard = self.guard()?;
        let mut entries = self.read()?;
        let id = entries.iter().map(|e| e.id).max().map_or(1, |max| max + 1);
        entries.push(PendingSubmission {
            id,
            kind: payload.kind(),
            payload: payload.clone(),
            attempts: 1,
            last_error: error.to_string(),
            queued_at: Utc::now(),
        });
        self.write(&entries)?;
        info!("Queued {} submission #{} for retry", payload.kind(), id);
        Ok(Enqueued {
            id,
            len: entries.len(),
        })
    }

    /// Current queue contents, oldest first
    pub fn entries(&self) -> Result<Vec<PendingSubmission>> {
        let _guard = self.guard()?;
        self.read()
    }

    pub fn len(&self) -> usize {
        self.entries().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop delivered entries and record another failed attempt for the rest
    ///
    /// Entries queued after the snapshot was taken are left untouched.
    pub fn settle(&self, delivered: &[u64], failed: &[(u64, String)]) -> Result<usize> {
        let _guard = self.guard()?;
        let mut entries = self.read()?;
        entries.retain(|e| !delivered.contains(&e.id));
        for entry in entries.iter_mut() {
            if let Some((_, error)) = failed.iter().find(|(id, _)| *id == entry.id) {
                entry.attempts += 1;
                entry.last_error = error.clone();
            }
        }
        self.write(&entries)?;
        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::FeedbackSubmission;
    use tempfile::tempdir;

    fn feedback(stars: u8) -> Submission {
        Submission::Feedback(FeedbackSubmission { star_rating: stars })
    }

    #[test]
    fn test_enqueue_assigns_increasing_ids() {
        let temp = tempdir().unwrap();
        let queue = PendingQueue::new(temp.path());

        assert_eq!(
            queue.enqueue(&feedback(3), "timeout").unwrap(),
            Enqueued { id: 1, len: 1 }
        );
        assert_eq!(
            queue.enqueue(&feedback(4), "timeout").unwrap(),
            Enqueued { id: 2, len: 2 }
        );
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_settle_removes_delivered_and_bumps_failed() {
        let temp = tempdir().unwrap();
        let queue = PendingQueue::new(temp.path());
        let a = queue.enqueue(&feedback(1), "timeout").unwrap().id;
        let b = queue.enqueue(&feedback(2), "timeout").unwrap().id;

        let remaining = queue.settle(&[a], &[(b, "HTTP 500".to_string())]).unwrap();
        assert_eq!(remaining, 1);

        let entries = queue.entries().unwrap();
        assert_eq!(entries[0].id, b);
        assert_eq!(entries[0].attempts, 2);
        assert_eq!(entries[0].last_error, "HTTP 500");
    }

    #[test]
    fn test_queue_survives_reopen() {
        let temp = tempdir().unwrap();
        PendingQueue::new(temp.path())
            .enqueue(&feedback(5), "offline")
            .unwrap();

        let reopened = PendingQueue::new(temp.path());
        let entries = reopened.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].payload, feedback(5));
        assert_eq!(entries[0].kind, SubmissionKind::Feedback);
    }

    #[test]
    fn test_empty_queue() {
        let temp = tempdir().unwrap();
        assert!(PendingQueue::new(temp.path()).is_empty());
    }
}
