//! Submission client: local record + remote POST + retry queue

use std::path::PathBuf;
use std::time::Duration;

use kiosk_core::prelude::*;
use kiosk_core::{Submission, SubmissionKind};

use crate::endpoint::{HttpEndpoint, RemoteEndpoint};
use crate::queue::PendingQueue;
use crate::store::RecordStore;

/// Delivery settings, resolved from the kiosk configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Directory holding `formdata.json`, `feedback.json` and `pending.json`
    pub data_dir: PathBuf,
    /// Read-merge-write every submission into the local record
    pub persist_locally: bool,
    /// POST target; `None` disables remote delivery
    pub endpoint_url: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

/// What happened to one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub kind: SubmissionKind,
    /// Record count after the local write, or the error, if attempted
    pub persisted: Option<std::result::Result<usize, String>>,
    /// Response body, or the error, if a POST was attempted
    pub remote: Option<std::result::Result<String, String>>,
    /// Queue id when the POST failed and the payload was parked for retry
    pub queued: Option<u64>,
    /// Retry queue length after parking this payload
    pub pending: Option<usize>,
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        self.persisted.as_ref().is_none_or(|r| r.is_ok())
            && self.remote.as_ref().is_none_or(|r| r.is_ok())
    }

    /// First failure, formatted for diagnostics
    pub fn error(&self) -> Option<String> {
        if let Some(Err(e)) = &self.persisted {
            return Some(format!("local save failed: {e}"));
        }
        if let Some(Err(e)) = &self.remote {
            return Some(format!("remote send failed: {e}"));
        }
        None
    }
}

/// Result of re-sending the retry queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrainReport {
    pub delivered: usize,
    pub failed: usize,
    pub remaining: usize,
}

/// Delivers submissions to local storage and/or a remote endpoint
///
/// Shared behind an `Arc` by the engine; every send runs as its own task.
#[derive(Debug)]
pub struct SubmissionClient<E = HttpEndpoint> {
    store: Option<RecordStore>,
    endpoint: Option<E>,
    queue: PendingQueue,
}

impl SubmissionClient<HttpEndpoint> {
    /// Build a client from configuration, using HTTP for remote delivery
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let endpoint = match &config.endpoint_url {
            Some(url) => Some(HttpEndpoint::new(url.clone(), config.timeout)?),
            None => None,
        };
        Ok(Self::new(config, endpoint))
    }
}

impl<E: RemoteEndpoint + Sync> SubmissionClient<E> {
    pub fn new(config: &ClientConfig, endpoint: Option<E>) -> Self {
        Self {
            store: config
                .persist_locally
                .then(|| RecordStore::new(&config.data_dir)),
            endpoint,
            queue: PendingQueue::new(&config.data_dir),
        }
    }

    pub fn store(&self) -> Option<&RecordStore> {
        self.store.as_ref()
    }

    pub fn queue(&self) -> &PendingQueue {
        &self.queue
    }

    pub fn sends_remotely(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Persist and/or post one submission
    ///
    /// Never retries inline: a failed POST is parked in the pending queue.
    pub async fn send(&self, submission: &Submission) -> SubmissionOutcome {
        let kind = submission.kind();

        let persisted = self.store.as_ref().map(|store| {
            store.append(submission).map_err(|e| {
                error!("Failed to store {} submission: {}", kind, e);
                e.to_string()
            })
        });

        let mut queued = None;
        let mut pending = None;
        let remote = match &self.endpoint {
            Some(endpoint) => {
                let result = self.post(endpoint, submission).await;
                if let Err(e) = &result {
                    warn!(
                        "Remote {} submission to {} failed: {}",
                        kind,
                        endpoint.describe(),
                        e
                    );
                    match self.queue.enqueue(submission, e) {
                        Ok(entry) => {
                            queued = Some(entry.id);
                            pending = Some(entry.len);
                        }
                        Err(qe) => error!("Failed to queue {} submission: {}", kind, qe),
                    }
                }
                Some(result)
            }
            None => None,
        };

        SubmissionOutcome {
            kind,
            persisted,
            remote,
            queued,
            pending,
        }
    }

    async fn post(&self, endpoint: &E, submission: &Submission) -> std::result::Result<String, String> {
        let body = submission.to_json().map_err(|e| e.to_string())?;
        match endpoint.post_json(body).await {
            Ok(response) => {
                info!("{} submission posted: {}", submission.kind(), response);
                Ok(response)
            }
            Err(e) => Err(e.to_string()),
        }
    }

    /// Re-post everything in the retry queue
    ///
    /// Entries that fail again stay queued with their attempt count bumped.
    pub async fn drain_pending(&self) -> Result<DrainReport> {
        let Some(endpoint) = &self.endpoint else {
            return Ok(DrainReport {
                remaining: self.queue.len(),
                ..Default::default()
            });
        };

        let entries = self.queue.entries()?;
        if entries.is_empty() {
            return Ok(DrainReport::default());
        }
        info!("Retrying {} pending submission(s)", entries.len());

        let mut delivered = Vec::new();
        let mut failed = Vec::new();
        for entry in entries {
            match self.post(endpoint, &entry.payload).await {
                Ok(_) => delivered.push(entry.id),
                Err(e) => {
                    debug!("Pending #{} still failing: {}", entry.id, e);
                    failed.push((entry.id, e));
                }
            }
        }

        let remaining = self.queue.settle(&delivered, &failed)?;
        Ok(DrainReport {
            delivered: delivered.len(),
            failed: failed.len(),
            remaining,
        })
    }
}
