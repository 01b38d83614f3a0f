//! kiosk-submit - Submission delivery for the kiosk presenter
//!
//! This crate owns every side effect of a submission:
//! - `store`: read-merge-write JSON records per submission kind
//! - `endpoint`: the remote POST seam and its reqwest implementation
//! - `queue`: durable retry queue for failed remote sends
//! - `client`: [`SubmissionClient`] tying the three together

pub mod client;
pub mod endpoint;
pub mod queue;
pub mod store;

pub use client::{ClientConfig, DrainReport, SubmissionClient, SubmissionOutcome};
pub use endpoint::{HttpEndpoint, LocalRemoteEndpoint, RemoteEndpoint};
pub use queue::{Enqueued, PendingQueue, PendingSubmission, PENDING_FILENAME};
pub use store::{JsonListFile, RecordStore};
