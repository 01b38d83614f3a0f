//! Results coming back from the submission client

use kiosk_core::SubmissionKind;
use kiosk_submit::{DrainReport, SubmissionOutcome};
use tracing::{info, warn};

use crate::state::{AppState, SubmissionFailure};

use super::UpdateResult;

pub fn handle_completed(
    state: &mut AppState,
    ticket: u64,
    outcome: SubmissionOutcome,
) -> UpdateResult {
    let error = outcome.error();

    match outcome.kind {
        SubmissionKind::Form => state.form.complete(ticket, error.clone()),
        SubmissionKind::Feedback => state.feedback.complete(ticket, error.clone()),
    };

    match error {
        None => state.diagnostics.delivered += 1,
        Some(error) => {
            warn!("{} submission failed: {}", outcome.kind, error);
            state.diagnostics.failed += 1;
            if let Some(pending) = outcome.pending {
                state.diagnostics.pending = pending;
            }
            state.diagnostics.last_failure = Some(SubmissionFailure {
                kind: outcome.kind,
                error,
                queued: outcome.queued.is_some(),
            });
        }
    }
    UpdateResult::none()
}

pub fn handle_drained(state: &mut AppState, report: DrainReport) -> UpdateResult {
    if report.delivered > 0 || report.failed > 0 {
        info!(
            "Retry queue: {} delivered, {} still failing",
            report.delivered, report.failed
        );
    }
    state.diagnostics.delivered += report.delivered as u64;
    state.diagnostics.pending = report.remaining;
    UpdateResult::none()
}

pub fn handle_drain_failed(_state: &mut AppState, error: String) -> UpdateResult {
    warn!("Could not retry pending submissions: {}", error);
    UpdateResult::none()
}
