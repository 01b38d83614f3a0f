//! Star rating session

use kiosk_core::{FeedbackSubmission, Rating, MAX_STARS};

use crate::form_session::SubmitPhase;

#[derive(Debug, Clone, Default)]
pub struct FeedbackSession {
    rating: Rating,
    phase: SubmitPhase,
    ticket: Option<u64>,
    submission_count: u64,
}

impl FeedbackSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn submission_count(&self) -> u64 {
        self.submission_count
    }

    pub fn reset(&mut self) {
        self.rating = Rating::UNSET;
        self.phase = SubmitPhase::Editing;
        self.ticket = None;
    }

    /// Select `stars` (1..=5), returning whether the rating changed
    ///
    /// Out-of-range values and selections after submit are ignored.
    pub fn select(&mut self, stars: u8) -> bool {
        if self.phase != SubmitPhase::Editing || stars == 0 || stars > MAX_STARS {
            return false;
        }
        let Some(rating) = Rating::new(stars) else {
            return false;
        };
        if rating == self.rating {
            return false;
        }
        self.rating = rating;
        true
    }

    /// Take the snapshot; `None` without a rating or when already sent
    pub fn submit(&mut self, ticket: u64) -> Option<FeedbackSubmission> {
        if self.phase != SubmitPhase::Editing || !self.rating.is_set() {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        self.ticket = Some(ticket);
        self.submission_count += 1;
        Some(FeedbackSubmission {
            star_rating: self.rating.stars(),
        })
    }

    pub fn complete(&mut self, ticket: u64, error: Option<String>) -> bool {
        if self.ticket != Some(ticket) || self.phase != SubmitPhase::Submitting {
            return false;
        }
        self.phase = match error {
            None => SubmitPhase::Submitted,
            Some(reason) => SubmitPhase::Failed { reason },
        };
        true
    }
}
