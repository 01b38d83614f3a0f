//! Star rating and the feedback submission snapshot

use serde::{Deserialize, Serialize};

/// Highest selectable star
pub const MAX_STARS: u8 = 5;

/// Star rating in `0..=5`; 0 means unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const UNSET: Rating = Rating(0);

    /// Build a rating, rejecting values above [`MAX_STARS`]
    pub fn new(stars: u8) -> Option<Self> {
        (stars <= MAX_STARS).then_some(Self(stars))
    }

    pub fn stars(&self) -> u8 {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0 > 0
    }

    /// Whether star `index` (0-based) is highlighted, i.e. `index < rating`
    pub fn highlights(&self, index: u8) -> bool {
        index < self.0
    }
}

/// Immutable snapshot of a submitted rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    pub star_rating: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_some());
        assert!(Rating::new(5).is_some());
        assert!(Rating::new(6).is_none());
    }

    #[test]
    fn test_highlight_range() {
        let rating = Rating::new(3).unwrap();
        let lit: Vec<bool> = (0..MAX_STARS).map(|i| rating.highlights(i)).collect();
        assert_eq!(lit, vec![true, true, true, false, false]);
    }

    #[test]
    fn test_unset_rating() {
        assert!(!Rating::UNSET.is_set());
        assert!(!Rating::UNSET.highlights(0));
    }

    #[test]
    fn test_feedback_wire_shape() {
        let json = serde_json::to_string(&FeedbackSubmission { star_rating: 4 }).unwrap();
        assert_eq!(json, r#"{"starRating":4}"#);
    }
}
