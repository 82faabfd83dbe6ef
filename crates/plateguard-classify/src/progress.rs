use plateguard_core::models::{Category, ScoreAxis};

use crate::CategoryClassifier;

/// Where a score sits on the ladder and how far the next category is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierProgress {
    pub current: Category,
    /// `None` at the highest tier.
    pub next: Option<Category>,
    /// Points still needed to reach `next`.
    pub points_to_next: Option<i64>,
}

impl CategoryClassifier {
    /// Points needed to reach the next tier, or `None` at the top.
    pub fn points_to_next_tier(&self, score: i64) -> Option<i64> {
        self.upper_bound(self.tier(score))
            .map(|bound| bound.saturating_sub(score))
    }

    /// The category directly above the score's current one.
    pub fn next_category(&self, score: i64, axis: ScoreAxis) -> Option<Category> {
        self.tier(score)
            .next()
            .map(|tier| Category::from_tier(axis, tier))
    }

    /// Current category, next category and distance, for display.
    pub fn progress(&self, score: i64, axis: ScoreAxis) -> TierProgress {
        TierProgress {
            current: self.classify(score, axis),
            next: self.next_category(score, axis),
            points_to_next: self.points_to_next_tier(score),
        }
    }
}
