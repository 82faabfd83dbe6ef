//! Score snapshots taken when a plate changes hands.

use plateguard_core::models::{ArchiveReason, ScoreAxis, ScoreHistoryEntry, Timestamp};

use crate::CategoryClassifier;

impl CategoryClassifier {
    /// Freeze a plate's score and category at `now`.
    pub fn snapshot(&self, score: i64, reason: ArchiveReason, now: Timestamp) -> ScoreHistoryEntry {
        ScoreHistoryEntry {
            score,
            category: self.classify(score, ScoreAxis::Plate),
            archived_at: now,
            reason,
        }
    }
}
