use serde::{Deserialize, Serialize};

use super::category::Category;
use super::identity::Timestamp;

/// Why a plate's score was archived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveReason {
    /// Ownership transferred to another person.
    Transfer,
    /// A new owner claimed the plate.
    Claim,
}

/// Snapshot of a plate's score taken when ownership changes.
/// Appended to the vehicle and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreHistoryEntry {
    pub score: i64,
    pub category: Category,
    pub archived_at: Timestamp,
    pub reason: ArchiveReason,
}
