use serde::{Deserialize, Serialize};

use super::identity::{Plate, Timestamp, UserId};
use super::score_history::ScoreHistoryEntry;
use super::seal::{SealBenefitState, SealTier};
use super::stolen_alert::StolenAlertInfo;
use super::verification::VerificationCode;

/// The fields of a vehicle record the engine reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub plate: Plate,
    /// Plate Score. Produced by the event-scoring pipeline.
    pub score: i64,
    pub last_score_update: Timestamp,
    #[serde(default)]
    pub score_history: Vec<ScoreHistoryEntry>,
    #[serde(default)]
    pub stolen_alert: Option<StolenAlertInfo>,
}

impl VehicleRecord {
    pub fn new(plate: Plate, score: i64, now: Timestamp) -> Self {
        Self {
            plate,
            score,
            last_score_update: now,
            score_history: Vec::new(),
            stolen_alert: None,
        }
    }
}

/// The fields of a user record the engine reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    /// Contribution index. Produced by the event-scoring pipeline.
    pub icc: i64,
    pub last_icc_update: Timestamp,
    #[serde(default)]
    pub seal: SealTier,
    #[serde(default)]
    pub is_client: bool,
    #[serde(default)]
    pub benefits: SealBenefitState,
    #[serde(default)]
    pub verification: Option<VerificationCode>,
}

impl UserRecord {
    pub fn new(id: UserId, icc: i64, now: Timestamp) -> Self {
        Self {
            id,
            icc,
            last_icc_update: now,
            seal: SealTier::None,
            is_client: false,
            benefits: SealBenefitState::default(),
            verification: None,
        }
    }

    pub fn with_seal(mut self, seal: SealTier, is_client: bool) -> Self {
        self.seal = seal;
        self.is_client = is_client;
        self
    }
}
