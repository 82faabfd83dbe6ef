use serde::{Deserialize, Serialize};

use super::identity::Timestamp;

/// Paid theft-alert subscription attached to a vehicle.
///
/// `is_active` is a cache of `now < expires_at` as of the last lifecycle
/// operation. Decisions always recompute it from `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StolenAlertInfo {
    pub activated_at: Timestamp,
    pub expires_at: Timestamp,
    /// Flips to true on the first free renewal and never back.
    pub renewal_used: bool,
    pub is_active: bool,
}
