use std::fmt;

use serde::{Deserialize, Serialize};

use super::identity::Timestamp;

/// Earned trust tier granting periodic free entitlements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SealTier {
    #[default]
    None,
    Blue,
    Yellow,
    Green,
}

/// Periodic free entitlement granted by a seal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitKind {
    /// Free theft-alert activation credit.
    TheftAlert,
    /// Free support call.
    SupportCall,
}

impl fmt::Display for BenefitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TheftAlert => f.write_str("theft_alert"),
            Self::SupportCall => f.write_str("support_call"),
        }
    }
}

/// Per-seal benefit counters and their cycle anchors, embedded in the user.
///
/// An anchor of `None` means the cycle has not started yet; it starts on
/// first access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SealBenefitState {
    pub yellow_seal_stolen_alerts_used: u32,
    pub yellow_seal_benefits_started_at: Option<Timestamp>,
    pub green_seal_stolen_alerts_used: u32,
    pub green_seal_benefits_renewed_at: Option<Timestamp>,
    pub has_used_green_seal_call: bool,
    pub green_seal_call_renewed_at: Option<Timestamp>,
}
