use serde::{Deserialize, Serialize};

use super::defaults;

/// Score/ICC decay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Policy name: "none" or "monthly_step".
    pub policy: String,
    /// Points moved toward zero per full month ("monthly_step" only).
    pub points_per_month: i64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            policy: defaults::DEFAULT_DECAY_POLICY.to_string(),
            points_per_month: defaults::DEFAULT_DECAY_POINTS_PER_MONTH,
        }
    }
}
