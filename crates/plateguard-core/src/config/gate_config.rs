use serde::{Deserialize, Serialize};

use super::defaults;

/// Interaction gate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Minimum spacing between two evaluations of the same plate by the
    /// same user (seconds).
    pub evaluation_cooldown_secs: i64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            evaluation_cooldown_secs: defaults::DEFAULT_EVALUATION_COOLDOWN_SECS,
        }
    }
}
