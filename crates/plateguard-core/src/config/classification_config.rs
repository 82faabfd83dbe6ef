use serde::{Deserialize, Serialize};

use super::defaults;

/// Category threshold table shared by the Plate Score and ICC axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Lower bounds (inclusive) of tiers 1 through 6. Everything below the
    /// first bound belongs to tier 0.
    pub thresholds: Vec<i64>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            thresholds: defaults::DEFAULT_THRESHOLDS.to_vec(),
        }
    }
}
