use serde::{Deserialize, Serialize};

use super::defaults;

/// Paid theft-alert subscription configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Standard alert duration (days), used for activation and free renewal.
    pub duration_days: i64,
    /// The free renewal opens once this many days or fewer remain.
    pub free_renewal_window_days: i64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            duration_days: defaults::DEFAULT_ALERT_DURATION_DAYS,
            free_renewal_window_days: defaults::DEFAULT_FREE_RENEWAL_WINDOW_DAYS,
        }
    }
}
