use serde::{Deserialize, Serialize};

use super::defaults;

/// Seal benefit caps and cycle lengths. Fixed per tier for every user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenefitConfig {
    /// Free theft-alert credits per cycle for yellow-seal users.
    pub yellow_theft_alert_cap: u32,
    /// Free theft-alert credits per cycle for green-seal users.
    pub green_theft_alert_cap: u32,
    /// Theft-alert cycle length (days).
    pub theft_alert_cycle_days: i64,
    /// Free support calls per cycle for green-seal clients.
    pub green_client_support_call_cap: u32,
    /// Support-call cycle length (days).
    pub support_call_cycle_days: i64,
}

impl Default for BenefitConfig {
    fn default() -> Self {
        Self {
            yellow_theft_alert_cap: defaults::DEFAULT_YELLOW_THEFT_ALERT_CAP,
            green_theft_alert_cap: defaults::DEFAULT_GREEN_THEFT_ALERT_CAP,
            theft_alert_cycle_days: defaults::DEFAULT_THEFT_ALERT_CYCLE_DAYS,
            green_client_support_call_cap: defaults::DEFAULT_GREEN_CLIENT_SUPPORT_CALL_CAP,
            support_call_cycle_days: defaults::DEFAULT_SUPPORT_CALL_CYCLE_DAYS,
        }
    }
}
