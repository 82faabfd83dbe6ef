use chrono::Duration;
use serde::{Deserialize, Serialize};

use plateguard_core::config::defaults::MAX_GREEN_CLIENT_SUPPORT_CALL_CAP;
use plateguard_core::config::BenefitConfig;
use plateguard_core::models::{BenefitKind, SealTier};

/// Cap and cycle length for one benefit kind at one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitRule {
    pub kind: BenefitKind,
    pub cap: u32,
    pub cycle_days: i64,
}

impl BenefitRule {
    pub fn cycle(&self) -> Duration {
        Duration::try_days(self.cycle_days).unwrap_or(Duration::MAX)
    }
}

/// The rule a user's tier grants for `kind`, if any.
///
/// - yellow: theft alerts only
/// - green: theft alerts, plus a support call for clients (at most one per
///   cycle, the seal state holds a single flag)
/// - none, blue: nothing
pub fn rule_for(
    config: &BenefitConfig,
    seal: SealTier,
    is_client: bool,
    kind: BenefitKind,
) -> Option<BenefitRule> {
    match (seal, kind) {
        (SealTier::Yellow, BenefitKind::TheftAlert) => Some(BenefitRule {
            kind,
            cap: config.yellow_theft_alert_cap,
            cycle_days: config.theft_alert_cycle_days,
        }),
        (SealTier::Green, BenefitKind::TheftAlert) => Some(BenefitRule {
            kind,
            cap: config.green_theft_alert_cap,
            cycle_days: config.theft_alert_cycle_days,
        }),
        (SealTier::Green, BenefitKind::SupportCall) if is_client => Some(BenefitRule {
            kind,
            cap: config
                .green_client_support_call_cap
                .min(MAX_GREEN_CLIENT_SUPPORT_CALL_CAP),
            cycle_days: config.support_call_cycle_days,
        }),
        _ => None,
    }
}
