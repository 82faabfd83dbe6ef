use tracing::debug;

use plateguard_core::config::DecayConfig;
use plateguard_core::errors::ConfigError;
use plateguard_core::models::{ScoreAxis, Timestamp, UserRecord, VehicleRecord};
use plateguard_core::traits::IScoreDecayPolicy;

use crate::policies::{MonthlyStepDecay, NoDecay};

/// Before/after of one decay application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecayOutcome {
    pub axis: ScoreAxis,
    pub before: i64,
    pub after: i64,
}

impl DecayOutcome {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Applies the configured decay policy to vehicle and user scores.
///
/// The update anchor (`last_score_update` / `last_icc_update`) only moves
/// when the score actually changes, so frequent applications do not reset
/// a partially elapsed period.
pub struct DecayEngine {
    policy: Box<dyn IScoreDecayPolicy>,
}

impl DecayEngine {
    /// Engine with the identity policy.
    pub fn new() -> Self {
        Self {
            policy: Box::new(NoDecay),
        }
    }

    /// Engine with a caller-supplied policy.
    pub fn with_policy(policy: Box<dyn IScoreDecayPolicy>) -> Self {
        Self { policy }
    }

    /// Engine for the policy named in config.
    pub fn from_config(config: &DecayConfig) -> Result<Self, ConfigError> {
        match config.policy.as_str() {
            "none" => Ok(Self::new()),
            "monthly_step" if config.points_per_month > 0 => Ok(Self::with_policy(Box::new(
                MonthlyStepDecay::new(config.points_per_month),
            ))),
            "monthly_step" => Err(ConfigError::ValidationFailed {
                field: "decay.points_per_month".to_string(),
                message: "must be greater than 0 for the monthly_step policy".to_string(),
            }),
            other => Err(ConfigError::ValidationFailed {
                field: "decay.policy".to_string(),
                message: format!("unknown policy '{other}'"),
            }),
        }
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Decayed value without touching any record.
    pub fn calculate(
        &self,
        axis: ScoreAxis,
        score: i64,
        last_update: Timestamp,
        now: Timestamp,
    ) -> i64 {
        if now <= last_update {
            return score;
        }
        self.policy.decay(axis, score, last_update, now)
    }

    /// Decay a vehicle's Plate Score in place.
    pub fn apply_to_vehicle(&self, vehicle: &mut VehicleRecord, now: Timestamp) -> DecayOutcome {
        let before = vehicle.score;
        let after = self.calculate(ScoreAxis::Plate, before, vehicle.last_score_update, now);
        if after != before {
            vehicle.score = after;
            vehicle.last_score_update = now;
            debug!(
                plate = %vehicle.plate,
                before,
                after,
                policy = self.policy_name(),
                "plate score decayed"
            );
        }
        DecayOutcome {
            axis: ScoreAxis::Plate,
            before,
            after,
        }
    }

    /// Decay a user's ICC in place.
    pub fn apply_to_user(&self, user: &mut UserRecord, now: Timestamp) -> DecayOutcome {
        let before = user.icc;
        let after = self.calculate(ScoreAxis::Icc, before, user.last_icc_update, now);
        if after != before {
            user.icc = after;
            user.last_icc_update = now;
            debug!(user_id = %user.id, before, after, policy = self.policy_name(), "icc decayed");
        }
        DecayOutcome {
            axis: ScoreAxis::Icc,
            before,
            after,
        }
    }
}

impl Default for DecayEngine {
    fn default() -> Self {
        Self::new()
    }
}
