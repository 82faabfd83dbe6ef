//! Configuration for every plateguard subsystem.
//!
//! All sections use `#[serde(default)]`, so a partial TOML document only
//! overrides the keys it names.

pub mod alert_config;
pub mod benefit_config;
pub mod classification_config;
pub mod decay_config;
pub mod defaults;
pub mod gate_config;
pub mod observability_config;
pub mod storage_config;
pub mod verification_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use alert_config::AlertConfig;
pub use benefit_config::BenefitConfig;
pub use classification_config::ClassificationConfig;
pub use decay_config::DecayConfig;
pub use gate_config::GateConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;
pub use verification_config::VerificationConfig;

use crate::constants::THRESHOLD_COUNT;
use defaults::{MAX_DURATION_DAYS, MAX_DURATION_SECS, MAX_GREEN_CLIENT_SUPPORT_CALL_CAP};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateguardConfig {
    pub classification: ClassificationConfig,
    pub gate: GateConfig,
    pub benefits: BenefitConfig,
    pub alerts: AlertConfig,
    pub verification: VerificationConfig,
    pub decay: DecayConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl PlateguardConfig {
    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = &self.classification.thresholds;
        if thresholds.len() != THRESHOLD_COUNT {
            return Err(ConfigError::ValidationFailed {
                field: "classification.thresholds".to_string(),
                message: format!("expected {THRESHOLD_COUNT} bounds, got {}", thresholds.len()),
            });
        }
        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::ValidationFailed {
                field: "classification.thresholds".to_string(),
                message: "bounds must be strictly increasing".to_string(),
            });
        }

        let benefits = &self.benefits;
        let (days, secs) = (MAX_DURATION_DAYS, MAX_DURATION_SECS);
        let durations = [
            ("gate.evaluation_cooldown_secs", self.gate.evaluation_cooldown_secs, secs),
            ("benefits.theft_alert_cycle_days", benefits.theft_alert_cycle_days, days),
            ("benefits.support_call_cycle_days", benefits.support_call_cycle_days, days),
            ("alerts.duration_days", self.alerts.duration_days, days),
            ("verification.ttl_secs", self.verification.ttl_secs, secs),
        ];
        for (field, value, max) in durations {
            if value <= 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
            if value > max {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("must not exceed {max}"),
                });
            }
        }

        if !(0..=MAX_DURATION_DAYS).contains(&self.alerts.free_renewal_window_days) {
            return Err(ConfigError::ValidationFailed {
                field: "alerts.free_renewal_window_days".to_string(),
                message: format!("must be between 0 and {MAX_DURATION_DAYS}"),
            });
        }
        if benefits.green_client_support_call_cap > MAX_GREEN_CLIENT_SUPPORT_CALL_CAP {
            return Err(ConfigError::ValidationFailed {
                field: "benefits.green_client_support_call_cap".to_string(),
                message: format!("must not exceed {MAX_GREEN_CLIENT_SUPPORT_CALL_CAP}"),
            });
        }
        if !(4..=12).contains(&self.verification.code_length) {
            return Err(ConfigError::ValidationFailed {
                field: "verification.code_length".to_string(),
                message: "must be between 4 and 12".to_string(),
            });
        }

        match self.decay.policy.as_str() {
            "none" => {}
            "monthly_step" => {
                if self.decay.points_per_month <= 0 {
                    return Err(ConfigError::ValidationFailed {
                        field: "decay.points_per_month".to_string(),
                        message: "must be greater than 0 for the monthly_step policy".to_string(),
                    });
                }
            }
            other => {
                return Err(ConfigError::ValidationFailed {
                    field: "decay.policy".to_string(),
                    message: format!("unknown policy '{other}'"),
                });
            }
        }

        match self.storage.backend.as_str() {
            "memory" | "sqlite" => {}
            other => {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.backend".to_string(),
                    message: format!("unknown backend '{other}'"),
                });
            }
        }

        Ok(())
    }
}
