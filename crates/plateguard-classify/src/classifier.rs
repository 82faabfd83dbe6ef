use plateguard_core::config::{defaults, ClassificationConfig};
use plateguard_core::constants::THRESHOLD_COUNT;
use plateguard_core::errors::ConfigError;
use plateguard_core::models::{Category, ScoreAxis, Tier};

/// Pure score classifier parameterized by a threshold table.
///
/// `thresholds[i]` is the inclusive lower bound of tier `i + 1`; every
/// score below `thresholds[0]` is tier 0. Boundary values therefore land
/// in the higher tier, and the ladder is total over `i64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryClassifier {
    thresholds: [i64; THRESHOLD_COUNT],
}

impl CategoryClassifier {
    /// Classifier with the standard table `[0, 200, 400, 650, 850, 1001]`.
    pub fn new() -> Self {
        Self {
            thresholds: defaults::DEFAULT_THRESHOLDS,
        }
    }

    /// Build from config. The table must hold exactly six strictly
    /// increasing bounds.
    pub fn from_config(config: &ClassificationConfig) -> Result<Self, ConfigError> {
        let thresholds: [i64; THRESHOLD_COUNT] =
            config.thresholds.as_slice().try_into().map_err(|_| {
                ConfigError::ValidationFailed {
                    field: "classification.thresholds".to_string(),
                    message: format!(
                        "expected {THRESHOLD_COUNT} bounds, got {}",
                        config.thresholds.len()
                    ),
                }
            })?;
        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::ValidationFailed {
                field: "classification.thresholds".to_string(),
                message: "bounds must be strictly increasing".to_string(),
            });
        }
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &[i64; THRESHOLD_COUNT] {
        &self.thresholds
    }

    /// Tier for a score on either axis.
    pub fn tier(&self, score: i64) -> Tier {
        let rank = self.thresholds.iter().take_while(|&&bound| score >= bound).count();
        Tier::from_rank(rank)
    }

    /// Category for a score on the given axis.
    pub fn classify(&self, score: i64, axis: ScoreAxis) -> Category {
        Category::from_tier(axis, self.tier(score))
    }

    /// Inclusive lower bound of a tier. `None` for tier 0, which is open below.
    pub fn lower_bound(&self, tier: Tier) -> Option<i64> {
        tier.rank().checked_sub(1).map(|i| self.thresholds[i])
    }

    /// Exclusive upper bound of a tier. `None` for the highest tier.
    pub fn upper_bound(&self, tier: Tier) -> Option<i64> {
        self.thresholds.get(tier.rank()).copied()
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}
