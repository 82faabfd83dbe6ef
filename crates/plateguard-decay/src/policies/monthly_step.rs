use plateguard_core::constants::DAYS_PER_DECAY_MONTH;
use plateguard_core::models::{ScoreAxis, Timestamp};
use plateguard_core::traits::IScoreDecayPolicy;

/// Moves a score toward zero by a fixed number of points per full 30-day
/// month since the last update. Never crosses zero, so positive scores
/// drift down and negative scores recover toward neutral.
#[derive(Debug, Clone, Copy)]
pub struct MonthlyStepDecay {
    points_per_month: i64,
}

impl MonthlyStepDecay {
    pub fn new(points_per_month: i64) -> Self {
        Self {
            points_per_month: points_per_month.max(0),
        }
    }

    pub fn points_per_month(&self) -> i64 {
        self.points_per_month
    }
}

impl IScoreDecayPolicy for MonthlyStepDecay {
    fn name(&self) -> &str {
        "monthly_step"
    }

    fn decay(&self, _axis: ScoreAxis, score: i64, last_update: Timestamp, now: Timestamp) -> i64 {
        let months = (now - last_update).num_days() / DAYS_PER_DECAY_MONTH;
        if months <= 0 {
            return score;
        }
        let step = self.points_per_month.saturating_mul(months);
        if score > 0 {
            score.saturating_sub(step).max(0)
        } else {
            score.saturating_add(step).min(0)
        }
    }
}
