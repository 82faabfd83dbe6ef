use plateguard_core::models::{ScoreAxis, Timestamp};
use plateguard_core::traits::IScoreDecayPolicy;

/// Identity policy: scores never change with time alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDecay;

impl IScoreDecayPolicy for NoDecay {
    fn name(&self) -> &str {
        "none"
    }

    fn decay(&self, _axis: ScoreAxis, score: i64, _last_update: Timestamp, _now: Timestamp) -> i64 {
        score
    }
}
