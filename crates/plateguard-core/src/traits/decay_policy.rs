use crate::models::{ScoreAxis, Timestamp};

/// Time-based decay of a Plate Score or ICC between scoring events.
pub trait IScoreDecayPolicy: Send + Sync {
    /// Policy name, as used in configuration.
    fn name(&self) -> &str;

    /// The decayed score at `now`, given the score and when it was last
    /// updated. Must be the identity when `now <= last_update`.
    fn decay(&self, axis: ScoreAxis, score: i64, last_update: Timestamp, now: Timestamp) -> i64;
}
