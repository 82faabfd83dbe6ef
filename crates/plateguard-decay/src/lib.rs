//! # plateguard-decay
//!
//! Score and ICC decay between scoring events. No decay curve is
//! prescribed: the default policy is the identity, and operators opt into
//! an alternative through configuration or by supplying their own
//! [`IScoreDecayPolicy`](plateguard_core::traits::IScoreDecayPolicy).

pub mod engine;
pub mod policies;

pub use engine::{DecayEngine, DecayOutcome};
pub use policies::{MonthlyStepDecay, NoDecay};
