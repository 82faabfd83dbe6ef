//! # plateguard-core
//!
//! Foundation crate for the plateguard policy engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PlateguardConfig;
pub use errors::{PlateguardError, PlateguardResult};
pub use models::{
    Category, DenyReason, GateDecision, InteractionKind, InteractionRecord, Plate, ScoreAxis,
    Timestamp, UserId,
};
