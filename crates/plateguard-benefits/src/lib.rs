//! # plateguard-benefits
//!
//! Periodic free entitlements granted by seal tier. Cycles renew lazily:
//! the first access after a cycle has run its full length resets the
//! counter and moves the anchor to that access time.

pub mod rules;
pub mod slot;
pub mod tracker;

pub use rules::BenefitRule;
pub use tracker::{BenefitCycleTracker, CycleRenewal, Entitlement};
