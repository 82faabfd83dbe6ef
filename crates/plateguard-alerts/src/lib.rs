//! # plateguard-alerts
//!
//! Lifecycle of the paid theft-alert subscription on a vehicle.
//!
//! Activity is always computed from `expires_at`; the stored `is_active`
//! flag is only a cache for readers that cannot compute it.

pub mod lifecycle;

pub use lifecycle::{AlertStatus, StolenAlertLifecycle};
