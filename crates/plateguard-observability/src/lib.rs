//! # plateguard-observability
//!
//! Structured logging for the policy engine: subscriber setup, one span
//! per user-facing operation, and named events for denials and faults.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, TracingInit};
