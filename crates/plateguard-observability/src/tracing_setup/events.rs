//! Named events emitted at decision points.

use plateguard_core::errors::{PlateguardError, PlateguardErrorCode};
use plateguard_core::models::GateDecision;

/// Log a gate outcome at the engine boundary: `info` when allowed, `debug`
/// when denied. The gate itself warns on abuse-limit denials and logs store
/// faults as errors.
pub fn gate_decision(action: &str, decision: &GateDecision) {
    match decision {
        GateDecision::Allowed => tracing::info!(action, "interaction allowed"),
        GateDecision::Denied(reason) => tracing::debug!(
            action,
            code = reason.error_code(),
            reason = %reason,
            "interaction denied"
        ),
    }
}

/// Log a failed operation with its stable error code.
pub fn operation_failed(operation: &str, error: &PlateguardError) {
    if error.is_store_fault() {
        tracing::error!(operation, code = error.error_code(), error = %error, "store fault");
    } else {
        tracing::warn!(operation, code = error.error_code(), error = %error, "operation refused");
    }
}

pub fn benefit_redeemed(kind: &str, remaining: u32) {
    tracing::info!(kind, remaining, "benefit redeemed");
}

pub fn alert_changed(operation: &str, expires_at: &str) {
    tracing::info!(operation, expires_at, "stolen alert updated");
}

pub fn config_loaded(backend: &str, decay_policy: &str) {
    tracing::info!(backend, decay_policy, "plateguard configured");
}
