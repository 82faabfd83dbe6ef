//! Span definitions per operation: gate, benefit, alert, verification, decay.

/// Create an interaction-gate span.
#[macro_export]
macro_rules! gate_span {
    ($action:expr, $plate:expr, $user_id:expr) => {
        tracing::info_span!("plateguard.gate", action = %$action, plate = %$plate, user_id = %$user_id)
    };
}

/// Create a benefit span.
#[macro_export]
macro_rules! benefit_span {
    ($kind:expr, $user_id:expr) => {
        tracing::info_span!("plateguard.benefit", kind = %$kind, user_id = %$user_id)
    };
}

/// Create a stolen-alert span.
#[macro_export]
macro_rules! alert_span {
    ($operation:expr, $plate:expr) => {
        tracing::info_span!("plateguard.alert", operation = %$operation, plate = %$plate)
    };
}

/// Create a verification span.
#[macro_export]
macro_rules! verification_span {
    ($operation:expr, $user_id:expr) => {
        tracing::info_span!("plateguard.verification", operation = %$operation, user_id = %$user_id)
    };
}

/// Create a decay span.
#[macro_export]
macro_rules! decay_span {
    ($policy:expr) => {
        tracing::info_span!("plateguard.decay", policy = %$policy)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const GATE: &str = "plateguard.gate";
    pub const BENEFIT: &str = "plateguard.benefit";
    pub const ALERT: &str = "plateguard.alert";
    pub const VERIFICATION: &str = "plateguard.verification";
    pub const DECAY: &str = "plateguard.decay";
}
