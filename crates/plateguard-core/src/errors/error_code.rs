//! Stable machine-readable codes for errors and deny reasons.

/// Every error enum (and `DenyReason`) implements this to expose a
/// structured code string for the surrounding application.
pub trait PlateguardErrorCode {
    /// Returns the code string (e.g., "ALREADY_SENT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Interaction gate.
pub const PERMANENTLY_BLOCKED: &str = "PERMANENTLY_BLOCKED";
pub const COOLDOWN_ACTIVE: &str = "COOLDOWN_ACTIVE";
pub const ALREADY_SENT: &str = "ALREADY_SENT";

// Benefits.
pub const NO_CREDITS_REMAINING: &str = "NO_CREDITS_REMAINING";

// Stolen alerts.
pub const RENEWAL_ALREADY_USED: &str = "RENEWAL_ALREADY_USED";
pub const RENEWAL_WINDOW_NOT_OPEN: &str = "RENEWAL_WINDOW_NOT_OPEN";
pub const ALERT_NOT_ACTIVATED: &str = "ALERT_NOT_ACTIVATED";

// Verification.
pub const NO_ACTIVE_CODE: &str = "NO_ACTIVE_CODE";
pub const CODE_EXPIRED: &str = "CODE_EXPIRED";
pub const CODE_MISMATCH: &str = "CODE_MISMATCH";
pub const TOO_MANY_ATTEMPTS: &str = "TOO_MANY_ATTEMPTS";

// Storage.
pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const STORE_CORRUPT: &str = "STORE_CORRUPT";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";

// Everything else.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_PLATE: &str = "INVALID_PLATE";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
