use serde::{Deserialize, Serialize};

use super::defaults;

/// Contact-verification code configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Number of decimal digits in a generated code.
    pub code_length: usize,
    /// Validity window from creation (seconds).
    pub ttl_secs: i64,
    /// Failed attempts allowed per issued code. 0 disables the lockout.
    pub max_failed_attempts: u32,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: defaults::DEFAULT_CODE_LENGTH,
            ttl_secs: defaults::DEFAULT_CODE_TTL_SECS,
            max_failed_attempts: defaults::DEFAULT_MAX_FAILED_ATTEMPTS,
        }
    }
}
