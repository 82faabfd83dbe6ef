use chrono::Duration;

use plateguard_core::errors::VerificationError;
use plateguard_core::models::{Timestamp, VerificationCode};

/// Check `supplied` against the stored code. No side effects.
///
/// Surrounding whitespace in `supplied` is ignored. The code is valid for
/// `ttl` after creation; at exactly `created_at + ttl` it has expired.
pub fn check_code(
    stored: Option<&VerificationCode>,
    supplied: &str,
    now: Timestamp,
    ttl: Duration,
) -> Result<(), VerificationError> {
    let stored = stored.ok_or(VerificationError::NoActiveCode)?;
    // An expiry past the representable range never arrives.
    let expired = stored
        .created_at
        .checked_add_signed(ttl)
        .map_or(false, |expires_at| now >= expires_at);
    if expired {
        return Err(VerificationError::CodeExpired);
    }
    if supplied.trim() != stored.code {
        return Err(VerificationError::CodeMismatch);
    }
    Ok(())
}
