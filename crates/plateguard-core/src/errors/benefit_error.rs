use crate::models::BenefitKind;

use super::error_code::{self, PlateguardErrorCode};

/// Seal benefit errors.
#[derive(Debug, thiserror::Error)]
pub enum BenefitError {
    /// The tier's cap for the current cycle is already reached, or the
    /// user's tier grants no credits of this kind (cap 0).
    #[error("no {kind} credits remaining: {used}/{cap} used this cycle")]
    NoCreditsRemaining { kind: BenefitKind, used: u32, cap: u32 },
}

impl PlateguardErrorCode for BenefitError {
    fn error_code(&self) -> &'static str {
        error_code::NO_CREDITS_REMAINING
    }
}
