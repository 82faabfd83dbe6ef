use super::error_code::{self, PlateguardErrorCode};

/// Contact-verification errors.
#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("no verification code issued")]
    NoActiveCode,

    #[error("verification code expired")]
    CodeExpired,

    #[error("verification code does not match")]
    CodeMismatch,

    #[error("too many failed attempts ({attempts}); request a new code")]
    TooManyAttempts { attempts: u32 },
}

impl PlateguardErrorCode for VerificationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoActiveCode => error_code::NO_ACTIVE_CODE,
            Self::CodeExpired => error_code::CODE_EXPIRED,
            Self::CodeMismatch => error_code::CODE_MISMATCH,
            Self::TooManyAttempts { .. } => error_code::TOO_MANY_ATTEMPTS,
        }
    }
}
