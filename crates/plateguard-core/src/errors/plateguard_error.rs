use crate::models::DenyReason;

use super::error_code::{self, PlateguardErrorCode};
use super::{AlertError, BenefitError, ConfigError, StorageError, VerificationError};

/// Top-level error aggregating every subsystem error via `From`.
#[derive(Debug, thiserror::Error)]
pub enum PlateguardError {
    #[error("interaction denied: {0}")]
    InteractionDenied(DenyReason),

    #[error("benefit error: {0}")]
    Benefit(#[from] BenefitError),

    #[error("stolen alert error: {0}")]
    Alert(#[from] AlertError),

    #[error("verification error: {0}")]
    Verification(#[from] VerificationError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid plate '{input}': {reason}")]
    InvalidPlate { input: String, reason: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl PlateguardError {
    /// True when the error is a store fault rather than a policy outcome.
    pub fn is_store_fault(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<serde_json::Error> for PlateguardError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

impl PlateguardErrorCode for PlateguardError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InteractionDenied(reason) => reason.error_code(),
            Self::Benefit(e) => e.error_code(),
            Self::Alert(e) => e.error_code(),
            Self::Verification(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::InvalidPlate { .. } => error_code::INVALID_PLATE,
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}
