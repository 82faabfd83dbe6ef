use super::error_code::{self, PlateguardErrorCode};

/// Ledger and entity store errors.
///
/// Every variant is a fault: callers making a permission decision must
/// treat any of them as a denial.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("store corruption detected: {details}")]
    CorruptionDetected { details: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },
}

impl PlateguardErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::STORE_UNAVAILABLE,
            Self::CorruptionDetected { .. } => error_code::STORE_CORRUPT,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
        }
    }
}
