//! Error handling for plateguard.
//! One error enum per subsystem, `thiserror` only.

pub mod alert_error;
pub mod benefit_error;
pub mod config_error;
pub mod error_code;
pub mod plateguard_error;
pub mod storage_error;
pub mod verification_error;

pub use alert_error::AlertError;
pub use benefit_error::BenefitError;
pub use config_error::ConfigError;
pub use error_code::PlateguardErrorCode;
pub use plateguard_error::PlateguardError;
pub use storage_error::StorageError;
pub use verification_error::VerificationError;

/// Result alias used across the workspace.
pub type PlateguardResult<T> = Result<T, PlateguardError>;
