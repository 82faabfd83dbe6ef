use serde::{Deserialize, Serialize};

use super::identity::Timestamp;

/// The single active contact-verification code held on a user.
/// Regeneration replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    pub code: String,
    pub created_at: Timestamp,
}
