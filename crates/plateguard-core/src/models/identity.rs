use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::PLATE_LENGTH;
use crate::errors::{PlateguardError, PlateguardResult};

/// Wall-clock instant. Every time-dependent operation receives one explicitly.
pub type Timestamp = DateTime<Utc>;

/// A normalized vehicle plate: seven uppercase ASCII alphanumerics.
///
/// Separators (`-`, spaces) are stripped and letters uppercased, so
/// `"abc-1234"` and `"ABC1234"` are the same plate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Plate(String);

impl Plate {
    /// Normalize and validate a plate string.
    pub fn parse(input: &str) -> PlateguardResult<Self> {
        let normalized: String = input
            .chars()
            .filter(|c| !matches!(c, '-' | ' '))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if normalized.len() != PLATE_LENGTH {
            return Err(PlateguardError::InvalidPlate {
                input: input.to_string(),
                reason: format!("expected {PLATE_LENGTH} characters, got {}", normalized.len()),
            });
        }
        if !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(PlateguardError::InvalidPlate {
                input: input.to_string(),
                reason: "only letters and digits are allowed".to_string(),
            });
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Plate {
    type Error = PlateguardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Plate> for String {
    fn from(plate: Plate) -> Self {
        plate.0
    }
}

/// Opaque identifier of a person on the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
