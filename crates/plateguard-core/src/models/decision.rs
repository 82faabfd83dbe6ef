use std::fmt;

use serde::{Deserialize, Serialize};

use super::identity::Timestamp;
use crate::errors::error_code::{self, PlateguardErrorCode};

/// Why an interaction was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DenyReason {
    /// The user reported this plate. Permanent.
    PermanentlyBlocked,
    /// The pair was evaluated less than the cooldown ago.
    CooldownActive { retry_at: Timestamp },
    /// The pair already used its one solidarity alert.
    AlreadySent,
    /// The ledger could not be read; the engine fails closed.
    StoreUnavailable,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermanentlyBlocked => f.write_str("plate permanently blocked by report"),
            Self::CooldownActive { retry_at } => {
                write!(f, "evaluation cooldown active until {}", retry_at.to_rfc3339())
            }
            Self::AlreadySent => f.write_str("solidarity alert already sent for this plate"),
            Self::StoreUnavailable => f.write_str("interaction ledger unavailable"),
        }
    }
}

impl PlateguardErrorCode for DenyReason {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PermanentlyBlocked => error_code::PERMANENTLY_BLOCKED,
            Self::CooldownActive { .. } => error_code::COOLDOWN_ACTIVE,
            Self::AlreadySent => error_code::ALREADY_SENT,
            Self::StoreUnavailable => error_code::STORE_UNAVAILABLE,
        }
    }
}

/// Outcome of an interaction policy check. Denial is an expected,
/// user-facing outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    Allowed,
    Denied(DenyReason),
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub fn reason(&self) -> Option<DenyReason> {
        match self {
            Self::Allowed => None,
            Self::Denied(reason) => Some(*reason),
        }
    }
}
