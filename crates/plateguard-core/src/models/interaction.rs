use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::identity::{Plate, Timestamp, UserId};

/// Kind of peer-to-peer interaction recorded in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Message,
    Evaluation,
    Solidary,
    Report,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 4] = [
        InteractionKind::Message,
        InteractionKind::Evaluation,
        InteractionKind::Solidary,
        InteractionKind::Report,
    ];

    /// Stable name used for persistence.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Evaluation => "evaluation",
            Self::Solidary => "solidary",
            Self::Report => "report",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(Self::Message),
            "evaluation" => Ok(Self::Evaluation),
            "solidary" => Ok(Self::Solidary),
            "report" => Ok(Self::Report),
            other => Err(format!("unknown interaction kind '{other}'")),
        }
    }
}

/// One ledger entry. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub id: String,
    pub plate: Plate,
    pub user_id: UserId,
    pub kind: InteractionKind,
    pub timestamp: Timestamp,
}

impl InteractionRecord {
    /// Build a record with a fresh id.
    pub fn new(plate: Plate, user_id: UserId, kind: InteractionKind, timestamp: Timestamp) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            plate,
            user_id,
            kind,
            timestamp,
        }
    }
}

/// Declarative ledger query. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerFilter {
    pub plate: Option<Plate>,
    pub user_id: Option<UserId>,
    pub kind: Option<InteractionKind>,
    /// Only records with `timestamp > since`.
    pub since: Option<Timestamp>,
}

impl LedgerFilter {
    /// All records for one `(plate, user)` pair.
    pub fn pair(plate: &Plate, user_id: &UserId) -> Self {
        Self {
            plate: Some(plate.clone()),
            user_id: Some(user_id.clone()),
            ..Default::default()
        }
    }

    /// All records written by one user.
    pub fn user(user_id: &UserId) -> Self {
        Self {
            user_id: Some(user_id.clone()),
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: InteractionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_since(mut self, since: Timestamp) -> Self {
        self.since = Some(since);
        self
    }

    /// Whether `record` satisfies every set field.
    pub fn matches(&self, record: &InteractionRecord) -> bool {
        self.plate.as_ref().map_or(true, |p| *p == record.plate)
            && self.user_id.as_ref().map_or(true, |u| *u == record.user_id)
            && self.kind.map_or(true, |k| k == record.kind)
            && self.since.map_or(true, |s| record.timestamp > s)
    }
}
