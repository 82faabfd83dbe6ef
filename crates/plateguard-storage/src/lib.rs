//! # plateguard-storage
//!
//! Backends for the interaction ledger and the entity store.
//!
//! - [`InMemoryLedger`]: `DashMap` keyed by `(plate, user)`; `append_if`
//!   holds the pair's shard lock across check and append.
//! - [`SqliteLedger`]: single write connection, WAL mode, `BEGIN IMMEDIATE`
//!   around check and append.
//! - [`InMemoryEntityStore`]: users and vehicles with per-record atomic
//!   updates.

pub mod memory;
pub mod sqlite;

use std::path::Path;
use std::sync::Arc;

use plateguard_core::config::StorageConfig;
use plateguard_core::errors::{ConfigError, PlateguardError, PlateguardResult, StorageError};
use plateguard_core::traits::ILedgerStore;

pub use memory::{InMemoryEntityStore, InMemoryLedger};
pub use sqlite::SqliteLedger;

/// Open the ledger backend named in config.
pub fn open_ledger(config: &StorageConfig) -> PlateguardResult<Arc<dyn ILedgerStore>> {
    match config.backend.as_str() {
        "memory" => Ok(Arc::new(InMemoryLedger::new())),
        "sqlite" => Ok(Arc::new(SqliteLedger::open(
            Path::new(&config.db_path),
            config.busy_timeout_ms,
        )?)),
        other => Err(ConfigError::ValidationFailed {
            field: "storage.backend".to_string(),
            message: format!("unknown backend '{other}'"),
        }
        .into()),
    }
}

/// Wrap a backend failure as [`StorageError::Unavailable`].
pub(crate) fn to_storage_err(reason: impl Into<String>) -> PlateguardError {
    StorageError::Unavailable {
        reason: reason.into(),
    }
    .into()
}

/// Wrap an unreadable row as [`StorageError::CorruptionDetected`].
pub(crate) fn to_corruption_err(details: impl Into<String>) -> PlateguardError {
    StorageError::CorruptionDetected {
        details: details.into(),
    }
    .into()
}
