//! Schema migrations, tracked in `PRAGMA user_version`.

mod v001_interactions;

use rusqlite::Connection;
use tracing::info;

use plateguard_core::errors::{PlateguardResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> rusqlite::Result<()>;

const MIGRATIONS: &[(u32, Migration)] = &[(1, v001_interactions::migrate)];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 1;

pub fn current_version(conn: &Connection) -> PlateguardResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every migration newer than the database's version, each in its
/// own transaction.
pub fn run_migrations(conn: &mut Connection) -> PlateguardResult<()> {
    let current = current_version(conn)?;
    if current > LATEST_VERSION {
        return Err(StorageError::MigrationFailed {
            version: current,
            reason: format!("database is newer than supported version {LATEST_VERSION}"),
        }
        .into());
    }

    for &(version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let failed = |e: rusqlite::Error| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        };
        let tx = conn.transaction().map_err(failed)?;
        migrate(&tx).map_err(failed)?;
        tx.pragma_update(None, "user_version", version)
            .map_err(failed)?;
        tx.commit().map_err(failed)?;
        info!(version, "applied ledger migration");
    }
    Ok(())
}
