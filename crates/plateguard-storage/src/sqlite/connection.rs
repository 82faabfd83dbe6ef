//! The single write connection shared by all ledger operations.

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};

use plateguard_core::errors::PlateguardResult;

use super::pragmas;
use crate::to_storage_err;

/// A SQLite connection behind a mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u32) -> PlateguardResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| to_storage_err(format!("open {}: {e}", path.display())))?;
        Self::configure(conn, busy_timeout_ms)
    }

    pub fn open_in_memory(busy_timeout_ms: u32) -> PlateguardResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::configure(conn, busy_timeout_ms)
    }

    fn configure(conn: Connection, busy_timeout_ms: u32) -> PlateguardResult<Self> {
        pragmas::apply_pragmas(&conn)?;
        conn.busy_timeout(Duration::from_millis(u64::from(busy_timeout_ms)))
            .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with exclusive access to the connection.
    pub fn with_conn<F, T>(&self, f: F) -> PlateguardResult<T>
    where
        F: FnOnce(&mut Connection) -> PlateguardResult<T>,
    {
        let mut guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("connection lock poisoned: {e}")))?;
        f(&mut guard)
    }
}
