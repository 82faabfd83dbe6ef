//! SQLite-backed interaction ledger.

pub mod connection;
pub mod migrations;
pub mod pragmas;
pub mod queries;

use std::path::{Path, PathBuf};

use rusqlite::TransactionBehavior;
use tracing::{debug, info, instrument};

use plateguard_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use plateguard_core::errors::PlateguardResult;
use plateguard_core::models::{GateDecision, InteractionRecord, LedgerFilter};
use plateguard_core::traits::{AdmissionCheck, ILedgerStore};

use crate::to_storage_err;
use connection::WriteConnection;

/// Durable ledger in a single SQLite table.
///
/// All access goes through one connection behind a mutex. `append_if`
/// additionally runs inside a `BEGIN IMMEDIATE` transaction, which takes
/// the database write lock up front and so also serializes against other
/// processes sharing the file.
pub struct SqliteLedger {
    conn: WriteConnection,
    db_path: Option<PathBuf>,
}

impl SqliteLedger {
    /// Open (or create) a ledger database file and bring its schema current.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> PlateguardResult<Self> {
        let conn = WriteConnection::open(path, busy_timeout_ms)?;
        let ledger = Self {
            conn,
            db_path: Some(path.to_path_buf()),
        };
        ledger.initialize()?;
        info!(path = %path.display(), "sqlite ledger opened");
        Ok(ledger)
    }

    /// Private in-memory database, mainly for tests.
    pub fn open_in_memory() -> PlateguardResult<Self> {
        let conn = WriteConnection::open_in_memory(DEFAULT_BUSY_TIMEOUT_MS)?;
        let ledger = Self {
            conn,
            db_path: None,
        };
        ledger.initialize()?;
        Ok(ledger)
    }

    fn initialize(&self) -> PlateguardResult<()> {
        self.conn.with_conn(|conn| migrations::run_migrations(conn))
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Current schema version.
    pub fn schema_version(&self) -> PlateguardResult<u32> {
        self.conn.with_conn(|conn| migrations::current_version(conn))
    }

    /// Whether the connection runs in WAL mode. Always false in memory.
    pub fn is_wal(&self) -> PlateguardResult<bool> {
        self.conn.with_conn(|conn| pragmas::verify_wal_mode(conn))
    }
}

impl ILedgerStore for SqliteLedger {
    #[instrument(
        skip_all,
        fields(plate = %record.plate, user_id = %record.user_id, kind = %record.kind)
    )]
    fn append(&self, record: &InteractionRecord) -> PlateguardResult<()> {
        self.conn.with_conn(|conn| queries::insert_record(conn, record))?;
        debug!(id = %record.id, "ledger append");
        Ok(())
    }

    fn query(&self, filter: &LedgerFilter) -> PlateguardResult<Vec<InteractionRecord>> {
        self.conn.with_conn(|conn| queries::select_records(conn, filter))
    }

    #[instrument(
        skip_all,
        fields(plate = %record.plate, user_id = %record.user_id, kind = %record.kind)
    )]
    fn append_if(
        &self,
        record: &InteractionRecord,
        check: &AdmissionCheck<'_>,
    ) -> PlateguardResult<GateDecision> {
        let decision = self.conn.with_conn(|conn| {
            let tx = conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(|e| to_storage_err(e.to_string()))?;
            let existing = queries::select_records(
                &tx,
                &LedgerFilter::pair(&record.plate, &record.user_id),
            )?;
            let decision = check(existing.as_slice());
            if decision.is_allowed() {
                queries::insert_record(&tx, record)?;
            }
            tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
            Ok(decision)
        })?;
        debug!(?decision, "ledger conditional append");
        Ok(decision)
    }

    fn len(&self) -> PlateguardResult<usize> {
        self.conn.with_conn(|conn| queries::count_records(conn))
    }
}
