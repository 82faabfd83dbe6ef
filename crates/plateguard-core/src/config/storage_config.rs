use serde::{Deserialize, Serialize};

use super::defaults;

/// Ledger storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// "memory" or "sqlite".
    pub backend: String,
    /// SQLite database path (sqlite backend only).
    pub db_path: String,
    /// SQLite busy timeout in milliseconds.
    pub busy_timeout_ms: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: defaults::DEFAULT_STORAGE_BACKEND.to_string(),
            db_path: defaults::DEFAULT_DB_FILENAME.to_string(),
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}
