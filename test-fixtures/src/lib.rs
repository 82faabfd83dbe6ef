//! Test fixture loader for plateguard golden datasets and scenarios.
//!
//! Provides typed deserialization of fixture JSON files and builders for
//! the user and vehicle records most tests need.

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use serde::de::DeserializeOwned;

use plateguard_core::models::{Plate, SealTier, Timestamp, UserId, UserRecord, VehicleRecord};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Fixed reference instant shared by scenario tests: 2024-01-15T12:00:00Z.
pub fn t0() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

/// Parse a plate literal.
///
/// # Panics
/// Panics on an invalid plate.
pub fn plate(s: &str) -> Plate {
    Plate::parse(s).unwrap_or_else(|e| panic!("invalid fixture plate {s}: {e}"))
}

/// A user with the given seal and client status, created at `now`.
pub fn user_with_seal(id: &str, seal: SealTier, is_client: bool, now: Timestamp) -> UserRecord {
    UserRecord::new(UserId::from(id), 300, now).with_seal(seal, is_client)
}

/// A vehicle with the given score, created at `now`.
pub fn vehicle(plate_str: &str, score: i64, now: Timestamp) -> VehicleRecord {
    VehicleRecord::new(plate(plate_str), score, now)
}
