// Single source of truth for all default values.

// --- Classification ---
pub const DEFAULT_THRESHOLDS: [i64; 6] = [0, 200, 400, 650, 850, 1001];

// --- Gate ---
pub const DEFAULT_EVALUATION_COOLDOWN_SECS: i64 = 86_400; // 24 hours

// --- Benefits ---
pub const DEFAULT_YELLOW_THEFT_ALERT_CAP: u32 = 1;
pub const DEFAULT_GREEN_THEFT_ALERT_CAP: u32 = 2;
pub const DEFAULT_THEFT_ALERT_CYCLE_DAYS: i64 = 30;
pub const DEFAULT_GREEN_CLIENT_SUPPORT_CALL_CAP: u32 = 1;
pub const DEFAULT_SUPPORT_CALL_CYCLE_DAYS: i64 = 180;

// --- Stolen alerts ---
pub const DEFAULT_ALERT_DURATION_DAYS: i64 = 30;
pub const DEFAULT_FREE_RENEWAL_WINDOW_DAYS: i64 = 2;

// --- Verification ---
pub const DEFAULT_CODE_LENGTH: usize = 6;
pub const DEFAULT_CODE_TTL_SECS: i64 = 600; // 10 minutes
pub const DEFAULT_MAX_FAILED_ATTEMPTS: u32 = 5;

// --- Decay ---
pub const DEFAULT_DECAY_POLICY: &str = "none";
pub const DEFAULT_DECAY_POINTS_PER_MONTH: i64 = 0;

// --- Limits ---
/// Longest accepted cooldown, cycle, alert duration or code lifetime.
pub const MAX_DURATION_DAYS: i64 = 36_500;
pub const MAX_DURATION_SECS: i64 = MAX_DURATION_DAYS * crate::constants::SECONDS_PER_DAY;
/// The seal state stores a single support-call flag per cycle.
pub const MAX_GREEN_CLIENT_SUPPORT_CALL_CAP: u32 = 1;

// --- Storage ---
pub const DEFAULT_STORAGE_BACKEND: &str = "memory";
pub const DEFAULT_DB_FILENAME: &str = "plateguard.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
