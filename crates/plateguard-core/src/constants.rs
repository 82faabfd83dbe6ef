/// plateguard version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of categories per score axis.
pub const CATEGORY_COUNT: usize = 7;

/// Number of boundaries separating the categories.
pub const THRESHOLD_COUNT: usize = CATEGORY_COUNT - 1;

/// Length of a normalized vehicle plate.
pub const PLATE_LENGTH: usize = 7;

/// Seconds in one day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days in one decay month.
pub const DAYS_PER_DECAY_MONTH: i64 = 30;
