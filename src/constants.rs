//! Shared constants for countdown math, defaults, and validation ranges.

/// Milliseconds per second.
pub const MS_PER_SECOND: i64 = 1_000;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;

/// Milliseconds per hour.
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Milliseconds per day.
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Default offset applied when no explicit target is configured.
/// The fest page fixed its target three days out from first render.
pub const DEFAULT_OFFSET_DAYS: i64 = 3;

/// Default sampling period for the countdown loop in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;

/// Whether the day-of schedule is revealed when the countdown expires.
pub const DEFAULT_SHOW_SCHEDULE_ON_EXPIRY: bool = true;

/// Minimum accepted tick interval (ms).
pub const MINIMUM_TICK_INTERVAL_MS: u64 = 100;

/// Maximum accepted tick interval (ms).
pub const MAXIMUM_TICK_INTERVAL_MS: u64 = 60_000;

/// Minimum accepted target offset in days.
pub const MINIMUM_OFFSET_DAYS: i64 = 1;

/// Maximum accepted target offset in days.
pub const MAXIMUM_OFFSET_DAYS: i64 = 365;

/// Default time acceleration for `festr simulate` when none is given
/// (one simulated minute per real second).
pub const DEFAULT_SIMULATION_MULTIPLIER: f64 = 60.0;
