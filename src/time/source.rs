//! Time source abstraction for supporting both real-time and simulated time.
//!
//! This module provides a trait-based abstraction that allows the
//! application to run against either real system time or simulated time.
//! Simulation drives the whole countdown window in seconds instead of days,
//! which is how expiry behavior gets exercised without waiting three days.

use chrono::{DateTime, Duration as ChronoDuration, Local, NaiveDateTime, TimeZone};
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

/// Global time source instance, defaults to RealTimeSource
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Trait for abstracting time operations
pub trait TimeSource: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Local>;

    /// Sleep for the specified duration (or simulate it)
    fn sleep(&self, duration: StdDuration);

    /// Check if this is a simulated time source
    fn is_simulated(&self) -> bool;

    /// Check if simulation has ended (always false for real time)
    fn is_ended(&self) -> bool {
        false
    }
}

/// Real-time implementation that uses actual system time
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn sleep(&self, duration: StdDuration) {
        std::thread::sleep(duration);
    }

    fn is_simulated(&self) -> bool {
        false
    }
}

/// Simulated time source for testing and time-accelerated execution.
///
/// Two modes:
/// - Linear acceleration: time flows at a constant multiplier rate
/// - Fast-forward: time jumps instantly through sleep periods (multiplier = 0.0)
pub struct SimulatedTimeSource {
    /// The starting time for the simulation
    start_time: DateTime<Local>,
    /// The target end time for the simulation
    end_time: DateTime<Local>,
    /// Time acceleration factor (e.g., 60.0 = 1 minute per second).
    /// Special value 0.0 means fast-forward mode
    time_multiplier: f64,
    /// Simulated time advanced so far, tracked as accumulated sleep.
    /// Updated only after each sleep completes
    accumulated_sleep: Mutex<StdDuration>,
}

impl SimulatedTimeSource {
    /// Create a new simulated time source.
    ///
    /// # Arguments
    /// * `start_time` - Starting time for the simulation
    /// * `end_time` - Ending time for the simulation
    /// * `multiplier` - Time acceleration (0.0 means fast-forward mode)
    pub fn new(start_time: DateTime<Local>, end_time: DateTime<Local>, multiplier: f64) -> Self {
        Self {
            start_time,
            end_time,
            time_multiplier: if multiplier < 0.0 { 0.0 } else { multiplier },
            accumulated_sleep: Mutex::new(StdDuration::ZERO),
        }
    }

    /// Current simulated time: start time plus accumulated sleep, capped at
    /// the end time.
    fn current_time(&self) -> DateTime<Local> {
        let accumulated = *self.accumulated_sleep.lock().unwrap();
        let elapsed = ChronoDuration::milliseconds(accumulated.as_millis() as i64);
        let simulated = self.start_time + elapsed;
        if simulated > self.end_time {
            self.end_time
        } else {
            simulated
        }
    }

    /// Check if the simulation has reached its end time
    pub fn has_ended(&self) -> bool {
        self.current_time() >= self.end_time
    }
}

impl TimeSource for SimulatedTimeSource {
    fn now(&self) -> DateTime<Local> {
        self.current_time()
    }

    fn sleep(&self, duration: StdDuration) {
        if self.time_multiplier == 0.0 {
            // Fast-forward: advance simulated time by the full duration.
            // Minimal real sleep so other threads get a chance to run
            {
                let mut accumulated = self.accumulated_sleep.lock().unwrap();
                *accumulated += duration;
            }
            std::thread::sleep(StdDuration::from_millis(1));
        } else {
            // Linear acceleration: sleep for the scaled real duration, but
            // never advance past the end time
            let duration_to_add = {
                let accumulated = *self.accumulated_sleep.lock().unwrap();
                let current =
                    self.start_time + ChronoDuration::milliseconds(accumulated.as_millis() as i64);
                if current >= self.end_time {
                    StdDuration::ZERO
                } else {
                    let remaining = self.end_time - current;
                    let remaining_ms = remaining.num_milliseconds().max(0) as u64;
                    duration.min(StdDuration::from_millis(remaining_ms))
                }
            };

            if duration_to_add > StdDuration::ZERO {
                let real_sleep_secs = duration_to_add.as_secs_f64() / self.time_multiplier;
                if real_sleep_secs > 0.0 {
                    std::thread::sleep(StdDuration::from_secs_f64(real_sleep_secs));
                }
                let mut accumulated = self.accumulated_sleep.lock().unwrap();
                *accumulated += duration_to_add;
            }
        }
    }

    fn is_simulated(&self) -> bool {
        true
    }

    fn is_ended(&self) -> bool {
        self.has_ended()
    }
}

/// Initialize the global time source (call once at startup)
pub fn init_time_source(source: Arc<dyn TimeSource>) {
    TIME_SOURCE.set(source).ok();
}

/// Check if the time source has been initialized
pub fn is_initialized() -> bool {
    TIME_SOURCE.get().is_some()
}

/// Get the current time from the global time source
pub fn now() -> DateTime<Local> {
    TIME_SOURCE.get_or_init(|| Arc::new(RealTimeSource)).now()
}

/// Sleep for the specified duration using the global time source
pub fn sleep(duration: StdDuration) {
    TIME_SOURCE
        .get_or_init(|| Arc::new(RealTimeSource))
        .sleep(duration)
}

/// Check if we're running in simulation mode
pub fn is_simulated() -> bool {
    TIME_SOURCE
        .get_or_init(|| Arc::new(RealTimeSource))
        .is_simulated()
}

/// Check if simulation has reached its end time (always false for real time)
pub fn simulation_ended() -> bool {
    TIME_SOURCE
        .get_or_init(|| Arc::new(RealTimeSource))
        .is_ended()
}

/// Parse a datetime string in the format "YYYY-MM-DD HH:MM:SS"
pub fn parse_datetime(s: &str) -> anyhow::Result<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map_err(|e| anyhow::anyhow!("Invalid datetime format: {e}. Use YYYY-MM-DD HH:MM:SS"))?;
    Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| anyhow::anyhow!("Ambiguous or invalid local time: {s}"))
}
