//! Structured logging system with visual formatting.
//!
//! This module provides the logging system behind festr's visual output
//! style: structured blocks drawn with Unicode pipe characters, plus the
//! usual semantic levels. The logger can be disabled at runtime for quiet
//! operation during tests, and prefixes every line with the simulated clock
//! when a simulated time source is active.
//!
//! ## Logging Conventions
//!
//! - **`log_version!`**: application startup header, once at startup.
//! - **`log_block_start!`**: begins a new conceptual block (state changes,
//!   phase announcements). Prepends an empty pipe for spacing, then `┣ message`.
//! - **`log_decorated!`**: continuation lines within a block (`┣ message`).
//! - **`log_indented!`**: nested detail lines (`┃   message`).
//! - **`log_pipe!`**: a single empty `┃` line, used to open space before a
//!   warning or error that is not part of the box-drawing flow.
//! - **`log_warning!` / `log_debug!`**: semantic `[LEVEL]`
//!   messages inside the pipe structure.
//! - **`log_error_exit!`**: terminal error with a closing corner, used right
//!   before a hard exit.
//! - **`log_end!`**: final `╹` marker, once at shutdown.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

// AtomicBool rather than thread_local so tests on other threads see it
static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Main logging interface providing structured output formatting.
pub struct Log;

impl Log {
    /// Enable or disable logging temporarily.
    ///
    /// Useful for quiet operation during tests where log output would
    /// interfere with results.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Get the timestamp prefix for simulation mode.
    ///
    /// Shows `[HH:MM:SS] ` of the simulated clock so accelerated runs stay
    /// readable. Returns an empty string under real time.
    pub fn get_timestamp_prefix() -> String {
        if crate::time::source::is_initialized() && crate::time::source::is_simulated() {
            format!("[{}] ", crate::time::source::now().format("%H:%M:%S"))
        } else {
            String::new()
        }
    }
}

/// Write formatted output to stdout. A failed write must not take down the
/// countdown loop, so errors are swallowed.
pub fn write_output(text: &str) {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let version = env!("CARGO_PKG_VERSION");
            let formatted = format!("{prefix}┏ festr v{version} ━━╸\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let formatted = format!("{prefix}╹\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log a visual pipe separator for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let formatted = format!("{prefix}┃\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log a block start message, initiating a new conceptual block of information.
#[macro_export]
macro_rules! log_block_start {
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($fmt $($arg)*);
            let formatted = format!("{prefix}┃\n{prefix}┣ {message}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let expr = $expr;
            let formatted = format!("{prefix}┃\n{prefix}┣ {expr}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log a decorated message continuing the current block.
#[macro_export]
macro_rules! log_decorated {
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($fmt $($arg)*);
            let formatted = format!("{prefix}┣ {message}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let expr = $expr;
            let formatted = format!("{prefix}┣ {expr}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log an indented message for sub-items or details within a block.
#[macro_export]
macro_rules! log_indented {
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($fmt $($arg)*);
            let formatted = format!("{prefix}┃   {message}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let expr = $expr;
            let formatted = format!("{prefix}┃   {expr}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log a warning message with pipe prefix and yellow-colored text.
#[macro_export]
macro_rules! log_warning {
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($fmt $($arg)*);
            let formatted = format!("{prefix}┣[\x1b[33mWARNING\x1b[0m] {message}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let expr = $expr;
            let formatted = format!("{prefix}┣[\x1b[33mWARNING\x1b[0m] {expr}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log an error message with a pipe prefix and terminal corner, indicating
/// flow termination right before a hard exit.
#[macro_export]
macro_rules! log_error_exit {
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($fmt $($arg)*);
            let formatted = format!("{prefix}┃\n{prefix}┗[\x1b[31mERROR\x1b[0m] {message}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let expr = $expr;
            let formatted = format!("{prefix}┃\n{prefix}┗[\x1b[31mERROR\x1b[0m] {expr}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log a debug/operational message with pipe prefix and green-colored text.
#[macro_export]
macro_rules! log_debug {
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($fmt $($arg)*);
            let formatted = format!("{prefix}┣[\x1b[32mDEBUG\x1b[0m] {message}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let expr = $expr;
            let formatted = format!("{prefix}┣[\x1b[32mDEBUG\x1b[0m] {expr}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}
