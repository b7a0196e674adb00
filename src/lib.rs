//! # Festr Library
//!
//! Internal library for the festr binary.
//!
//! This library exists to enable testing of the countdown internals and to
//! provide clean separation between CLI dispatch (main.rs) and application
//! logic.
//!
//! ## Architecture
//!
//! - **Entry Point**: `Festr` struct provides the application API with resource management
//! - **Core Logic**: Internal `Core` module owns the tick loop and phase tracking
//! - **Countdown**: `countdown` module holds the pure remaining-time calculation
//! - **Display**: `display` module formats and draws the countdown line
//! - **Configuration**: `config` module for TOML-based settings
//! - **Time**: `time::source` abstraction over real and simulated time
//! - **Infrastructure**: Signal handling, logging, CLI parsing, and utilities

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

// Public API modules
pub mod args;
pub mod commands;
pub mod config;
pub mod constants;
pub mod content;
pub mod countdown;
pub mod display;
pub mod reveal;
pub mod signals;
pub mod time;
pub mod utils;

// Internal modules
mod core;
mod festr;

// Re-export for binary
pub use festr::Festr;
