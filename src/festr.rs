//! Application coordinator that manages the complete lifecycle of festr.
//!
//! This module handles resource acquisition, initialization, and
//! orchestration of the core countdown loop:
//! - Terminal setup with an RAII guard
//! - Configuration loading and target resolution
//! - Signal handler setup
//!
//! The `Festr` struct uses a builder pattern to support different startup
//! contexts:
//! - Normal startup: `Festr::new(debug_enabled).run()`
//! - Explicit target: `Festr::new(debug_enabled).with_target(spec).run()`
//! - Simulation mode: `Festr::new(debug_enabled).without_headers().run()`

use anyhow::{Context, Result};

use crate::{
    config::Config,
    core::{Core, CoreParams},
    signals::setup_signal_handler,
    time,
    utils::TerminalGuard,
};

/// Builder for configuring and running the festr application.
pub struct Festr {
    debug_enabled: bool,
    show_headers: bool,
    target_override: Option<String>,
}

impl Festr {
    /// Create a new runner with defaults matching a normal run
    pub fn new(debug_enabled: bool) -> Self {
        Self {
            debug_enabled,
            show_headers: true,
            target_override: None,
        }
    }

    /// Count down to an explicit target, overriding the config file
    pub fn with_target(mut self, target: Option<String>) -> Self {
        self.target_override = target;
        self
    }

    /// Skip the header display (used by simulation mode)
    pub fn without_headers(mut self) -> Self {
        self.show_headers = false;
        self
    }

    /// Execute the application with the configured settings.
    ///
    /// Handles the complete lifecycle: terminal setup, configuration
    /// loading, target resolution, signal handler setup, the countdown
    /// loop, and graceful shutdown.
    pub fn run(self) -> Result<()> {
        if self.show_headers {
            log_version!();

            if self.debug_enabled {
                log_pipe!();
                log_debug!("Debug mode enabled");
            }
        }

        // Cursor comes back on every exit path via the guard's Drop
        let _term = TerminalGuard::new().context("failed to initialize terminal features")?;

        let config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                log_error_exit!("Configuration failed");
                eprintln!("{:?}", e);
                std::process::exit(1);
            }
        };

        // The target is fixed here for the lifetime of the process
        let target = config.resolve_target(self.target_override.as_deref(), time::source::now())?;

        config.log_config(target);

        let signal_state = setup_signal_handler(self.debug_enabled)?;

        let core = Core::new(CoreParams {
            config,
            signal_state,
            debug_enabled: self.debug_enabled,
            target,
        });

        core.execute()?;

        Ok(())
    }
}
