//! Simulation command: run the countdown under simulated time.
//!
//! Installs a `SimulatedTimeSource` spanning the requested window before the
//! application starts, so the whole run (target resolution, ticking, expiry,
//! shutdown) happens on the simulated clock. The process exits when the
//! window ends, which makes three-day countdowns reviewable in seconds.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::constants::DEFAULT_SIMULATION_MULTIPLIER;
use crate::time::source::{self, SimulatedTimeSource};
use crate::Festr;

/// Run `festr simulate START END [MULTIPLIER]`.
///
/// An explicit `--target` applies to the simulated run the same way it does
/// to a real one, overriding the config file.
pub fn run_simulation(
    start_time: &str,
    end_time: &str,
    multiplier: Option<f64>,
    target: Option<String>,
    debug_enabled: bool,
) -> Result<()> {
    let start = source::parse_datetime(start_time).context("invalid simulation start time")?;
    let end = source::parse_datetime(end_time).context("invalid simulation end time")?;
    if end <= start {
        anyhow::bail!("simulation end must be after start");
    }

    let multiplier = multiplier.unwrap_or(DEFAULT_SIMULATION_MULTIPLIER);

    source::init_time_source(Arc::new(SimulatedTimeSource::new(start, end, multiplier)));

    log_version!();
    log_block_start!(
        "Simulating {} -> {}",
        start.format("%Y-%m-%d %H:%M:%S"),
        end.format("%Y-%m-%d %H:%M:%S")
    );
    if multiplier == 0.0 {
        log_indented!("Fast-forward mode");
    } else if multiplier < 0.0 {
        log_warning!("Negative multiplier {multiplier} treated as fast-forward");
    } else {
        log_indented!("Time multiplier: {multiplier}x");
    }

    Festr::new(debug_enabled)
        .with_target(target)
        .without_headers()
        .run()
}
