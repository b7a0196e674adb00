//! Configuration system for festr.
//!
//! Handles the TOML configuration file, default generation, validation, and
//! target-instant resolution.
//!
//! ## Configuration Sources
//!
//! The configuration is read from `festr.toml`:
//! 1. `--config DIR` base directory, when given (`DIR/festr.toml`)
//! 2. **XDG_CONFIG_HOME**/festr/festr.toml otherwise
//!
//! A missing file is not an error: a default configuration is written so
//! the next run has something to edit.
//!
//! ## Configuration Structure
//!
//! ```toml
//! #[Countdown]
//! # target = "2026-03-14 09:00:00"  # Explicit target instant (local time)
//! offset_days = 3                   # Target = now + offset_days when no target is set (1-365)
//! tick_interval_ms = 1000           # Sampling period in milliseconds (100-60000)
//!
//! #[Display]
//! show_schedule_on_expiry = true    # Reveal the day-of schedule when the countdown hits zero
//! ```
//!
//! ## Validation
//!
//! Ranges are validated at load time; an unparseable `target` is rejected
//! with the expected format in the error message. Resolution of the target
//! happens once at startup and the instant is fixed for the process
//! lifetime.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Duration, Local};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::constants::{
    DEFAULT_OFFSET_DAYS, DEFAULT_SHOW_SCHEDULE_ON_EXPIRY, DEFAULT_TICK_INTERVAL_MS,
    MAXIMUM_OFFSET_DAYS, MAXIMUM_TICK_INTERVAL_MS, MINIMUM_OFFSET_DAYS, MINIMUM_TICK_INTERVAL_MS,
};

/// Custom base directory set via `--config`, overriding XDG discovery.
static CUSTOM_CONFIG_DIR: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Override the configuration base directory (from the `--config` flag).
pub fn set_config_dir(dir: Option<PathBuf>) {
    *CUSTOM_CONFIG_DIR.lock().unwrap() = dir;
}

/// The custom base directory, if one was set.
pub fn get_custom_config_dir() -> Option<PathBuf> {
    CUSTOM_CONFIG_DIR.lock().unwrap().clone()
}

/// Default configuration file contents written on first run.
const DEFAULT_CONFIG_TEMPLATE: &str = "\
#[Countdown]
# target = \"2026-03-14 09:00:00\"  # Explicit target instant (local time)
offset_days = 3                   # Target = now + offset_days when no target is set (1-365)
tick_interval_ms = 1000           # Sampling period in milliseconds (100-60000)

#[Display]
show_schedule_on_expiry = true    # Reveal the day-of schedule when the countdown hits zero
";

/// Configuration for the festr countdown display.
///
/// All fields are optional and fall back to defaults when not specified.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Explicit target instant, `"YYYY-MM-DD HH:MM:SS"` local time.
    ///
    /// When absent the target is `now + offset_days`, matching the fest
    /// page fixing its countdown three days out from first render.
    pub target: Option<String>,

    /// Offset in days applied when no explicit target is configured (1-365).
    pub offset_days: Option<i64>,

    /// Sampling period of the countdown loop in milliseconds (100-60000).
    pub tick_interval_ms: Option<u64>,

    /// Whether to reveal the day-of schedule when the countdown expires.
    pub show_schedule_on_expiry: Option<bool>,
}

impl Config {
    /// Load the configuration, writing a default file if none exists.
    pub fn load() -> Result<Self> {
        let path = get_config_path()?;
        if !path.exists() {
            create_default_config(&path)?;
        }
        Self::load_from_path(&path)
    }

    /// Load and validate a configuration file at an explicit path.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Resolve the fixed target instant for this run.
    ///
    /// Priority: CLI override, then the config `target`, then
    /// `now + offset_days`. Called once at startup; the result never
    /// changes afterwards.
    pub fn resolve_target(
        &self,
        cli_target: Option<&str>,
        now: DateTime<Local>,
    ) -> Result<DateTime<Local>> {
        if let Some(spec) = cli_target {
            return crate::time::source::parse_datetime(spec)
                .context("invalid --target value");
        }
        if let Some(spec) = &self.target {
            return crate::time::source::parse_datetime(spec)
                .context("invalid target in config file");
        }
        let offset = self.offset_days.unwrap_or(DEFAULT_OFFSET_DAYS);
        Ok(now + Duration::days(offset))
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms.unwrap_or(DEFAULT_TICK_INTERVAL_MS)
    }

    pub fn show_schedule_on_expiry(&self) -> bool {
        self.show_schedule_on_expiry
            .unwrap_or(DEFAULT_SHOW_SCHEDULE_ON_EXPIRY)
    }

    /// Log the effective configuration at startup.
    pub fn log_config(&self, target: DateTime<Local>) {
        log_block_start!("Loaded configuration");
        log_indented!("Target: {}", target.format("%Y-%m-%d %H:%M:%S"));
        match &self.target {
            Some(_) => log_indented!("Target source: explicit"),
            None => log_indented!(
                "Target source: now + {} days",
                self.offset_days.unwrap_or(DEFAULT_OFFSET_DAYS)
            ),
        }
        log_indented!("Tick interval: {} ms", self.tick_interval_ms());
        log_indented!(
            "Schedule reveal on expiry: {}",
            self.show_schedule_on_expiry()
        );
    }
}

/// Path of the active configuration file.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(custom_dir) = get_custom_config_dir() {
        return Ok(custom_dir.join("festr.toml"));
    }
    let base = dirs::config_dir().ok_or_else(|| anyhow!("could not determine config directory"))?;
    Ok(base.join("festr").join("festr.toml"))
}

/// Write the default configuration template, creating parent directories.
pub fn create_default_config(path: &PathBuf) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory: {}", parent.display()))?;
    }
    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write default config: {}", path.display()))?;
    Ok(())
}

/// Validate ranges and formats of a loaded configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(spec) = &config.target {
        crate::time::source::parse_datetime(spec)
            .with_context(|| format!("invalid target in config: {spec}"))?;
    }
    if let Some(offset) = config.offset_days
        && !(MINIMUM_OFFSET_DAYS..=MAXIMUM_OFFSET_DAYS).contains(&offset)
    {
        return Err(anyhow!(
            "offset_days must be between {MINIMUM_OFFSET_DAYS} and {MAXIMUM_OFFSET_DAYS}, got {offset}"
        ));
    }
    if let Some(interval) = config.tick_interval_ms
        && !(MINIMUM_TICK_INTERVAL_MS..=MAXIMUM_TICK_INTERVAL_MS).contains(&interval)
    {
        return Err(anyhow!(
            "tick_interval_ms must be between {MINIMUM_TICK_INTERVAL_MS} and {MAXIMUM_TICK_INTERVAL_MS}, got {interval}"
        ));
    }
    Ok(())
}
