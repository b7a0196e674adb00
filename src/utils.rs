//! Shared utilities: terminal resource management.

use anyhow::Result;
use crossterm::{cursor, execute};
use std::io::stdout;

/// RAII guard for terminal features.
///
/// Hides the cursor while the in-place countdown line is being redrawn and
/// restores it on drop, so the cursor comes back on every exit path
/// including panics. Environments without a terminal (pipes, CI) are fine:
/// failures to toggle the cursor are ignored.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        let _ = execute!(stdout(), cursor::Hide);
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), cursor::Show);
    }
}
