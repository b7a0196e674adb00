//! Rendering collaborator for the countdown.
//!
//! Formats each field as a two-digit zero-padded string, tracks the
//! previously displayed tuple to detect which fields changed between
//! samples, and draws the countdown line in place. A changed field gets a
//! bold highlight for one tick, the terminal stand-in for the digit
//! animation. Change detection is purely cosmetic and never affects the
//! computed value.

use std::io::Write;

use crossterm::{
    Command,
    style::Stylize,
    terminal::{Clear, ClearType},
};

use crate::content::{SCHEDULE, SPONSORS};
use crate::countdown::Remaining;

/// Which fields changed between the previous and current sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldChanges {
    pub days: bool,
    pub hours: bool,
    pub minutes: bool,
    pub seconds: bool,
}

impl FieldChanges {
    /// Compare against the previous tuple. With no previous sample every
    /// field counts as changed, so the first render highlights everything.
    pub fn between(previous: Option<&Remaining>, next: &Remaining) -> Self {
        match previous {
            None => Self {
                days: true,
                hours: true,
                minutes: true,
                seconds: true,
            },
            Some(prev) => Self {
                days: prev.days != next.days,
                hours: prev.hours != next.hours,
                minutes: prev.minutes != next.minutes,
                seconds: prev.seconds != next.seconds,
            },
        }
    }

    pub fn any(&self) -> bool {
        self.days || self.hours || self.minutes || self.seconds
    }
}

/// Mutable display state: the per-display previous-value holder.
///
/// Each countdown display owns exactly one of these; there is no shared
/// global state between displays.
#[derive(Debug, Default)]
pub struct DisplayState {
    previous: Option<Remaining>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new sample, returning which fields changed since the last
    /// one. The new tuple replaces the previously displayed one.
    pub fn observe(&mut self, next: Remaining) -> FieldChanges {
        let changes = FieldChanges::between(self.previous.as_ref(), &next);
        self.previous = Some(next);
        changes
    }

    pub fn previous(&self) -> Option<&Remaining> {
        self.previous.as_ref()
    }
}

/// Two-digit zero-padded field formatting. Values that outgrow two digits
/// (day counts past 99) print at full width.
pub fn pad2(value: i64) -> String {
    format!("{value:02}")
}

/// The full countdown line without styling, used for tests and as the
/// layout reference: `DD : HH : MM : SS  (days : hrs : min : sec)`.
pub fn plain_line(remaining: &Remaining) -> String {
    format!(
        "{} : {} : {} : {}  (days : hrs : min : sec)",
        pad2(remaining.days),
        pad2(remaining.hours),
        pad2(remaining.minutes),
        pad2(remaining.seconds),
    )
}

fn styled_field(value: i64, changed: bool) -> String {
    let text = pad2(value);
    if changed {
        text.bold().to_string()
    } else {
        text
    }
}

/// The styled in-place countdown line: carriage return, pipe prefix, the
/// four fields, and a clear-to-end-of-line so a narrowing line (day counts
/// dropping below 100) leaves no stale trailing characters.
fn styled_line(remaining: &Remaining, changes: &FieldChanges) -> String {
    let mut line = format!(
        "\r┃   {} : {} : {} : {}  (days : hrs : min : sec)",
        styled_field(remaining.days, changes.days),
        styled_field(remaining.hours, changes.hours),
        styled_field(remaining.minutes, changes.minutes),
        styled_field(remaining.seconds, changes.seconds),
    );
    let _ = Clear(ClearType::UntilNewLine).write_ansi(&mut line);
    line
}

/// Draw the countdown line in place, highlighting changed fields.
pub fn draw_countdown(remaining: &Remaining, changes: &FieldChanges) {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(styled_line(remaining, changes).as_bytes());
    let _ = stdout.flush();
}

/// Terminate the in-place countdown line before block-structured logging
/// resumes.
pub fn finish_line() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\n");
    let _ = stdout.flush();
}

/// Print the day-of schedule and sponsor roll. Called at most once per run,
/// gated by the reveal state machine.
pub fn draw_schedule() {
    log_block_start!("Day-of schedule");
    for event in SCHEDULE {
        log_indented!("{}  {} - {}", event.time, event.title, event.description);
    }
    log_block_start!("Sponsors");
    log_indented!(SPONSORS.join(" · "));
}
