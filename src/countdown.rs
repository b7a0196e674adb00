//! Pure remaining-time calculation for the countdown.
//!
//! This module holds the core computation: the floor decomposition of the
//! millisecond delta between a fixed target instant and a sampled "now" into
//! whole days, hours, minutes, and seconds, clamped to all-zero once the
//! target has passed. It is a total function of its inputs with no side
//! effects; the tick loop in `core` owns the sampling policy.

use chrono::{DateTime, Local};

use crate::constants::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Whole-unit time remaining until the target instant.
///
/// Invariants: `days >= 0`, `hours` in 0..24, `minutes` and `seconds` in
/// 0..60, and the four fields are always the floor decomposition of a
/// non-negative millisecond duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// The frozen tuple shown once the target has passed.
    pub const ZERO: Remaining = Remaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a signed millisecond delta into whole units.
    ///
    /// Any non-positive delta collapses to `ZERO` rather than producing
    /// negative units. Strictly floor/truncate, no rounding.
    pub fn from_delta_ms(delta_ms: i64) -> Self {
        if delta_ms <= 0 {
            return Self::ZERO;
        }

        Self {
            days: delta_ms / MS_PER_DAY,
            hours: (delta_ms / MS_PER_HOUR) % 24,
            minutes: (delta_ms / MS_PER_MINUTE) % 60,
            seconds: (delta_ms / MS_PER_SECOND) % 60,
        }
    }

    /// Remaining time between a fixed target and a sampled now.
    pub fn between(target: DateTime<Local>, now: DateTime<Local>) -> Self {
        Self::from_delta_ms((target - now).num_milliseconds())
    }

    /// Whether the tuple has reached the frozen all-zero state.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Total milliseconds represented by the whole units (the sub-second
    /// residue of the original delta is discarded by the decomposition).
    pub fn total_ms(&self) -> i64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }
}

/// Countdown lifecycle phase.
///
/// `Counting` while the target lies in the future, `Expired` from the
/// instant `now >= target`. The transition is one-way: the target is fixed
/// for the lifetime of the display, so there is no path back to `Counting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Counting,
    Expired,
}

impl Phase {
    /// Classify a signed millisecond delta.
    pub fn of_delta_ms(delta_ms: i64) -> Self {
        if delta_ms <= 0 {
            Phase::Expired
        } else {
            Phase::Counting
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 11, 9, 0, 0).unwrap()
    }

    #[test]
    fn three_days_out_is_exactly_three_days() {
        let target = t0() + Duration::milliseconds(259_200_000);
        let remaining = Remaining::between(target, t0());
        assert_eq!(
            remaining,
            Remaining {
                days: 3,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn mixed_units_follow_the_floor_formulas() {
        // 259_200_000 - 90_061_000 = 169_139_000 ms -> 1d 22h 58m 59s
        let target = t0() + Duration::milliseconds(259_200_000);
        let now = t0() + Duration::milliseconds(90_061_000);
        let remaining = Remaining::between(target, now);
        assert_eq!(
            remaining,
            Remaining {
                days: 1,
                hours: 22,
                minutes: 58,
                seconds: 59
            }
        );
    }

    #[test]
    fn exactly_at_target_is_zero() {
        let target = t0() + Duration::milliseconds(259_200_000);
        let now = t0() + Duration::milliseconds(259_200_000);
        assert_eq!(Remaining::between(target, now), Remaining::ZERO);
    }

    #[test]
    fn past_target_is_zero() {
        let target = t0() + Duration::milliseconds(259_200_000);
        let now = t0() + Duration::milliseconds(300_000_000);
        assert_eq!(Remaining::between(target, now), Remaining::ZERO);
        assert!(Remaining::between(target, now).is_zero());
    }

    #[test]
    fn subsecond_residue_is_truncated() {
        let remaining = Remaining::from_delta_ms(1_999);
        assert_eq!(remaining.seconds, 1);
        assert_eq!(remaining.total_ms(), 1_000);
    }

    #[test]
    fn subsecond_positive_delta_shows_zeros_but_still_counting() {
        let remaining = Remaining::from_delta_ms(1);
        assert_eq!(remaining, Remaining::ZERO);
        assert_eq!(Phase::of_delta_ms(1), Phase::Counting);
    }

    #[test]
    fn phase_boundary_is_at_zero_delta() {
        assert_eq!(Phase::of_delta_ms(0), Phase::Expired);
        assert_eq!(Phase::of_delta_ms(-1), Phase::Expired);
        assert_eq!(Phase::of_delta_ms(1_000), Phase::Counting);
    }
}
