use proptest::prelude::*;

use festr::constants::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};
use festr::countdown::{Phase, Remaining};

/// Generate positive deltas up to a bit over a year out
fn positive_delta_strategy() -> impl Strategy<Value = i64> {
    1i64..=400 * MS_PER_DAY
}

/// Generate non-positive deltas (at or past the target)
fn expired_delta_strategy() -> impl Strategy<Value = i64> {
    (-400 * MS_PER_DAY)..=0i64
}

proptest! {
    /// For every positive delta, the decomposition reconstructs the delta
    /// up to a sub-second residue, and each unit stays within its range.
    #[test]
    fn decomposition_identity_holds(delta in positive_delta_strategy()) {
        let remaining = Remaining::from_delta_ms(delta);

        let reconstructed = remaining.days * MS_PER_DAY
            + remaining.hours * MS_PER_HOUR
            + remaining.minutes * MS_PER_MINUTE
            + remaining.seconds * MS_PER_SECOND;
        let residue = delta - reconstructed;

        prop_assert!((0..1_000).contains(&residue),
            "residue {residue} out of range for delta {delta}");
        prop_assert!(remaining.days >= 0);
        prop_assert!((0..24).contains(&remaining.hours));
        prop_assert!((0..60).contains(&remaining.minutes));
        prop_assert!((0..60).contains(&remaining.seconds));
    }

    /// Every non-positive delta collapses to the all-zero tuple.
    #[test]
    fn non_positive_deltas_are_clamped_to_zero(delta in expired_delta_strategy()) {
        prop_assert_eq!(Remaining::from_delta_ms(delta), Remaining::ZERO);
        prop_assert_eq!(Phase::of_delta_ms(delta), Phase::Expired);
    }

    /// Sampling a fixed target at increasing "now" values yields a
    /// non-increasing sequence of total remaining milliseconds that reaches
    /// zero and holds there.
    #[test]
    fn remaining_is_monotonically_non_increasing(
        initial_delta in 1i64..=5 * MS_PER_DAY,
        step in 1i64..=5_000,
    ) {
        let mut previous_total = i64::MAX;
        let mut reached_zero = false;

        for tick in 0..200i64 {
            let delta = initial_delta - tick * step;
            let remaining = Remaining::from_delta_ms(delta);
            let total = remaining.total_ms();

            prop_assert!(total <= previous_total,
                "total went up: {previous_total} -> {total} at tick {tick}");
            prop_assert!(total >= 0);
            if reached_zero {
                prop_assert_eq!(remaining, Remaining::ZERO,
                    "tuple came back from zero at tick {}", tick);
            }
            if remaining.is_zero() && delta <= 0 {
                reached_zero = true;
            }
            previous_total = total;
        }
    }

    /// Phase classification agrees with the clamp boundary.
    #[test]
    fn phase_matches_clamp_boundary(delta in -MS_PER_DAY..=MS_PER_DAY) {
        let phase = Phase::of_delta_ms(delta);
        if delta <= 0 {
            prop_assert_eq!(phase, Phase::Expired);
        } else {
            prop_assert_eq!(phase, Phase::Counting);
        }
    }
}
