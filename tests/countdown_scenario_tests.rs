use chrono::{DateTime, Duration, Local, TimeZone};

use festr::config::Config;
use festr::countdown::{Phase, Remaining};

/// The reference instant used across the scenarios; the target sits three
/// days (259_200_000 ms) after it, matching the fest page's countdown.
fn t0() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 11, 9, 0, 0).unwrap()
}

fn target() -> DateTime<Local> {
    t0() + Duration::milliseconds(259_200_000)
}

#[test]
fn at_t0_three_full_days_remain() {
    assert_eq!(
        Remaining::between(target(), t0()),
        Remaining {
            days: 3,
            hours: 0,
            minutes: 0,
            seconds: 0
        }
    );
}

#[test]
fn partway_through_the_floor_formulas_decide() {
    // 259_200_000 - 90_061_000 = 169_139_000 ms, which decomposes to
    // 1 day, 22 hours, 58 minutes, 59 seconds under the floor formulas
    let now = t0() + Duration::milliseconds(90_061_000);
    assert_eq!(
        Remaining::between(target(), now),
        Remaining {
            days: 1,
            hours: 22,
            minutes: 58,
            seconds: 59
        }
    );
}

#[test]
fn exactly_at_the_target_everything_is_zero() {
    let now = t0() + Duration::milliseconds(259_200_000);
    assert_eq!(Remaining::between(target(), now), Remaining::ZERO);
    assert_eq!(Phase::of_delta_ms((target() - now).num_milliseconds()), Phase::Expired);
}

#[test]
fn past_the_target_everything_stays_zero() {
    let now = t0() + Duration::milliseconds(300_000_000);
    assert_eq!(Remaining::between(target(), now), Remaining::ZERO);
}

#[test]
fn second_by_second_sampling_walks_down_to_zero() {
    let near_target = target() - Duration::seconds(3);
    let expected = [3i64, 2, 1, 0, 0];
    for (tick, want_seconds) in expected.iter().enumerate() {
        let now = near_target + Duration::seconds(tick as i64);
        let remaining = Remaining::between(target(), now);
        assert_eq!(remaining.days, 0);
        assert_eq!(remaining.hours, 0);
        assert_eq!(remaining.minutes, 0);
        assert_eq!(remaining.seconds, *want_seconds, "at tick {tick}");
    }
}

#[test]
fn default_config_resolves_a_three_day_countdown() {
    let config = Config::default();
    let resolved = config.resolve_target(None, t0()).unwrap();
    assert_eq!(
        Remaining::between(resolved, t0()),
        Remaining {
            days: 3,
            hours: 0,
            minutes: 0,
            seconds: 0
        }
    );
}

#[test]
fn explicit_target_resolves_to_the_configured_instant() {
    let config = Config {
        target: Some("2026-03-14 09:00:00".to_string()),
        ..Default::default()
    };
    let resolved = config.resolve_target(None, t0()).unwrap();
    assert_eq!(
        resolved.format("%Y-%m-%d %H:%M:%S").to_string(),
        "2026-03-14 09:00:00"
    );
}
