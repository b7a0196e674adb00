//! Core countdown loop and phase management.
//!
//! This module owns the driving policy around the pure calculation in
//! `countdown`: sample once immediately, then once per tick until teardown.
//! It tracks the one-way Counting → Expired transition, feeds each sample
//! through the display's change detection, and sleeps signal-aware so a
//! shutdown request interrupts the tick sleep instead of waiting it out.
//!
//! The `Core` struct owns all per-display state: the fixed target, the
//! current phase, the previous-tuple holder, and the schedule reveal latch.
//! Nothing here is shared between displays.

use anyhow::Result;
use chrono::{DateTime, Local};
use std::sync::atomic::Ordering;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::{
    config::Config,
    countdown::{Phase, Remaining},
    display::{self, DisplayState, FieldChanges},
    reveal::Reveal,
    signals::{SignalMessage, SignalState},
    time,
};

/// Result of one sample: the tuple to display, which fields changed, and
/// whether this sample took the Counting → Expired transition.
struct TickOutcome {
    remaining: Remaining,
    changes: FieldChanges,
    expired_this_tick: bool,
}

/// Parameters for creating a Core instance.
pub(crate) struct CoreParams {
    pub config: Config,
    pub signal_state: SignalState,
    pub debug_enabled: bool,
    /// The fixed target instant, resolved once before the loop starts.
    pub target: DateTime<Local>,
}

/// State machine managing the countdown loop.
pub(crate) struct Core {
    config: Config,
    signal_state: SignalState,
    debug_enabled: bool,
    target: DateTime<Local>,
    phase: Phase,
    display: DisplayState,
    schedule: Reveal,
}

impl Core {
    /// Create a new Core instance from parameters.
    ///
    /// The phase starts at `Counting` even for a target already in the
    /// past: the first sample then takes the regular one-way transition, so
    /// expiry handling runs exactly once on every path.
    pub fn new(params: CoreParams) -> Self {
        Self {
            config: params.config,
            signal_state: params.signal_state,
            debug_enabled: params.debug_enabled,
            target: params.target,
            phase: Phase::Counting,
            display: DisplayState::new(),
            schedule: Reveal::default(),
        }
    }

    /// Execute the countdown until shutdown or simulation end.
    pub fn execute(mut self) -> Result<()> {
        log_block_start!(
            "Counting down to {}",
            self.target.format("%Y-%m-%d %H:%M:%S")
        );
        if self.debug_enabled {
            log_debug!("Tick interval: {} ms", self.config.tick_interval_ms());
        }
        log_pipe!();

        // A target already in the past expires on the very first sample
        if self.debug_enabled && time::source::now() >= self.target {
            log_debug!("Target is already in the past");
        }

        self.main_loop();

        display::finish_line();
        log_block_start!("Shutting down festr...");
        log_end!();

        Ok(())
    }

    /// Run the tick loop: compute, render, sleep, repeat.
    ///
    /// The first sample happens immediately on entry; each later sample
    /// follows one tick interval after the previous one. The loop exits
    /// when the running flag clears, a shutdown message arrives, or a
    /// simulated time window ends.
    fn main_loop(&mut self) {
        let tick = Duration::from_millis(self.config.tick_interval_ms());

        while self.signal_state.running.load(Ordering::SeqCst)
            && !time::source::simulation_ended()
        {
            let outcome = self.sample(time::source::now());
            display::draw_countdown(&outcome.remaining, &outcome.changes);

            if outcome.expired_this_tick {
                self.handle_expiry();
            }

            match self.sleep_for_tick(tick) {
                Some(SignalMessage::Shutdown) => break,
                None => {}
            }
        }
    }

    /// One tick of the countdown state machine, without rendering.
    ///
    /// Takes the one-way Counting → Expired transition when `now` has
    /// reached the target, and reports it exactly once. Once expired the
    /// tuple stays pinned at zero, even if the wall clock later jumps
    /// backwards past the target.
    fn sample(&mut self, now: DateTime<Local>) -> TickOutcome {
        let remaining = match self.phase {
            Phase::Expired => Remaining::ZERO,
            Phase::Counting => Remaining::between(self.target, now),
        };

        let expired_this_tick = self.phase == Phase::Counting
            && Phase::of_delta_ms((self.target - now).num_milliseconds()) == Phase::Expired;
        if expired_this_tick {
            self.phase = Phase::Expired;
        }

        let changes = self.display.observe(remaining);

        TickOutcome {
            remaining,
            changes,
            expired_this_tick,
        }
    }

    /// One-time expiry handling: announce, then reveal the schedule.
    ///
    /// The reveal latch guarantees the schedule prints at most once even if
    /// this were ever reached again.
    fn handle_expiry(&mut self) {
        display::finish_line();
        log_block_start!("The countdown has ended. See you at the fest!");
        log_decorated!("Holding at zero until interrupted");

        if self.config.show_schedule_on_expiry() && self.schedule.reveal() {
            display::draw_schedule();
        }
        log_pipe!();
    }

    /// Sleep one tick, waking early if a signal message arrives.
    ///
    /// Under simulated time the sleep runs on a helper thread through the
    /// time source (which scales or fast-forwards it) while this thread
    /// polls the signal channel, mirroring real-time responsiveness.
    fn sleep_for_tick(&self, tick: Duration) -> Option<SignalMessage> {
        if time::source::is_simulated() {
            let sleep_handle = std::thread::spawn(move || {
                time::source::sleep(tick);
            });

            loop {
                match self
                    .signal_state
                    .signal_receiver
                    .recv_timeout(Duration::from_millis(10))
                {
                    Ok(msg) => break Some(msg),
                    Err(RecvTimeoutError::Timeout) => {
                        if sleep_handle.is_finished() {
                            break None;
                        }
                    }
                    Err(RecvTimeoutError::Disconnected) => break Some(SignalMessage::Shutdown),
                }
            }
        } else {
            match self.signal_state.signal_receiver.recv_timeout(tick) {
                Ok(msg) => Some(msg),
                Err(RecvTimeoutError::Timeout) => None,
                // Sender gone means the handler thread died; stop cleanly
                Err(RecvTimeoutError::Disconnected) => Some(SignalMessage::Shutdown),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Log;
    use chrono::{Duration as ChronoDuration, TimeZone};
    use std::sync::{Arc, atomic::AtomicBool, mpsc::channel};

    fn test_target() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap()
    }

    fn test_core(target: DateTime<Local>) -> Core {
        let (signal_sender, signal_receiver) = channel();
        Core::new(CoreParams {
            config: Config::default(),
            signal_state: SignalState {
                running: Arc::new(AtomicBool::new(true)),
                signal_receiver,
                signal_sender,
            },
            debug_enabled: false,
            target,
        })
    }

    #[test]
    fn counting_samples_track_the_shrinking_delta() {
        let target = test_target();
        let mut core = test_core(target);

        let first = core.sample(target - ChronoDuration::seconds(3));
        assert_eq!(first.remaining.seconds, 3);
        assert!(!first.expired_this_tick);
        assert!(first.changes.seconds, "first render highlights every field");

        let second = core.sample(target - ChronoDuration::seconds(2));
        assert_eq!(second.remaining.seconds, 2);
        assert!(second.changes.seconds);
        assert!(!second.changes.days && !second.changes.hours && !second.changes.minutes);
    }

    #[test]
    fn expiry_transition_fires_exactly_once() {
        let target = test_target();
        let mut core = test_core(target);

        core.sample(target - ChronoDuration::seconds(1));
        let at_target = core.sample(target);
        assert!(at_target.expired_this_tick);
        assert_eq!(at_target.remaining, Remaining::ZERO);

        let later = core.sample(target + ChronoDuration::seconds(5));
        assert!(!later.expired_this_tick);
        assert_eq!(later.remaining, Remaining::ZERO);
    }

    #[test]
    fn tuple_stays_zero_when_the_clock_regresses_after_expiry() {
        let target = test_target();
        let mut core = test_core(target);

        core.sample(target + ChronoDuration::seconds(1));
        assert_eq!(core.phase, Phase::Expired);

        // Wall clock jumps back an hour before the target; the latch must
        // keep the tuple pinned at zero with no fresh transition
        let regressed = core.sample(target - ChronoDuration::hours(1));
        assert_eq!(regressed.remaining, Remaining::ZERO);
        assert!(!regressed.expired_this_tick);
        assert_eq!(core.phase, Phase::Expired);
    }

    #[test]
    fn already_past_target_expires_on_the_first_sample() {
        let target = test_target();
        let mut core = test_core(target);

        let first = core.sample(target + ChronoDuration::days(2));
        assert!(first.expired_this_tick);
        assert_eq!(first.remaining, Remaining::ZERO);
    }

    #[test]
    #[serial_test::serial]
    fn handle_expiry_reveals_the_schedule_once() {
        Log::set_enabled(false);
        let mut core = test_core(test_target());

        assert!(!core.schedule.is_revealed());
        core.handle_expiry();
        assert!(core.schedule.is_revealed());

        // A second call must leave the latch alone
        core.handle_expiry();
        assert!(core.schedule.is_revealed());
        Log::set_enabled(true);
    }
}
