//! The Pomodoro countdown engine.
//!
//! Owns the countdown state for the three phases, advances it one second
//! at a time, and produces exactly one completed-session fact per
//! exhausted work countdown. The one-second tick source is owned by the
//! caller; the engine itself is synchronous and single-threaded.

use std::rc::Rc;

use chrono::{DateTime, Utc};

use super::clock::Clock;
use super::notify::Notifier;
use super::phase::{Durations, Phase};
use super::signal::SessionUpdated;
use crate::sessions::SessionLogger;

/// Mutable countdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    /// Current phase.
    pub phase: Phase,
    /// Seconds left on the countdown; never negative.
    pub remaining_seconds: u32,
    /// Whether the countdown is actively ticking.
    pub running: bool,
    /// When the current work session was first started.
    ///
    /// Set when a work countdown starts from a fresh state; cleared on
    /// reset or phase change. Never set during breaks.
    pub session_started_at: Option<DateTime<Utc>>,
}

/// The fact emitted once per finished work countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedSession {
    /// When the session started (falls back to completion time if the
    /// start was never recorded).
    pub started_at: DateTime<Utc>,
    /// Wall-clock minutes between start and completion, rounded to the
    /// nearest minute. Paused intervals are counted.
    pub elapsed_minutes: u32,
    /// The configured work duration at completion time.
    pub configured_minutes: u32,
}

/// Countdown engine for the three Pomodoro phases.
pub struct TimerEngine {
    durations: Durations,
    state: TimerState,
    clock: Rc<dyn Clock>,
    logger: Rc<dyn SessionLogger>,
    notifier: Rc<dyn Notifier>,
    updates: Rc<SessionUpdated>,
}

impl TimerEngine {
    /// Create an engine in the work phase, not running.
    #[must_use]
    pub fn new(
        durations: Durations,
        clock: Rc<dyn Clock>,
        logger: Rc<dyn SessionLogger>,
        notifier: Rc<dyn Notifier>,
        updates: Rc<SessionUpdated>,
    ) -> Self {
        Self {
            state: TimerState {
                phase: Phase::Work,
                remaining_seconds: durations.seconds_for(Phase::Work),
                running: false,
                session_started_at: None,
            },
            durations,
            clock,
            logger,
            notifier,
            updates,
        }
    }

    /// Replace the duration table, clamping each value into the valid
    /// range.
    ///
    /// Does not touch the current countdown; the new durations take effect
    /// the next time `reset` or `switch_phase` recomputes remaining time.
    pub fn configure(&mut self, work: u32, short_break: u32, long_break: u32) {
        self.durations = Durations::from_minutes(work, short_break, long_break);
    }

    /// Switch to a phase: full duration, stopped, no session start.
    pub fn switch_phase(&mut self, target: Phase) {
        self.state.phase = target;
        self.state.remaining_seconds = self.durations.seconds_for(target);
        self.state.running = false;
        self.state.session_started_at = None;
    }

    /// Start the countdown if stopped, pause it if running.
    ///
    /// Starting a fresh work countdown stamps the session start time.
    /// Pausing and resuming does not re-stamp it, so elapsed time is
    /// measured from the original start.
    pub fn toggle_start(&mut self) {
        if self.state.running {
            self.state.running = false;
            return;
        }

        if self.state.phase == Phase::Work && self.state.session_started_at.is_none() {
            self.state.session_started_at = Some(self.clock.now());
        }
        self.state.running = true;
    }

    /// Stop the countdown and restore the current phase's full duration.
    pub fn reset(&mut self) {
        self.state.running = false;
        self.state.remaining_seconds = self.durations.seconds_for(self.state.phase);
        self.state.session_started_at = None;
    }

    /// Advance the countdown by one second.
    ///
    /// Invoked once per second by the caller's ticker while running; a
    /// tick that exhausts the countdown performs the completion transition
    /// in the same call. Work completions log a session and move to the
    /// short break; break completions just reset.
    pub fn tick(&mut self) {
        if !self.state.running {
            return;
        }

        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
        }

        if self.state.remaining_seconds == 0 {
            self.state.running = false;

            if self.state.phase == Phase::Work {
                self.notifier
                    .success("Pomodoro completed! Great job! Take a break now.");
                let completed = self.completed_session(false);
                self.log_session(completed);
                self.switch_phase(Phase::ShortBreak);
            } else {
                self.reset();
            }
        }
    }

    /// Log the current work session immediately, without waiting for the
    /// countdown to reach zero.
    ///
    /// During a break this is a no-op that surfaces an informational
    /// notice; it is reachable from normal interaction and not an error.
    pub fn quick_complete(&mut self) {
        if self.state.phase.is_break() {
            self.notifier
                .info("Quick-complete only applies to the work phase.");
            return;
        }

        self.notifier.success("Work session logged.");
        let completed = self.completed_session(true);
        self.log_session(completed);
        self.reset();
    }

    /// Build the completion fact from the current state.
    fn completed_session(&self, at_least_one_minute: bool) -> CompletedSession {
        let now = self.clock.now();
        let started_at = self.state.session_started_at.unwrap_or(now);

        let mut elapsed_minutes = round_to_minutes((now - started_at).num_seconds());
        if at_least_one_minute {
            elapsed_minutes = elapsed_minutes.max(1);
        }

        CompletedSession {
            started_at,
            elapsed_minutes,
            configured_minutes: self.durations.work,
        }
    }

    /// Hand a completed session to the logging collaborator.
    ///
    /// A failed log is reported as an error notice and otherwise ignored:
    /// the timer's usability is not gated on the logger's liveness, so the
    /// caller proceeds with its phase transition either way.
    fn log_session(&self, completed: CompletedSession) {
        match self
            .logger
            .log_work_session(completed.started_at, completed.elapsed_minutes)
        {
            Ok(_) => self.updates.emit(),
            Err(e) => self.notifier.error(&format!("Failed to log session: {e}")),
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    /// Whether the countdown is ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.running
    }

    /// When the current work session started, if one has.
    #[must_use]
    pub const fn session_started_at(&self) -> Option<DateTime<Utc>> {
        self.state.session_started_at
    }

    /// The active duration table.
    #[must_use]
    pub const fn durations(&self) -> Durations {
        self.durations
    }

    /// A copy of the full countdown state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Fraction of the current phase already elapsed (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let total = self.durations.seconds_for(self.state.phase);
        if total == 0 {
            return 1.0;
        }
        1.0 - (f64::from(self.state.remaining_seconds) / f64::from(total))
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.state.remaining_seconds)
    }
}

/// Round a second count to whole minutes, half up. Negative input (a
/// clock that moved backwards) rounds to zero.
fn round_to_minutes(seconds: i64) -> u32 {
    if seconds <= 0 {
        return 0;
    }
    u32::try_from((seconds + 30) / 60).unwrap_or(u32::MAX)
}

/// Format a second count as MM:SS.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::notify::{Notice, NoticeLevel};
    use crate::error::PomoError;
    use crate::sessions::SessionRecord;
    use std::cell::{Cell, RefCell};
    use chrono::{Duration, TimeZone};

    struct ManualClock {
        now: Cell<DateTime<Utc>>,
    }

    impl ManualClock {
        fn starting_at(now: DateTime<Utc>) -> Rc<Self> {
            Rc::new(Self { now: Cell::new(now) })
        }

        fn advance_seconds(&self, seconds: i64) {
            self.now.set(self.now.get() + Duration::seconds(seconds));
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            self.now.get()
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        calls: RefCell<Vec<(DateTime<Utc>, u32)>>,
        fail: Cell<bool>,
    }

    impl SessionLogger for RecordingLogger {
        fn log_work_session(
            &self,
            started_at: DateTime<Utc>,
            duration_min: u32,
        ) -> Result<SessionRecord, PomoError> {
            if self.fail.get() {
                return Err(PomoError::Database("connection refused".to_string()));
            }
            self.calls.borrow_mut().push((started_at, duration_min));
            Ok(SessionRecord::work(started_at, duration_min))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    impl RecordingNotifier {
        fn count_level(&self, level: NoticeLevel) -> usize {
            self.notices
                .borrow()
                .iter()
                .filter(|n| n.level == level)
                .count()
        }
    }

    struct Harness {
        engine: TimerEngine,
        clock: Rc<ManualClock>,
        logger: Rc<RecordingLogger>,
        notifier: Rc<RecordingNotifier>,
        updates: Rc<SessionUpdated>,
    }

    fn build_engine(durations: Durations) -> Harness {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let clock = ManualClock::starting_at(t0);
        let logger = Rc::new(RecordingLogger::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let updates = Rc::new(SessionUpdated::new());

        let engine = TimerEngine::new(
            durations,
            Rc::<ManualClock>::clone(&clock),
            Rc::<RecordingLogger>::clone(&logger),
            Rc::<RecordingNotifier>::clone(&notifier),
            Rc::clone(&updates),
        );

        Harness {
            engine,
            clock,
            logger,
            notifier,
            updates,
        }
    }

    /// Tick the engine n times, advancing wall clock in lockstep.
    fn tick_seconds(h: &mut Harness, n: u32) {
        for _ in 0..n {
            h.clock.advance_seconds(1);
            h.engine.tick();
        }
    }

    #[test]
    fn test_initial_state() {
        let h = build_engine(Durations::default());

        assert_eq!(h.engine.phase(), Phase::Work);
        assert_eq!(h.engine.remaining_seconds(), 25 * 60);
        assert!(!h.engine.is_running());
        assert!(h.engine.session_started_at().is_none());
    }

    #[test]
    fn test_countdown_monotonicity() {
        let mut h = build_engine(Durations::default());
        h.engine.toggle_start();

        let before = h.engine.remaining_seconds();
        h.engine.tick();
        assert_eq!(h.engine.remaining_seconds(), before - 1);
        assert!(h.engine.is_running());
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let mut h = build_engine(Durations::default());

        let before = h.engine.remaining_seconds();
        h.engine.tick();
        assert_eq!(h.engine.remaining_seconds(), before);
    }

    #[test]
    fn test_work_completion_emits_exactly_one_event() {
        let mut h = build_engine(Durations::from_minutes(1, 5, 15));
        h.engine.toggle_start();

        tick_seconds(&mut h, 59);
        assert!(h.logger.calls.borrow().is_empty());
        assert_eq!(h.engine.remaining_seconds(), 1);

        tick_seconds(&mut h, 1);
        assert_eq!(h.logger.calls.borrow().len(), 1);
        assert!(!h.engine.is_running());
        assert_eq!(h.engine.phase(), Phase::ShortBreak);
        assert_eq!(h.engine.remaining_seconds(), 5 * 60);
        assert!(h.engine.session_started_at().is_none());
        assert_eq!(h.notifier.count_level(NoticeLevel::Success), 1);
    }

    #[test]
    fn test_break_completion_emits_no_event() {
        let mut h = build_engine(Durations::from_minutes(25, 1, 15));
        h.engine.switch_phase(Phase::ShortBreak);
        h.engine.toggle_start();

        tick_seconds(&mut h, 60);

        assert!(h.logger.calls.borrow().is_empty());
        assert!(!h.engine.is_running());
        assert_eq!(h.engine.phase(), Phase::ShortBreak);
        assert_eq!(h.engine.remaining_seconds(), 60);
    }

    #[test]
    fn test_break_start_does_not_stamp_session() {
        let mut h = build_engine(Durations::default());
        h.engine.switch_phase(Phase::LongBreak);
        h.engine.toggle_start();

        assert!(h.engine.is_running());
        assert!(h.engine.session_started_at().is_none());
    }

    #[test]
    fn test_phase_switch_is_idempotent() {
        let mut h = build_engine(Durations::default());
        h.engine.toggle_start();
        tick_seconds(&mut h, 10);

        h.engine.switch_phase(Phase::LongBreak);
        let once = h.engine.state();
        h.engine.switch_phase(Phase::LongBreak);
        let twice = h.engine.state();

        assert_eq!(once, twice);
        assert_eq!(once.remaining_seconds, 15 * 60);
        assert!(!once.running);
        assert!(once.session_started_at.is_none());
    }

    #[test]
    fn test_pause_resume_keeps_session_start() {
        let mut h = build_engine(Durations::default());
        h.engine.toggle_start();
        let started = h.engine.session_started_at();
        assert!(started.is_some());

        h.engine.toggle_start();
        assert!(!h.engine.is_running());
        assert_eq!(h.engine.session_started_at(), started);

        h.clock.advance_seconds(120);
        h.engine.toggle_start();
        assert!(h.engine.is_running());
        assert_eq!(h.engine.session_started_at(), started);
    }

    #[test]
    fn test_reset_restores_full_duration() {
        let mut h = build_engine(Durations::default());
        h.engine.toggle_start();
        tick_seconds(&mut h, 30);

        h.engine.reset();
        assert!(!h.engine.is_running());
        assert_eq!(h.engine.remaining_seconds(), 25 * 60);
        assert!(h.engine.session_started_at().is_none());
    }

    #[test]
    fn test_quick_complete_logs_and_resets() {
        let mut h = build_engine(Durations::default());
        h.engine.toggle_start();
        let started = h.engine.session_started_at().unwrap();

        h.clock.advance_seconds(90);
        h.engine.quick_complete();

        let calls = h.logger.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (started, 2));

        assert_eq!(h.engine.phase(), Phase::Work);
        assert_eq!(h.engine.remaining_seconds(), 25 * 60);
        assert!(!h.engine.is_running());
        assert!(h.engine.session_started_at().is_none());
    }

    #[test]
    fn test_quick_complete_minimum_one_minute() {
        let mut h = build_engine(Durations::default());
        h.engine.toggle_start();

        h.clock.advance_seconds(10);
        h.engine.quick_complete();

        assert_eq!(h.logger.calls.borrow()[0].1, 1);
    }

    #[test]
    fn test_quick_complete_on_break_is_noop_with_notice() {
        let mut h = build_engine(Durations::default());
        h.engine.switch_phase(Phase::ShortBreak);
        let before = h.engine.state();

        h.engine.quick_complete();

        assert_eq!(h.engine.state(), before);
        assert!(h.logger.calls.borrow().is_empty());
        assert_eq!(h.notifier.count_level(NoticeLevel::Info), 1);
        assert_eq!(h.notifier.count_level(NoticeLevel::Success), 0);
    }

    #[test]
    fn test_elapsed_rounding_boundaries() {
        // 29s rounds down to 0, 30s rounds up to 1, 90s rounds to 2
        for (advance, expected) in [(29, 0), (30, 1), (90, 2)] {
            let mut h = build_engine(Durations::from_minutes(1, 5, 15));
            h.engine.toggle_start();
            let started = h.engine.session_started_at().unwrap();

            // Exhaust the countdown without moving the wall clock, then
            // place "now" exactly where the boundary case needs it.
            for _ in 0..59 {
                h.engine.tick();
            }
            h.clock.advance_seconds(advance);
            h.engine.tick();

            let calls = h.logger.calls.borrow();
            assert_eq!(calls.len(), 1, "advance {advance}s");
            assert_eq!(calls[0], (started, expected), "advance {advance}s");
        }
    }

    #[test]
    fn test_elapsed_counts_paused_time() {
        // Pinned behavior: pauses are NOT subtracted from elapsed time.
        let mut h = build_engine(Durations::default());
        h.engine.toggle_start();

        h.clock.advance_seconds(60);
        h.engine.toggle_start(); // pause
        h.clock.advance_seconds(120); // paused wall time still counts
        h.engine.toggle_start(); // resume

        h.engine.quick_complete();
        assert_eq!(h.logger.calls.borrow()[0].1, 3);
    }

    #[test]
    fn test_configure_clamps_and_defers() {
        let mut h = build_engine(Durations::default());
        h.engine.configure(0, 5, 999);

        // Remaining time untouched until a recompute
        assert_eq!(h.engine.remaining_seconds(), 25 * 60);

        h.engine.reset();
        assert_eq!(h.engine.remaining_seconds(), 60);

        h.engine.switch_phase(Phase::LongBreak);
        assert_eq!(h.engine.remaining_seconds(), 60 * 60);
    }

    #[test]
    fn test_logging_failure_does_not_block_transition() {
        let mut h = build_engine(Durations::from_minutes(1, 5, 15));
        h.logger.fail.set(true);
        h.engine.toggle_start();

        tick_seconds(&mut h, 60);

        assert_eq!(h.engine.phase(), Phase::ShortBreak);
        assert_eq!(h.engine.remaining_seconds(), 5 * 60);
        assert!(!h.engine.is_running());
        assert_eq!(h.notifier.count_level(NoticeLevel::Error), 1);
        assert!(h.logger.calls.borrow().is_empty());
    }

    #[test]
    fn test_session_updated_fires_only_on_successful_log() {
        let mut h = build_engine(Durations::default());
        let fired = Rc::new(Cell::new(0));
        let fired_clone = Rc::clone(&fired);
        h.updates.subscribe(move || fired_clone.set(fired_clone.get() + 1));

        h.engine.toggle_start();
        h.engine.quick_complete();
        assert_eq!(fired.get(), 1);

        h.logger.fail.set(true);
        h.engine.toggle_start();
        h.engine.quick_complete();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_completion_without_recorded_start_uses_now() {
        // Quick-complete on a work phase that never started has no start
        // stamp; started_at falls back to the completion time.
        let mut h = build_engine(Durations::default());
        assert!(h.engine.session_started_at().is_none());

        h.engine.quick_complete();

        let (started, minutes) = h.logger.calls.borrow()[0];
        assert_eq!(minutes, 1);
        assert_eq!(started, h.clock.now());
    }

    #[test]
    fn test_progress_and_formatting() {
        let mut h = build_engine(Durations::from_minutes(2, 5, 15));
        assert!((h.engine.progress() - 0.0).abs() < f64::EPSILON);
        assert_eq!(h.engine.format_remaining(), "02:00");

        h.engine.toggle_start();
        tick_seconds(&mut h, 60);
        assert!((h.engine.progress() - 0.5).abs() < 0.01);
        assert_eq!(h.engine.format_remaining(), "01:00");
    }

    #[test]
    fn test_round_to_minutes() {
        assert_eq!(round_to_minutes(0), 0);
        assert_eq!(round_to_minutes(-5), 0);
        assert_eq!(round_to_minutes(29), 0);
        assert_eq!(round_to_minutes(30), 1);
        assert_eq!(round_to_minutes(89), 1);
        assert_eq!(round_to_minutes(90), 2);
        assert_eq!(round_to_minutes(25 * 60), 25);
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(90), "01:30");
        assert_eq!(format_mmss(25 * 60), "25:00");
    }
}
