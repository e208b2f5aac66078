//! Event handling and the one-second ticker for the TUI.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::engine::Phase;
use crate::error::PomoError;
use crate::tui::app::App;

/// How long a single tick lasts.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How long to block waiting for input each loop iteration.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Cancellable one-second tick schedule.
///
/// The UI loop owns exactly one of these per engine: armed when the
/// countdown starts running, cancelled on any transition out of running.
/// There is never more than one pending tick.
#[derive(Debug, Default)]
pub struct Ticker {
    next_due: Option<Instant>,
}

impl Ticker {
    /// Create a cancelled ticker.
    #[must_use]
    pub const fn new() -> Self {
        Self { next_due: None }
    }

    /// Schedule ticks, one second from now. Already armed is a no-op so
    /// the schedule is not disturbed.
    pub fn arm(&mut self) {
        if self.next_due.is_none() {
            self.next_due = Some(Instant::now() + TICK_INTERVAL);
        }
    }

    /// Cancel any pending tick.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Whether ticks are scheduled.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Consume one due tick, if any, scheduling the next.
    pub fn due(&mut self) -> bool {
        match self.next_due {
            Some(due) if Instant::now() >= due => {
                self.next_due = Some(due + TICK_INTERVAL);
                true
            }
            _ => false,
        }
    }
}

/// Handle terminal events for one loop iteration.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<(), PomoError> {
    // Poll for events with a small timeout so ticks stay on schedule
    if !event::poll(POLL_TIMEOUT)
        .map_err(|e| PomoError::Config(format!("Event poll failed: {e}")))?
    {
        return Ok(());
    }

    let Event::Key(key) =
        event::read().map_err(|e| PomoError::Config(format!("Event read failed: {e}")))?
    else {
        return Ok(());
    };

    // Ignore key release events on terminals that report them
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return Ok(());
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        // Start / pause
        KeyCode::Char(' ') => app.toggle_start(),

        // Reset the current phase
        KeyCode::Char('r') => app.reset(),

        // Switch phase
        KeyCode::Char('1') => app.switch_phase(Phase::Work),
        KeyCode::Char('2') => app.switch_phase(Phase::ShortBreak),
        KeyCode::Char('3') => app.switch_phase(Phase::LongBreak),

        // Quick-complete the work session
        KeyCode::Char('c') => app.quick_complete(),

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_starts_cancelled() {
        let mut ticker = Ticker::new();
        assert!(!ticker.is_armed());
        assert!(!ticker.due());
    }

    #[test]
    fn test_ticker_arm_and_cancel() {
        let mut ticker = Ticker::new();

        ticker.arm();
        assert!(ticker.is_armed());
        // Not due until a full second has passed
        assert!(!ticker.due());

        ticker.cancel();
        assert!(!ticker.is_armed());
    }

    #[test]
    fn test_ticker_rearm_keeps_schedule() {
        let mut ticker = Ticker::new();
        ticker.arm();
        let first = ticker.next_due;

        ticker.arm();
        assert_eq!(ticker.next_due, first);
    }
}
