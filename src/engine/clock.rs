//! Time source abstraction for the timer engine.
//!
//! The engine never reads the system clock directly; it asks an injected
//! `Clock`, which lets tests pin and advance wall-clock time.

use chrono::{DateTime, Utc};

/// A source of the current wall-clock time.
pub trait Clock {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
