//! The Pomodoro timer engine and its collaborator contracts.
//!
//! The engine owns countdown state for the three phases and is driven by
//! an external one-second ticker. Completed work countdowns are handed to
//! a session logger; outcomes are reported through a notifier and a
//! session-updated broadcast signal.

pub mod clock;
pub mod notify;
pub mod phase;
pub mod signal;
pub mod timer;

pub use clock::{Clock, SystemClock};
pub use notify::{Notice, NoticeLevel, NoticeQueue, Notifier, QueuedNotifier, TerminalNotifier};
pub use phase::{Durations, Phase, MAX_MINUTES, MIN_MINUTES};
pub use signal::{SessionUpdated, SubscriptionId};
pub use timer::{format_mmss, CompletedSession, TimerEngine, TimerState};
