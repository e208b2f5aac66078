//! User-visible notifications.
//!
//! The engine reports completions, informational notices, and logging
//! failures through a `Notifier`. The CLI prints them immediately; the
//! interactive timer queues them for its status line.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use colored::Colorize;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Something completed as intended.
    Success,
    /// Informational, no action needed.
    Info,
    /// Something failed but the timer keeps going.
    Error,
}

/// A one-shot user-visible notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Human-readable message.
    pub message: String,
}

impl Notice {
    /// Create a notice.
    #[must_use]
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Destination for user-visible notices.
pub trait Notifier {
    /// Deliver a notice.
    fn notify(&self, notice: Notice);

    /// Deliver a success notice.
    fn success(&self, message: &str) {
        self.notify(Notice::new(NoticeLevel::Success, message));
    }

    /// Deliver an informational notice.
    fn info(&self, message: &str) {
        self.notify(Notice::new(NoticeLevel::Info, message));
    }

    /// Deliver an error notice.
    fn error(&self, message: &str) {
        self.notify(Notice::new(NoticeLevel::Error, message));
    }
}

/// Notifier that prints colored lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        let line = match notice.level {
            NoticeLevel::Success => format!("✅ {}", notice.message).green().to_string(),
            NoticeLevel::Info => format!("ℹ️  {}", notice.message).dimmed().to_string(),
            NoticeLevel::Error => format!("⚠️  {}", notice.message).red().to_string(),
        };
        eprintln!("{line}");
    }
}

/// Shared queue of pending notices.
pub type NoticeQueue = Rc<RefCell<VecDeque<Notice>>>;

/// Notifier that queues notices for a UI to drain.
#[derive(Clone)]
pub struct QueuedNotifier {
    queue: NoticeQueue,
}

impl QueuedNotifier {
    /// Create a notifier backed by the given queue.
    #[must_use]
    pub fn new(queue: NoticeQueue) -> Self {
        Self { queue }
    }
}

impl Notifier for QueuedNotifier {
    fn notify(&self, notice: Notice) {
        self.queue.borrow_mut().push_back(notice);
    }
}
