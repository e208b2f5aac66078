//! The session-logging collaborator consumed by the timer engine.

use std::rc::Rc;

use chrono::{DateTime, Utc};

use super::record::SessionRecord;
use super::storage::SessionStorage;
use crate::error::PomoError;

/// Smallest loggable session length in minutes.
pub const MIN_LOGGED_MINUTES: u32 = 1;

/// Largest loggable session length in minutes.
pub const MAX_LOGGED_MINUTES: u32 = 180;

/// Destination for completed work sessions.
///
/// Called once per natural or quick completion of the work phase. The
/// engine does not retry on failure; it surfaces the error to the user and
/// carries on.
pub trait SessionLogger {
    /// Record a completed work session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted.
    fn log_work_session(
        &self,
        started_at: DateTime<Utc>,
        duration_min: u32,
    ) -> Result<SessionRecord, PomoError>;
}

/// Logger that persists sessions to the local database.
pub struct SqliteSessionLogger {
    storage: Rc<SessionStorage>,
}

impl SqliteSessionLogger {
    /// Create a logger over shared session storage.
    #[must_use]
    pub fn new(storage: Rc<SessionStorage>) -> Self {
        Self { storage }
    }
}

impl SessionLogger for SqliteSessionLogger {
    fn log_work_session(
        &self,
        started_at: DateTime<Utc>,
        duration_min: u32,
    ) -> Result<SessionRecord, PomoError> {
        // A zero-minute session can reach us when a countdown finishes with
        // no recorded start; store the smallest valid length instead.
        let duration = duration_min.clamp(MIN_LOGGED_MINUTES, MAX_LOGGED_MINUTES);

        let mut record = SessionRecord::work(started_at, duration);
        self.storage.insert(&mut record)?;
        Ok(record)
    }
}
