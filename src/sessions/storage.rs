//! Session persistence.
//!
//! Reads and writes logged sessions in the local database.

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use super::record::{SessionKind, SessionRecord};
use crate::error::PomoError;
use crate::storage::Database;

/// Storage for logged sessions.
pub struct SessionStorage {
    db: Database,
}

impl SessionStorage {
    /// Create storage over the default database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, PomoError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Insert a new session, assigning its database ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert(&self, record: &mut SessionRecord) -> Result<(), PomoError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO sessions (started_at, duration_min, kind, created_at)
              VALUES (?1, ?2, ?3, ?4)",
            params![
                record.started_at.to_rfc3339(),
                record.duration_min,
                record.kind.as_str(),
                record.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| PomoError::Database(format!("Failed to insert session: {e}")))?;

        record.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    /// Get a session by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<SessionRecord>, PomoError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, started_at, duration_min, kind, created_at
                  FROM sessions WHERE id = ?1",
            )
            .map_err(|e| PomoError::Database(format!("Failed to prepare query: {e}")))?;

        let result = stmt
            .query_row([id], row_to_record)
            .optional()
            .map_err(|e| PomoError::Database(format!("Failed to query session: {e}")))?;

        Ok(result)
    }

    /// Get recent sessions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent(&self, limit: usize) -> Result<Vec<SessionRecord>, PomoError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, started_at, duration_min, kind, created_at
                  FROM sessions
                  ORDER BY started_at DESC
                  LIMIT ?1",
            )
            .map_err(|e| PomoError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([limit], row_to_record)
            .map_err(|e| PomoError::Database(format!("Failed to query sessions: {e}")))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| PomoError::Database(e.to_string()))?);
        }

        Ok(records)
    }

    /// Get total work minutes for a date range.
    ///
    /// Break sessions are excluded from the total.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn total_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, PomoError> {
        let conn = self.db.connection();

        let total: i64 = conn
            .query_row(
                r"SELECT COALESCE(SUM(duration_min), 0)
                  FROM sessions
                  WHERE started_at >= ?1 AND started_at <= ?2
                    AND kind = 'work'",
                [start.to_rfc3339(), end.to_rfc3339()],
                |row| row.get(0),
            )
            .map_err(|e| PomoError::Database(format!("Failed to query total minutes: {e}")))?;

        Ok(total)
    }

    /// Get work session count for a date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, PomoError> {
        let conn = self.db.connection();

        let count: i64 = conn
            .query_row(
                r"SELECT COUNT(*)
                  FROM sessions
                  WHERE started_at >= ?1 AND started_at <= ?2
                    AND kind = 'work'",
                [start.to_rfc3339(), end.to_rfc3339()],
                |row| row.get(0),
            )
            .map_err(|e| PomoError::Database(format!("Failed to query session count: {e}")))?;

        Ok(count)
    }

    /// Get total work minutes logged today.
    ///
    /// The day boundary is computed in UTC, matching stored session times.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn today_total_minutes(&self) -> Result<i64, PomoError> {
        let (start, end) = today_bounds(Utc::now());
        self.total_between(start, end)
    }

    /// Get work session count for today (UTC).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn today_count(&self) -> Result<i64, PomoError> {
        let (start, end) = today_bounds(Utc::now());
        self.count_between(start, end)
    }

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete(&self, id: i64) -> Result<bool, PomoError> {
        let conn = self.db.connection();

        let rows = conn
            .execute("DELETE FROM sessions WHERE id = ?1", [id])
            .map_err(|e| PomoError::Database(format!("Failed to delete session: {e}")))?;

        Ok(rows > 0)
    }
}

/// Start and end of the UTC day containing `now`.
fn today_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let today = now.date_naive();
    let start = today.and_hms_opt(0, 0, 0).unwrap_or_default();
    let end = today.and_hms_opt(23, 59, 59).unwrap_or_default();
    (
        DateTime::from_naive_utc_and_offset(start, Utc),
        DateTime::from_naive_utc_and_offset(end, Utc),
    )
}

/// Convert a database row to a `SessionRecord`.
fn row_to_record(row: &Row<'_>) -> Result<SessionRecord, rusqlite::Error> {
    let id: i64 = row.get(0)?;
    let started_at_str: String = row.get(1)?;
    let duration_min: u32 = row.get(2)?;
    let kind_str: String = row.get(3)?;
    let created_at_str: String = row.get(4)?;

    let started_at = DateTime::parse_from_rfc3339(&started_at_str)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    Ok(SessionRecord {
        id: Some(id),
        started_at,
        duration_min,
        kind: SessionKind::parse(&kind_str),
        created_at,
    })
}

// Add optional() extension for rusqlite
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalExt<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
