//! Session record types.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Kind of logged session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    /// A focused work block.
    Work,
    /// A break block.
    Break,
}

impl SessionKind {
    /// Stable string form used for storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Break => "break",
        }
    }

    /// Parse from the stored string form; unknown values default to work.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "break" => Self::Break,
            _ => Self::Work,
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A logged session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// Session length in minutes
    pub duration_min: u32,
    /// Work or break
    pub kind: SessionKind,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Create an unpersisted work session record.
    #[must_use]
    pub fn work(started_at: DateTime<Utc>, duration_min: u32) -> Self {
        Self {
            id: None,
            started_at,
            duration_min,
            kind: SessionKind::Work,
            created_at: Utc::now(),
        }
    }

    /// Get start time in local timezone.
    #[must_use]
    pub fn started_at_local(&self) -> DateTime<Local> {
        self.started_at.with_timezone(&Local)
    }
}
