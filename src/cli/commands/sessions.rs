//! Session commands: manual logging, history, and today's totals.

use chrono::{DateTime, Duration, Utc};
use colored::Colorize;
use std::rc::Rc;

use crate::cli::args::{LogArgs, OutputFormat};
use crate::error::PomoError;
use crate::output::{format_sessions, format_today_total, to_json};
use crate::sessions::{SessionLogger, SessionStorage, SqliteSessionLogger};

/// Record a completed work session manually.
///
/// # Errors
///
/// Returns an error if the start time cannot be parsed or the session
/// cannot be persisted.
pub fn log(args: &LogArgs, format: OutputFormat) -> Result<String, PomoError> {
    let started_at = match &args.at {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| PomoError::Parse(format!("Invalid start time '{raw}': {e}")))?,
        None => Utc::now() - Duration::minutes(i64::from(args.duration)),
    };

    let storage = Rc::new(SessionStorage::new()?);
    let logger = SqliteSessionLogger::new(storage);
    let record = logger.log_work_session(started_at, args.duration)?;

    match format {
        OutputFormat::Json => to_json(&record),
        OutputFormat::Pretty => Ok(format!(
            "{} {} minute work session logged.",
            "✅".green(),
            record.duration_min
        )),
    }
}

/// Show recent sessions.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub fn history(limit: usize, format: OutputFormat) -> Result<String, PomoError> {
    let storage = SessionStorage::new()?;
    let records = storage.recent(limit)?;
    format_sessions(&records, format)
}

/// Show total work time logged today.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub fn today(format: OutputFormat) -> Result<String, PomoError> {
    let storage = SessionStorage::new()?;
    let total = storage.today_total_minutes()?;
    let count = storage.today_count()?;
    format_today_total(total, count, format)
}
