//! Output formatting for pomo.
//!
//! This module provides formatters for displaying session data in pretty
//! (colored, human-readable) and JSON forms.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::PomoError;
use crate::sessions::SessionRecord;

pub use json::*;
pub use pretty::*;

/// Format a list of sessions based on output format.
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_sessions(
    records: &[SessionRecord],
    format: OutputFormat,
) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_sessions_pretty(records)),
        OutputFormat::Json => format_sessions_json(records),
    }
}

/// Format today's totals based on output format.
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_today_total(
    total_minutes: i64,
    session_count: i64,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_today_pretty(total_minutes, session_count)),
        OutputFormat::Json => format_today_json(total_minutes, session_count),
    }
}
