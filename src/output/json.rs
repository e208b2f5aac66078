//! JSON output formatting for pomo.

use serde::Serialize;
use serde_json::json;

use crate::error::PomoError;
use crate::sessions::SessionRecord;

/// Format sessions as JSON
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_sessions_json(records: &[SessionRecord]) -> Result<String, PomoError> {
    let output = json!({
        "count": records.len(),
        "items": records
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format today's totals as JSON
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_today_json(total_minutes: i64, session_count: i64) -> Result<String, PomoError> {
    let output = json!({
        "total_minutes": total_minutes,
        "session_count": session_count
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sessions::SessionKind;
    use chrono::Utc;

    fn make_record(duration: u32, kind: SessionKind) -> SessionRecord {
        SessionRecord {
            kind,
            ..SessionRecord::work(Utc::now(), duration)
        }
    }

    #[test]
    fn test_format_sessions_json_empty() {
        let records: Vec<SessionRecord> = vec![];
        let result = format_sessions_json(&records).unwrap();

        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_sessions_json_fields() {
        let records = vec![
            make_record(25, SessionKind::Work),
            make_record(5, SessionKind::Break),
        ];
        let result = format_sessions_json(&records).unwrap();

        assert!(result.contains("\"count\": 2"));
        assert!(result.contains("\"duration_min\": 25"));
        assert!(result.contains("\"kind\": \"work\""));
        assert!(result.contains("\"kind\": \"break\""));
    }

    #[test]
    fn test_format_today_json() {
        let result = format_today_json(75, 3).unwrap();

        assert!(result.contains("\"total_minutes\": 75"));
        assert!(result.contains("\"session_count\": 3"));
    }

    #[test]
    fn test_to_json_generic() {
        let record = make_record(25, SessionKind::Work);
        let result = to_json(&record).unwrap();

        assert!(result.contains("\"duration_min\": 25"));
        assert!(result.contains("\"started_at\""));
    }
}
