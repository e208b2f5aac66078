//! Pretty (colored, human-readable) output formatting for pomo.

use colored::Colorize;

use crate::sessions::{SessionKind, SessionRecord};

/// Format a list of sessions as a pretty table
#[must_use]
pub fn format_sessions_pretty(records: &[SessionRecord]) -> String {
    if records.is_empty() {
        return "No sessions logged yet.\n\nStart one with: pomo timer".to_string();
    }

    let mut output = Vec::new();
    output.push("🍅 Session History".bold().to_string());
    output.push("─".repeat(50));

    output.push(format!(
        "{:<12} {:<7} {:<10} {:<6}",
        "Date", "Start", "Duration", "Kind"
    ));
    output.push("─".repeat(50));

    for record in records {
        let local = record.started_at_local();
        let date = local.format("%Y-%m-%d").to_string();
        let start = local.format("%H:%M").to_string();
        let duration = format!("{}m", record.duration_min);
        let kind = match record.kind {
            SessionKind::Work => "work".green().to_string(),
            SessionKind::Break => "break".cyan().to_string(),
        };

        output.push(format!("{date:<12} {start:<7} {duration:<10} {kind}"));
    }

    output.join("\n")
}

/// Format today's totals as a summary line
#[must_use]
pub fn format_today_pretty(total_minutes: i64, session_count: i64) -> String {
    if session_count == 0 {
        return "No work logged today.\n\nStart a session with: pomo timer".to_string();
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let time = if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    };

    let sessions = if session_count == 1 {
        "1 session".to_string()
    } else {
        format!("{session_count} sessions")
    };

    format!(
        "🍅 Today: {} across {}",
        time.bold().green(),
        sessions
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_sessions_pretty_empty() {
        let result = format_sessions_pretty(&[]);
        assert!(result.contains("No sessions logged yet"));
    }

    #[test]
    fn test_format_sessions_pretty_table() {
        let records = vec![SessionRecord::work(Utc::now(), 25)];
        let result = format_sessions_pretty(&records);

        assert!(result.contains("Session History"));
        assert!(result.contains("25m"));
    }

    #[test]
    fn test_format_today_pretty_empty() {
        let result = format_today_pretty(0, 0);
        assert!(result.contains("No work logged today"));
    }

    #[test]
    fn test_format_today_pretty_minutes_only() {
        let result = format_today_pretty(50, 2);
        assert!(result.contains("50m"));
        assert!(result.contains("2 sessions"));
    }

    #[test]
    fn test_format_today_pretty_with_hours() {
        let result = format_today_pretty(125, 5);
        assert!(result.contains("2h 5m"));
    }

    #[test]
    fn test_format_today_pretty_singular() {
        let result = format_today_pretty(25, 1);
        assert!(result.contains("1 session"));
        assert!(!result.contains("1 sessions"));
    }
}
