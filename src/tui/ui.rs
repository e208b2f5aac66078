//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Tabs},
    Frame,
};

use crate::engine::notify::NoticeLevel;
use crate::engine::phase::Phase;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: phase tabs, countdown, panels, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Phase tabs
            Constraint::Length(7), // Countdown + progress
            Constraint::Min(0),    // Today summary + recent sessions
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_phase_tabs(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_panels(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

/// Render the phase selector tabs.
fn render_phase_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let titles: Vec<Line<'_>> = Phase::all()
        .iter()
        .enumerate()
        .map(|(i, phase)| Line::from(format!(" {}:{} ", i + 1, phase.display_name())))
        .collect();

    let selected = Phase::all()
        .iter()
        .position(|p| *p == app.engine.phase())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(phase_color(app.engine.phase()))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 🍅 pomo ")
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(tabs, area);
}

/// Render the countdown clock and progress gauge.
fn render_countdown(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(3)])
        .split(area);

    let color = phase_color(app.engine.phase());
    let state_label = if app.engine.is_running() {
        "running"
    } else {
        "paused"
    };

    let clock = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            app.engine.format_remaining(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state_label,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(clock, chunks[0]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(app.engine.progress().clamp(0.0, 1.0))
        .label(format!(
            "{} min {}",
            app.engine.durations().minutes_for(app.engine.phase()),
            app.engine.phase().display_name().to_lowercase(),
        ));

    frame.render_widget(gauge, chunks[1]);
}

/// Render the today summary and recent session panels.
fn render_panels(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_today(frame, app, chunks[0]);
    render_recent(frame, app, chunks[1]);
}

/// Render today's focus totals.
fn render_today(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hours = app.today_minutes / 60;
    let minutes = app.today_minutes % 60;
    let total = if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    };

    let sessions = if app.today_count == 1 {
        "1 session".to_string()
    } else {
        format!("{} sessions", app.today_count)
    };

    let summary = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            total,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sessions, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Today ")
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(summary, area);
}

/// Render the recent session list.
fn render_recent(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .recent
        .iter()
        .map(|record| {
            let local = record.started_at_local();
            let spans = vec![
                Span::styled(
                    local.format("%m-%d %H:%M").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{:>3} min", record.duration_min),
                    Style::default().fg(Color::White),
                ),
                Span::raw("  "),
                Span::styled(
                    record.kind.as_str().to_string(),
                    Style::default().fg(Color::Blue),
                ),
            ];
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recent ")
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(list, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status = app.status.as_ref().map_or_else(
        || {
            Paragraph::new("space:start/pause | r:reset | 1/2/3:phase | c:quick-complete | q:quit")
                .style(Style::default().fg(Color::DarkGray))
        },
        |notice| {
            let color = match notice.level {
                NoticeLevel::Success => Color::Green,
                NoticeLevel::Info => Color::Cyan,
                NoticeLevel::Error => Color::Red,
            };
            Paragraph::new(notice.message.clone()).style(Style::default().fg(color))
        },
    );

    frame.render_widget(status, area);
}

const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Work => Color::Red,
        Phase::ShortBreak => Color::Green,
        Phase::LongBreak => Color::Cyan,
    }
}
