//! Terminal user interface for the interactive timer.
//!
//! Hosts the timer engine: renders the countdown, owns the one-second
//! ticker, and shows today's totals and recent sessions, refreshing them
//! when the session-updated signal fires. Built with ratatui and
//! crossterm.

mod app;
mod event;
mod ui;

pub use app::App;
pub use event::Ticker;

use std::io;
use std::rc::Rc;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::PomoError;
use crate::sessions::SessionStorage;

/// Run the interactive timer.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or the session
/// store cannot be opened.
pub fn run(config: &Config) -> Result<(), PomoError> {
    let storage = Rc::new(SessionStorage::new()?);

    // Setup terminal
    enable_raw_mode().map_err(|e| PomoError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomoError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomoError::Config(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(config, storage)?;
    let result = run_app(&mut terminal, &mut app);
    app.teardown();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PomoError> {
    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomoError::Config(format!("Failed to draw frame: {e}")))?;

        event::handle_events(app)?;
        app.advance()?;

        if app.should_quit {
            return Ok(());
        }
    }
}
