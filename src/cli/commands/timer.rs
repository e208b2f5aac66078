//! Interactive timer command.

use crate::config::Config;
use crate::error::PomoError;
use crate::tui;

/// Open the full-screen interactive timer.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the terminal
/// UI fails to initialize or run.
pub fn timer() -> Result<(), PomoError> {
    let config = Config::load()?;
    tui::run(&config)
}
