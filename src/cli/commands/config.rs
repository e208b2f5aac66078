//! Configuration commands.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::engine::{MAX_MINUTES, MIN_MINUTES};
use crate::error::PomoError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written.
pub fn config(cmd: &ConfigCommands, format: OutputFormat) -> Result<String, PomoError> {
    match cmd {
        ConfigCommands::Show => show(format),
        ConfigCommands::Set {
            work,
            short_break,
            long_break,
        } => set(*work, *short_break, *long_break, format),
    }
}

/// Show the current configuration.
fn show(format: OutputFormat) -> Result<String, PomoError> {
    let config = Config::load()?;

    match format {
        OutputFormat::Json => to_json(&config),
        OutputFormat::Pretty => {
            let timer = &config.timer;
            let mut output = Vec::new();
            output.push("⚙️  Timer Durations".bold().to_string());
            output.push(format!("   Work:        {} min", timer.work_minutes));
            output.push(format!("   Short break: {} min", timer.short_break_minutes));
            output.push(format!("   Long break:  {} min", timer.long_break_minutes));
            Ok(output.join("\n"))
        }
    }
}

/// Update phase durations, clamping into the valid range.
fn set(
    work: Option<u32>,
    short_break: Option<u32>,
    long_break: Option<u32>,
    format: OutputFormat,
) -> Result<String, PomoError> {
    if work.is_none() && short_break.is_none() && long_break.is_none() {
        return Err(PomoError::Config(
            "Nothing to change. Pass --work, --short-break, or --long-break.".to_string(),
        ));
    }

    let mut config = Config::load()?;

    if let Some(minutes) = work {
        config.timer.work_minutes = minutes.clamp(MIN_MINUTES, MAX_MINUTES);
    }
    if let Some(minutes) = short_break {
        config.timer.short_break_minutes = minutes.clamp(MIN_MINUTES, MAX_MINUTES);
    }
    if let Some(minutes) = long_break {
        config.timer.long_break_minutes = minutes.clamp(MIN_MINUTES, MAX_MINUTES);
    }

    config.save()?;
    show(format)
}
