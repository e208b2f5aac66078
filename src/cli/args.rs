use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro timer and session tracker for the terminal")]
#[command(long_about = "pomo - A Pomodoro timer for the terminal

Run focused work sessions with the classic Pomodoro phases (25 minute
work blocks, 5 minute short breaks, 15 minute long breaks), log completed
sessions locally, and review your history.

QUICK START:
  pomo timer                Open the interactive timer
  pomo today                Total work minutes logged today
  pomo history              Recent sessions
  pomo log --duration 25    Record a session finished off-screen

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pomo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer
    ///
    /// Runs the full-screen countdown timer. Key bindings:
    ///
    ///   space    start / pause
    ///   r        reset the current phase
    ///   1/2/3    switch to work / short break / long break
    ///   c        quick-complete the current work session
    ///   q, Esc   quit
    ///
    /// Completed work sessions are logged automatically; finishing a
    /// work countdown moves straight into a short break.
    #[command(alias = "t")]
    Timer,

    /// Record a completed work session manually
    ///
    /// For sessions finished away from the timer, e.g. with a physical
    /// kitchen timer.
    ///
    /// Examples:
    ///   pomo log
    ///   pomo log --duration 50
    ///   pomo log --duration 25 --at 2024-03-01T09:00:00Z
    Log(LogArgs),

    /// View session history
    ///
    /// Shows recent sessions, newest first.
    #[command(alias = "h")]
    History {
        /// Number of sessions to show
        #[arg(long, short = 'n', default_value = "10")]
        limit: usize,
    },

    /// Show total work time logged today
    Today,

    /// View or change configuration
    Config(ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Example:
    ///   pomo completions zsh > ~/.zsh/completions/_pomo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for manual session logging.
#[derive(Args)]
pub struct LogArgs {
    /// Session length in minutes
    #[arg(long, short = 'd', default_value = "25", value_parser = clap::value_parser!(u32).range(1..=180))]
    pub duration: u32,

    /// When the session started (RFC 3339; defaults to duration minutes ago)
    #[arg(long)]
    pub at: Option<String>,
}

/// Configuration arguments.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,

    /// Change phase durations
    ///
    /// Durations are whole minutes between 1 and 60; out-of-range values
    /// are clamped rather than rejected.
    ///
    /// Examples:
    ///   pomo config set --work 50
    ///   pomo config set --short-break 10 --long-break 20
    Set {
        /// Work phase duration in minutes
        #[arg(long)]
        work: Option<u32>,

        /// Short break duration in minutes
        #[arg(long)]
        short_break: Option<u32>,

        /// Long break duration in minutes
        #[arg(long)]
        long_break: Option<u32>,
    },
}
