use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{Cli, Commands};
use pomo::cli::commands;
use pomo::error::PomoError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomoError> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command {
        Commands::Timer => {
            commands::timer()?;
            String::new()
        }
        Commands::Log(args) => commands::log(&args, format)?,
        Commands::History { limit } => commands::history(limit, format)?,
        Commands::Today => commands::today(format)?,
        Commands::Config(args) => commands::config(&args.command, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
