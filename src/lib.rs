//! pomo - A Pomodoro timer and session tracker for the terminal
//!
//! This crate provides a countdown timer engine for the three Pomodoro
//! phases (work, short break, long break), persistent work session logging,
//! and an interactive terminal timer built with ratatui.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod sessions;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use engine::TimerEngine;
pub use error::PomoError;
