//! Command implementations.

mod completions;
mod config;
mod sessions;
mod timer;

pub use completions::completions;
pub use config::config;
pub use sessions::{history, log, today};
pub use timer::timer;
