//! Error types for pomo.

use thiserror::Error;

/// Errors that can occur in pomo.
#[derive(Error, Debug)]
pub enum PomoError {
    /// Configuration error (bad config file, unresolvable paths, ...).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error from the session store.
    #[error("Database error: {0}")]
    Database(String),

    /// A requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Parse or serialization error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PomoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}

impl From<serde_yaml::Error> for PomoError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(format!("YAML error: {e}"))
    }
}
