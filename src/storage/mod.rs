//! Storage layer for pomo.
//!
//! This module provides SQLite-based persistence for logged work and
//! break sessions.

mod database;
mod migrations;

pub use database::Database;
