//! Work session records, logging, and persistence.
//!
//! A session record is the durable fact produced once per completed work
//! countdown: when it started, how many minutes it lasted, and whether it
//! was a work or break block.

pub mod logger;
pub mod record;
pub mod storage;

pub use logger::{SessionLogger, SqliteSessionLogger};
pub use record::{SessionKind, SessionRecord};
pub use storage::SessionStorage;
