//! Runtime configuration for embedding the customer core.
//!
//! # Responsibility
//! - Describe where customer data lives and how logging is routed.
//! - Open a migrated connection for the configured storage.
//!
//! # Invariants
//! - A configuration names exactly one storage location.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::logging::default_log_level;
use rusqlite::Connection;
use std::path::PathBuf;

/// Where customer records are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    /// SQLite database file, created on first open.
    File(PathBuf),
    /// Private in-memory database discarded with the connection.
    Memory,
}

/// Logging settings consumed by [`crate::logging::init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute directory for rolling log files; stderr when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

/// Top-level core configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub storage: StorageLocation,
    pub logging: LoggingConfig,
}

impl CoreConfig {
    /// In-memory storage with build-mode default logging.
    pub fn in_memory() -> Self {
        Self {
            storage: StorageLocation::Memory,
            logging: LoggingConfig::default(),
        }
    }

    /// File-backed storage with build-mode default logging.
    pub fn with_database(path: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageLocation::File(path.into()),
            logging: LoggingConfig::default(),
        }
    }

    /// Opens a migrated connection for the configured storage.
    pub fn open_connection(&self) -> DbResult<Connection> {
        match &self.storage {
            StorageLocation::File(path) => open_db(path),
            StorageLocation::Memory => open_db_in_memory(),
        }
    }
}
