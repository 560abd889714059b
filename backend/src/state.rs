//! Shared application context.
//!
//! `AppState` is built once in `main.rs` and handed to every handler via
//! `web::Data`. It carries only immutable configuration; each operation opens
//! its own short-lived database connection, so no mutable state is shared
//! between requests.

use crate::config::AppConfig;
use crate::error::AppError;
use rusqlite::Connection;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> AppState {
        AppState { config }
    }

    /// Opens a connection to the configured database file.
    pub fn db(&self) -> Result<Connection, AppError> {
        Ok(Connection::open(&self.config.database_path)?)
    }
}
