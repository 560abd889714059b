//! SQLite persistence: schema setup plus one repository module per table.
//!
//! Handlers open a fresh connection per operation from the configured path
//! and every create/update/delete is a single implicit commit. There is no
//! pooling and no multi-statement transaction anywhere in the service.

pub mod books;
pub mod tasks;

use crate::error::AppError;
use log::info;
use rusqlite::Connection;
use std::path::Path;

const TABLE_SCHEMA: &str = r#"

CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS books (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    rating REAL NOT NULL,
    cover TEXT DEFAULT NULL
);

"#;

/// Creates the database file and both record tables if missing.
/// Safe to call on every startup.
pub fn init(path: &Path) -> Result<(), AppError> {
    let conn = Connection::open(path)?;
    conn.execute_batch(TABLE_SCHEMA)?;
    info!("database ready at {}", path.display());
    Ok(())
}
