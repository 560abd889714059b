//! Task repository.

use crate::error::AppError;
use chrono::Utc;
use common::model::task::Task;
use rusqlite::{params, Connection, Row};

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        content: row.get(1)?,
        created_at: row.get(2)?,
    })
}

/// Inserts a new task stamped with the current time; returns its id.
pub fn insert(conn: &Connection, content: &str) -> Result<i64, AppError> {
    conn.execute(
        "INSERT INTO tasks (content, created_at) VALUES (?1, ?2)",
        params![content, Utc::now()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All tasks, oldest first. Timestamp ties fall back to insert order.
pub fn all(conn: &Connection) -> Result<Vec<Task>, AppError> {
    let mut stmt =
        conn.prepare("SELECT id, content, created_at FROM tasks ORDER BY created_at ASC, id ASC")?;
    let tasks = stmt
        .query_map([], row_to_task)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(tasks)
}

pub fn get(conn: &Connection, id: i64) -> Result<Option<Task>, AppError> {
    let result = conn.query_row(
        "SELECT id, content, created_at FROM tasks WHERE id = ?1",
        params![id],
        row_to_task,
    );
    match result {
        Ok(task) => Ok(Some(task)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(AppError::Storage(e)),
    }
}

/// Overwrites the content of an existing task. Returns false when no row
/// with that id exists; `created_at` is never touched.
pub fn set_content(conn: &Connection, id: i64, content: &str) -> Result<bool, AppError> {
    let changed = conn.execute(
        "UPDATE tasks SET content = ?1 WHERE id = ?2",
        params![content, id],
    )?;
    Ok(changed > 0)
}

/// Removes a task by id. Returns false when the id matched nothing.
pub fn delete(conn: &Connection, id: i64) -> Result<bool, AppError> {
    let changed = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}
