//! Book repository and the sort-column allowlist.

use crate::error::AppError;
use common::model::book::{Book, BookDraft};
use rusqlite::{params, Connection, Row};
use std::str::FromStr;

/// Allowlisted sort columns for the book listing.
///
/// The `ORDER BY` fragment is always taken from this enum, never from the
/// raw query string, so an arbitrary `sort_by` value can pick nothing but
/// one of these three columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Title,
    Author,
    Rating,
}

impl SortKey {
    pub fn column(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Rating => "rating",
        }
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<SortKey, AppError> {
        match s {
            "title" => Ok(SortKey::Title),
            "author" => Ok(SortKey::Author),
            "rating" => Ok(SortKey::Rating),
            other => Err(AppError::Input(format!("unknown sort key: {}", other))),
        }
    }
}

fn row_to_book(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        rating: row.get(3)?,
        cover: row.get(4)?,
    })
}

/// Inserts a validated draft and returns the assigned id.
pub fn insert(conn: &Connection, draft: &BookDraft) -> Result<i64, AppError> {
    conn.execute(
        "INSERT INTO books (title, author, rating, cover) VALUES (?1, ?2, ?3, ?4)",
        params![draft.title, draft.author, draft.rating, draft.cover],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All books ordered by the allowlisted sort column, ascending.
pub fn sorted(conn: &Connection, key: SortKey) -> Result<Vec<Book>, AppError> {
    let sql = format!(
        "SELECT id, title, author, rating, cover FROM books ORDER BY {} ASC",
        key.column()
    );
    let mut stmt = conn.prepare(&sql)?;
    let books = stmt
        .query_map([], row_to_book)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(books)
}

pub fn get(conn: &Connection, id: i64) -> Result<Option<Book>, AppError> {
    let result = conn.query_row(
        "SELECT id, title, author, rating, cover FROM books WHERE id = ?1",
        params![id],
        row_to_book,
    );
    match result {
        Ok(book) => Ok(Some(book)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(AppError::Storage(e)),
    }
}

/// Overwrites every field of an existing book with the draft values.
/// Returns false when no row with that id exists.
pub fn update(conn: &Connection, id: i64, draft: &BookDraft) -> Result<bool, AppError> {
    let changed = conn.execute(
        "UPDATE books SET title = ?1, author = ?2, rating = ?3, cover = ?4 WHERE id = ?5",
        params![draft.title, draft.author, draft.rating, draft.cover, id],
    )?;
    Ok(changed > 0)
}

/// Removes a book row by id. The cover file, if any, is left in the upload
/// directory untouched.
pub fn delete(conn: &Connection, id: i64) -> Result<bool, AppError> {
    let changed = conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}

/// Title and rating of every book in natural query order, for the chart view.
pub fn chart_rows(conn: &Connection) -> Result<Vec<(String, f64)>, AppError> {
    let mut stmt = conn.prepare("SELECT title, rating FROM books")?;
    let rows = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_parses_known_columns() {
        assert_eq!("title".parse::<SortKey>().unwrap(), SortKey::Title);
        assert_eq!("author".parse::<SortKey>().unwrap(), SortKey::Author);
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::Rating);
    }

    #[test]
    fn sort_key_rejects_anything_else() {
        assert!("cover".parse::<SortKey>().is_err());
        assert!("id; DROP TABLE books".parse::<SortKey>().is_err());
        assert!("Title".parse::<SortKey>().is_err());
        assert!("".parse::<SortKey>().is_err());
    }
}
