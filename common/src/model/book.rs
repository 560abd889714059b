use serde::{Deserialize, Serialize};

/// A catalogued book as stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Reader rating, always within [0, 5].
    pub rating: f64,
    /// Filename of the uploaded cover image inside the upload directory,
    /// or `None` when the book was submitted without a cover.
    pub cover: Option<String>,
}

/// Field values of a book submission that already passed validation but has
/// no id yet. Inserts and updates both take a draft; the repository returns
/// the new row state instead of mutating anything in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub rating: f64,
    pub cover: Option<String>,
}
