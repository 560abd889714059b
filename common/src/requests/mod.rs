use serde::Deserialize;

#[derive(Deserialize)]
/// Form payload for creating a task or overwriting its content.
pub struct TaskForm {
    pub content: String,
}

#[derive(Deserialize)]
/// Query parameters accepted by the book listing endpoint.
/// A missing `sort_by` falls back to sorting by title.
pub struct BookListQuery {
    pub sort_by: Option<String>,
}
