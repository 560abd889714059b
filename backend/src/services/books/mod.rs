//! # Book Catalog Service
//!
//! All endpoints of the book catalog, grouped under `/project`. Landing and
//! form pages come from the embedded static directory; data views are JSON
//! and form posts answer with a redirect plus a signed notice.

mod add;
mod chart;
mod cover;
mod delete;
mod edit;
mod form;
mod list;

use crate::pages;
use actix_web::web::{get, post, scope};
use actix_web::{HttpResponse, Scope};

const API_PATH: &str = "/project";

/// Configures and returns the Actix `Scope` for the catalog routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: project landing page.
/// *   **`GET /books/?sort_by=`**: sorted catalog listing as JSON. The sort
///     key must be one of `title`, `author`, `rating`.
/// *   **`GET /add/`**: the add-book form page.
/// *   **`POST /add/`**: multipart submission; validates, stores the cover
///     and inserts the record.
/// *   **`GET /edit/{id}/`**: current field values as JSON for prefill.
/// *   **`POST /edit/{id}/`**: validated update, optionally replacing the
///     cover reference.
/// *   **`GET|POST /delete/{id}/`**: removes the record.
/// *   **`GET /uploads/{filename}/`**: streams a stored cover image;
///     traversal attempts are refused outright.
/// *   **`GET /chart/`**: parallel titles/ratings arrays for the chart.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/", get().to(index_page))
        .route("/books/", get().to(list::process))
        .route("/add/", get().to(add_page))
        .route("/add/", post().to(add::process))
        .route("/edit/{id}/", get().to(edit::show))
        .route("/edit/{id}/", post().to(edit::process))
        .route("/delete/{id}/", get().to(delete::process))
        .route("/delete/{id}/", post().to(delete::process))
        .route("/uploads/{filename}/", get().to(cover::process))
        .route("/chart/", get().to(chart::process))
}

async fn index_page() -> HttpResponse {
    pages::embedded("project/index.html")
}

async fn add_page() -> HttpResponse {
    pages::embedded("project/add_book.html")
}
