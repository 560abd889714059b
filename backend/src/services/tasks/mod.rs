//! # Task List Service
//!
//! Endpoints for the plain to-do list, grouped under `/assignment`. Listing
//! returns the tasks as JSON; form posts answer with a redirect back to the
//! list, mirroring the classic post/redirect flow.

mod create;
mod delete;
mod list;
mod update;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/assignment";

/// Configures and returns the Actix `Scope` for the task routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: all tasks as JSON, oldest first.
/// *   **`POST /`**: creates a task from the submitted form content and
///     redirects back to the list. Empty content is rejected.
/// *   **`GET /update/{id}`**: the current task as JSON, for form prefill.
/// *   **`POST /update/{id}`**: overwrites the task content and redirects.
/// *   **`GET /delete/{id}`**: removes the task and redirects.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/", get().to(list::process))
        .route("/", post().to(create::process))
        .route("/update/{id}", get().to(update::show))
        .route("/update/{id}", post().to(update::process))
        .route("/delete/{id}", get().to(delete::process))
}
