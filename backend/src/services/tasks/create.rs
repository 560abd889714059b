use crate::db::tasks;
use crate::error::{AppError, FieldError};
use crate::services::see_other;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::TaskForm;
use log::info;

const MAX_CONTENT_LEN: usize = 200;

/// Checks a submitted content string before it reaches the database.
/// Whitespace-only input counts as empty.
pub(super) fn validate_content(content: &str) -> Result<String, AppError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(AppError::Validation(vec![FieldError::new(
            "content",
            "Task content is required.",
        )]));
    }
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(AppError::Validation(vec![FieldError::new(
            "content",
            "Task content must be at most 200 characters.",
        )]));
    }
    Ok(content.to_string())
}

/// `POST /assignment/` — creates a task from the form and redirects back to
/// the list.
pub async fn process(
    state: web::Data<AppState>,
    form: web::Form<TaskForm>,
) -> Result<HttpResponse, AppError> {
    let content = validate_content(&form.content)?;
    let conn = state.db()?;
    let id = tasks::insert(&conn, &content)?;
    info!("created task {}", id);
    Ok(see_other("/assignment/"))
}
