use crate::db::tasks;
use crate::error::AppError;
use crate::services::see_other;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::TaskForm;
use log::info;

/// `GET /assignment/update/{id}` — the task as JSON for form prefill,
/// 404 when the id matches nothing.
pub async fn show(state: web::Data<AppState>, id: web::Path<i64>) -> Result<HttpResponse, AppError> {
    let conn = state.db()?;
    match tasks::get(&conn, id.into_inner())? {
        Some(task) => Ok(HttpResponse::Ok().json(task)),
        None => Err(AppError::NotFound),
    }
}

/// `POST /assignment/update/{id}` — overwrites the content of an existing
/// task and redirects back to the list.
pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    form: web::Form<TaskForm>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let content = super::create::validate_content(&form.content)?;
    let conn = state.db()?;
    if !tasks::set_content(&conn, id, &content)? {
        return Err(AppError::NotFound);
    }
    info!("updated task {}", id);
    Ok(see_other("/assignment/"))
}
