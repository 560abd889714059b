use crate::db::tasks;
use crate::error::AppError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// `GET /assignment/` — every task as JSON, creation time ascending.
pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let conn = state.db()?;
    let tasks = tasks::all(&conn)?;
    Ok(HttpResponse::Ok().json(tasks))
}
