use crate::db::tasks;
use crate::error::AppError;
use crate::services::see_other;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use log::info;

/// `GET /assignment/delete/{id}` — removes the task and redirects back to
/// the list, 404 when the id matches nothing.
pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let conn = state.db()?;
    if !tasks::delete(&conn, id)? {
        return Err(AppError::NotFound);
    }
    info!("deleted task {}", id);
    Ok(see_other("/assignment/"))
}
