use crate::db::books;
use crate::error::AppError;
use crate::services::see_other_with_notice;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use log::info;

/// `GET`/`POST /project/delete/{id}/` — removes the row unconditionally and
/// redirects with a notice, 404 when the id matches nothing. The cover file,
/// if any, stays in the upload directory.
pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let conn = state.db()?;
    if !books::delete(&conn, id)? {
        return Err(AppError::NotFound);
    }
    info!("deleted book {}", id);

    Ok(see_other_with_notice(
        "/project/books/",
        &state.config.secret_key,
        "Book deleted!",
    ))
}
