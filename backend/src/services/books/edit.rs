use super::{cover, form};
use crate::db::books;
use crate::error::AppError;
use crate::services::see_other_with_notice;
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use log::info;

/// `GET /project/edit/{id}/` — current field values as JSON for form
/// prefill, 404 when the id matches nothing.
pub async fn show(state: web::Data<AppState>, id: web::Path<i64>) -> Result<HttpResponse, AppError> {
    let conn = state.db()?;
    match books::get(&conn, id.into_inner())? {
        Some(book) => Ok(HttpResponse::Ok().json(book)),
        None => Err(AppError::NotFound),
    }
}

/// `POST /project/edit/{id}/` — validated update of every field. A newly
/// uploaded cover replaces the stored reference; without one the existing
/// reference is kept. The old file stays in the upload directory either way.
pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let conn = state.db()?;
    let existing = books::get(&conn, id)?.ok_or(AppError::NotFound)?;

    let submission = form::read_submission(payload).await?;
    let mut draft = form::validate(&submission)?;
    draft.cover = match &submission.cover {
        Some((filename, bytes)) => Some(cover::store(&state.config.upload_dir, filename, bytes)?),
        None => existing.cover,
    };

    books::update(&conn, id, &draft)?;
    info!("updated book {}", id);

    Ok(see_other_with_notice(
        "/project/books/",
        &state.config.secret_key,
        "Book updated!",
    ))
}
