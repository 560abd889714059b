use super::{cover, form};
use crate::db::books;
use crate::error::AppError;
use crate::services::see_other_with_notice;
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use log::info;

/// `POST /project/add/` — validates the multipart submission, stores the
/// cover if one was sent, inserts the row and redirects to the listing with
/// a confirmation notice. Nothing is persisted when validation fails.
pub async fn process(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let submission = form::read_submission(payload).await?;
    let mut draft = form::validate(&submission)?;

    if let Some((filename, bytes)) = &submission.cover {
        draft.cover = Some(cover::store(&state.config.upload_dir, filename, bytes)?);
    }

    let conn = state.db()?;
    let id = books::insert(&conn, &draft)?;
    info!("created book {} ({})", id, draft.title);

    Ok(see_other_with_notice(
        "/project/books/",
        &state.config.secret_key,
        "Book added!",
    ))
}
