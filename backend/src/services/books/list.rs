use crate::db::books::{self, SortKey};
use crate::error::AppError;
use crate::services::notice;
use crate::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use common::requests::BookListQuery;
use serde_json::json;

/// `GET /project/books/?sort_by=` — the catalog as JSON, ordered by an
/// allowlisted column, plus any pending flash notice. A missing `sort_by`
/// sorts by title; an unknown one is a 400, never a column lookup.
pub async fn process(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<BookListQuery>,
) -> Result<HttpResponse, AppError> {
    let sort = match query.sort_by.as_deref() {
        Some(raw) => raw.parse::<SortKey>()?,
        None => SortKey::default(),
    };

    let conn = state.db()?;
    let books = books::sorted(&conn, sort)?;
    let notice = notice::take(&req, &state.config.secret_key);

    let mut response = HttpResponse::Ok();
    if notice.is_some() {
        response.cookie(notice::clear());
    }
    Ok(response.json(json!({
        "books": books,
        "sort_by": sort.column(),
        "notice": notice,
    })))
}
