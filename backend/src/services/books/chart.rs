use crate::db::books;
use crate::error::AppError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::Serialize;

/// Parallel title/rating sequences for the ratings chart.
#[derive(Serialize)]
struct ChartData {
    titles: Vec<String>,
    ratings: Vec<f64>,
}

/// `GET /project/chart/` — titles and ratings of every book in natural
/// query order.
pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let conn = state.db()?;
    let rows = books::chart_rows(&conn)?;

    let mut data = ChartData {
        titles: Vec::with_capacity(rows.len()),
        ratings: Vec::with_capacity(rows.len()),
    };
    for (title, rating) in rows {
        data.titles.push(title);
        data.ratings.push(rating);
    }

    Ok(HttpResponse::Ok().json(data))
}
