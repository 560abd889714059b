//! HTTP services, one module per feature area.
//!
//! - `tasks`: the to-do list under `/assignment`.
//! - `books`: the book catalog under `/project`.
//! - `notice`: signed flash cookies carried across post/redirect cycles.

pub mod books;
pub mod notice;
pub mod tasks;

use actix_web::http::header;
use actix_web::HttpResponse;

/// Plain redirect after a successful mutation.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

/// Redirect carrying a signed confirmation notice for the next page view.
pub(crate) fn see_other_with_notice(location: &str, secret: &str, message: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .cookie(notice::set(secret, message))
        .finish()
}
