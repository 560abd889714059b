//! Embedded static pages.
//!
//! The landing and form pages are compiled into the binary from `static/`
//! and served with the MIME type guessed from the file path. Unmatched
//! routes fall back to the landing page.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");

/// Serves one named file from the embedded static directory.
pub fn embedded(file_path: &str) -> HttpResponse {
    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

/// Default service: a static asset when one matches the request path, the
/// landing page otherwise.
pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(_) => embedded(file_path),
        None => embedded("index.html"),
    }
}
