//! Error taxonomy of the service.
//!
//! Every fallible path below the HTTP layer returns `AppError`; the single
//! mapping to a response status and body lives in the `ResponseError` impl
//! here. Storage and I/O details are logged but never leaked to the client.

use actix_multipart::MultipartError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// A single field-level validation failure, surfaced back to the form.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: &str) -> FieldError {
        FieldError {
            field,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Bad field input, user-correctable; all failing fields reported at once.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// A record id that matches no row.
    #[error("not found")]
    NotFound,

    /// Malformed request input outside of form fields: unknown sort keys,
    /// path-traversal attempts, unreadable multipart payloads.
    #[error("{0}")]
    Input(String),

    /// A failed database operation.
    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// A failed file operation in the upload directory.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> AppError {
        AppError::Input(format!("invalid multipart payload: {}", e))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Io(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(errors) => {
                HttpResponse::BadRequest().json(json!({ "errors": errors }))
            }
            AppError::Input(reason) => HttpResponse::BadRequest().body(format!("Error: {}", reason)),
            AppError::NotFound => HttpResponse::NotFound().body("Not Found"),
            AppError::Storage(e) => {
                error!("storage failure: {}", e);
                HttpResponse::ServiceUnavailable().body("There was an issue with the database")
            }
            AppError::Io(e) => {
                error!("file i/o failure: {}", e);
                HttpResponse::ServiceUnavailable().body("There was an issue handling the file")
            }
        }
    }
}
