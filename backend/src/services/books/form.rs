//! Book submission form: multipart parsing and field validation.
//!
//! Every rule runs before anything is persisted and all failing fields are
//! reported together, so the client can surface per-field messages on the
//! form. A validation failure writes neither the row nor the cover file.

use crate::error::{AppError, FieldError};
use actix_multipart::Multipart;
use common::model::book::BookDraft;
use futures_util::StreamExt;
use regex::Regex;
use std::sync::OnceLock;

const MAX_FIELD_LEN: usize = 100;
const TITLE_PATTERN: &str = r"^[A-Za-z0-9 ,.'-]+$";
const AUTHOR_PATTERN: &str = r"^[A-Za-z .\-]+$";
const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

fn title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TITLE_PATTERN).expect("hard-coded pattern"))
}

fn author_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(AUTHOR_PATTERN).expect("hard-coded pattern"))
}

/// Raw field values as read from the multipart stream, before validation.
#[derive(Debug, Default)]
pub struct BookSubmission {
    pub title: Option<String>,
    pub author: Option<String>,
    pub rating: Option<String>,
    /// Original filename and bytes of the uploaded cover, if any.
    pub cover: Option<(String, Vec<u8>)>,
}

/// Reads every field of the book form out of the multipart payload.
///
/// The cover is buffered in memory rather than streamed to disk so that a
/// failing rule on a later field leaves no partial file behind.
pub async fn read_submission(mut payload: Multipart) -> Result<BookSubmission, AppError> {
    let mut submission = BookSubmission::default();

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()));

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk?);
        }

        match name.as_deref() {
            Some("title") => submission.title = Some(text_field(bytes)?),
            Some("author") => submission.author = Some(text_field(bytes)?),
            Some("rating") => submission.rating = Some(text_field(bytes)?),
            Some("cover") => {
                // A file input left empty still arrives as a part with an
                // empty filename and no bytes.
                if let Some(filename) = filename {
                    if !filename.is_empty() && !bytes.is_empty() {
                        submission.cover = Some((filename, bytes));
                    }
                }
            }
            _ => {}
        }
    }

    Ok(submission)
}

fn text_field(bytes: Vec<u8>) -> Result<String, AppError> {
    String::from_utf8(bytes).map_err(|_| AppError::Input("form field is not valid UTF-8".into()))
}

/// Applies the field rules and collects every failure.
pub fn validate(submission: &BookSubmission) -> Result<BookDraft, AppError> {
    let mut errors = Vec::new();

    let title = submission.title.as_deref().unwrap_or("").trim();
    if title.is_empty() {
        errors.push(FieldError::new("title", "Title is required."));
    } else if title.chars().count() > MAX_FIELD_LEN {
        errors.push(FieldError::new(
            "title",
            "Title must be between 1 and 100 characters.",
        ));
    } else if !title_re().is_match(title) {
        errors.push(FieldError::new("title", "Title contains invalid characters."));
    }

    let author = submission.author.as_deref().unwrap_or("").trim();
    if author.is_empty() {
        errors.push(FieldError::new("author", "Author is required."));
    } else if author.chars().count() > MAX_FIELD_LEN {
        errors.push(FieldError::new(
            "author",
            "Author must be between 1 and 100 characters.",
        ));
    } else if !author_re().is_match(author) {
        errors.push(FieldError::new(
            "author",
            "Author name contains invalid characters.",
        ));
    }

    let mut rating = 0.0;
    match submission.rating.as_deref().map(str::trim) {
        None | Some("") => errors.push(FieldError::new("rating", "Rating is required.")),
        Some(raw) => match raw.parse::<f64>() {
            // NaN fails the range check and lands in the error arm.
            Ok(value) if (0.0..=5.0).contains(&value) => rating = value,
            _ => errors.push(FieldError::new("rating", "Rating must be between 0 and 5.")),
        },
    }

    if let Some((filename, _)) = &submission.cover {
        if !has_allowed_extension(filename) {
            errors.push(FieldError::new(
                "cover",
                "Only JPG and PNG images are allowed.",
            ));
        }
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(BookDraft {
        title: title.to_string(),
        author: author.to_string(),
        rating,
        // Filled in by the handler once the file is stored.
        cover: None,
    })
}

/// Case-insensitive check of the final extension against the allowlist.
pub fn has_allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)))
        .unwrap_or(false)
}
