//! Cover image storage and delivery.

use crate::error::AppError;
use crate::state::AppState;
use actix_files::NamedFile;
use actix_web::web;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Reduces a client-supplied filename to a safe basename: directory
/// components are stripped, anything outside `[A-Za-z0-9._-]` becomes `_`
/// and leading dots are dropped. Returns None when nothing usable is left.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Writes the uploaded bytes into the upload directory under the sanitized
/// name and returns that name. A same-name upload overwrites the previous
/// file; replaced covers are never deleted from disk.
pub fn store(upload_dir: &Path, raw_filename: &str, bytes: &[u8]) -> Result<String, AppError> {
    let filename = sanitize_filename(raw_filename)
        .ok_or_else(|| AppError::Input(format!("unusable cover filename: {}", raw_filename)))?;
    let path = upload_dir.join(&filename);
    let mut file = File::create(&path)?;
    file.write_all(bytes)?;
    info!("stored cover {} ({} bytes)", path.display(), bytes.len());
    Ok(filename)
}

/// Upload names are sanitized on the way in, but serving must not trust
/// that: anything that could climb out of the upload directory is refused.
fn is_traversal(filename: &str) -> bool {
    filename.contains("..") || filename.contains('/') || filename.contains('\\')
}

/// `GET /project/uploads/{filename}/` — streams a stored cover image.
pub async fn process(
    state: web::Data<AppState>,
    filename: web::Path<String>,
) -> Result<NamedFile, AppError> {
    let filename = filename.into_inner();
    if is_traversal(&filename) {
        return Err(AppError::Input(format!("invalid cover filename: {}", filename)));
    }

    let path = state.config.upload_dir.join(&filename);
    match NamedFile::open(path) {
        Ok(file) => Ok(file),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::NotFound),
        Err(e) => Err(AppError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_directory_components() {
        assert_eq!(
            sanitize_filename("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(
            sanitize_filename(r"C:\covers\dune.png").as_deref(),
            Some("dune.png")
        );
    }

    #[test]
    fn sanitize_replaces_unsafe_characters() {
        assert_eq!(
            sanitize_filename("my cover (1).png").as_deref(),
            Some("my_cover__1_.png")
        );
    }

    #[test]
    fn sanitize_drops_leading_dots() {
        assert_eq!(sanitize_filename("..hidden.png").as_deref(), Some("hidden.png"));
        assert_eq!(sanitize_filename(".."), None);
        assert_eq!(sanitize_filename(""), None);
    }

    #[test]
    fn traversal_names_are_detected() {
        assert!(is_traversal("../../etc/passwd"));
        assert!(is_traversal("a/../b.png"));
        assert!(is_traversal(r"..\..\boot.ini"));
        assert!(is_traversal("dir/file.png"));
        assert!(!is_traversal("dune.png"));
    }

    #[test]
    fn store_writes_under_the_sanitized_name() {
        let dir = tempfile::tempdir().unwrap();
        let name = store(dir.path(), "../dune cover.png", b"png-bytes").unwrap();
        assert_eq!(name, "dune_cover.png");
        assert_eq!(
            std::fs::read(dir.path().join(&name)).unwrap(),
            b"png-bytes".to_vec()
        );
        // No file may land outside the upload directory.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
