//! Runtime configuration, read from the environment once at startup.

use log::warn;
use std::env;
use std::path::PathBuf;

/// Development fallback for the cookie-signing key. Anything deployed for
/// real must set `SECRET_KEY`.
const FALLBACK_SECRET_KEY: &str = "fallback_dev_key";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Key used to sign flash-notice cookies.
    pub secret_key: String,
    /// Path of the SQLite database file.
    pub database_path: PathBuf,
    /// Directory holding uploaded cover images.
    pub upload_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads `SECRET_KEY`, `DATABASE_PATH`, `UPLOAD_DIR`, `BIND_ADDR` and
    /// `PORT`, falling back to development defaults for anything unset.
    pub fn from_env() -> AppConfig {
        let secret_key = match env::var("SECRET_KEY") {
            Ok(key) if !key.is_empty() => key,
            _ => {
                warn!("SECRET_KEY is not set, using the insecure development fallback");
                FALLBACK_SECRET_KEY.to_string()
            }
        };

        AppConfig {
            secret_key,
            database_path: env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("books.sqlite")),
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static/uploads")),
            host: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}
