use std::env;
use std::path::PathBuf;

/// Runtime configuration, read once at startup and shared with the handlers
/// as `web::Data`.
#[derive(Clone)]
pub struct AppConfig {
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Directory backing the object store, served at `/storage`.
    pub storage_dir: PathBuf,
    /// Token expected on mutating routes. `None` means no mutation is ever
    /// authorized.
    pub admin_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            db_path: env::var("GUIDEHUB_DB")
                .unwrap_or_else(|_| "guidehub.sqlite".to_string())
                .into(),
            storage_dir: env::var("GUIDEHUB_STORAGE_DIR")
                .unwrap_or_else(|_| "storage".to_string())
                .into(),
            admin_token: env::var("GUIDEHUB_ADMIN_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
        }
    }
}
