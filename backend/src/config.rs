use std::env;
use std::path::PathBuf;

/// Runtime configuration, resolved once at startup and handed to handlers
/// through `web::Data` so nothing reads the environment mid-request.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
    /// Version tag embedded in cache bucket names. Bumping it is the sole
    /// mechanism that forces old cached data to be discarded on activation.
    pub cache_version: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("SGM_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SGM_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let db_path = env::var("SGM_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("sgm.sqlite"));
        let cache_version = env::var("SGM_CACHE_VERSION")
            .unwrap_or_else(|_| format!("v{}", env!("CARGO_PKG_VERSION")));

        AppConfig {
            host,
            port,
            db_path,
            cache_version,
        }
    }
}
