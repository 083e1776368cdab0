use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_SESSION_DIR: &str = ".macc-session";

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub session_dir: PathBuf,
}

impl Config {
    /// Load `.env.{RUST_ENV}` first, then fall back to `.env`, then read the
    /// environment. Missing variables fall back to local-development defaults.
    pub fn from_env() -> Self {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env_name);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let session_dir = env::var("SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_DIR));

        Self {
            api_base_url,
            session_dir,
        }
    }
}
