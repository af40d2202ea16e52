use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; a missing `.env` is not an error.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin, e.g. `http://localhost:8000`.
    pub api_base_url: String,
    /// Path of the durable client-state file (the localStorage analog).
    pub state_path: String,
    /// Per-request timeout. Generous because ML evaluation is slow.
    pub request_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: std::env::var("CLIENT_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            state_path: std::env::var("CLIENT_STATE_PATH")
                .unwrap_or_else(|_| ".client-state.json".to_string()),
            request_timeout_secs: std::env::var("CLIENT_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<u64>()
                .context("CLIENT_REQUEST_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: "http://localhost:8000".to_string(),
            state_path: ".client-state.json".to_string(),
            request_timeout_secs: 60,
            rust_log: "info".to_string(),
        }
    }
}
