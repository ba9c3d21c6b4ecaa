use anyhow::{Context, Result};

/// Request bodies larger than this are rejected (16 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Fallback signing key for local development. Override with SECRET_KEY.
const DEFAULT_SECRET_KEY: &str = "portfolio-generator-secret-key";

/// Application configuration loaded from environment variables.
/// Built once at startup and handed to the router through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_body_bytes: usize,
    pub secret_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_body_bytes: optional_env("MAX_BODY_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_BODY_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
            secret_key: optional_env("SECRET_KEY")
                .unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string()),
        })
    }

    /// True when SECRET_KEY was not supplied and the development key is in use.
    pub fn uses_default_secret_key(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
