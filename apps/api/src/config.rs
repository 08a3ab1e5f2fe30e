use anyhow::{Context, Result};

const DEFAULT_MAX_MANUSCRIPT_BYTES: usize = 8 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on the manuscript accepted by the paginate endpoint.
    pub max_manuscript_bytes: usize,
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
            max_manuscript_bytes: match std::env::var("MAX_MANUSCRIPT_BYTES") {
                Ok(raw) => raw.parse::<usize>().with_context(|| {
                    format!("MAX_MANUSCRIPT_BYTES must be a byte count, got '{raw}'")
                })?,
                Err(_) => DEFAULT_MAX_MANUSCRIPT_BYTES,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_manuscript_bytes: DEFAULT_MAX_MANUSCRIPT_BYTES,
        }
    }
}
