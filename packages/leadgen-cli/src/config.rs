use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables.
///
/// API keys and the database URL are optional here; each subcommand
/// enforces what its mode needs before any work begins.
#[derive(Debug, Clone)]
pub struct Config {
    pub clay_api_key: Option<String>,
    pub instantly_api_key: Option<String>,
    pub database_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        // Load .env file if present (development)
        let _ = dotenv();

        Self {
            clay_api_key: env::var("CLAY_API_KEY").ok(),
            instantly_api_key: env::var("INSTANTLY_API_KEY").ok(),
            database_url: env::var("DATABASE_URL").ok(),
        }
    }

    pub fn require_clay_api_key(&self) -> Result<&str> {
        self.clay_api_key
            .as_deref()
            .context("CLAY_API_KEY must be set for live mode")
    }

    pub fn require_instantly_api_key(&self) -> Result<&str> {
        self.instantly_api_key
            .as_deref()
            .context("INSTANTLY_API_KEY must be set for live mode")
    }
}
