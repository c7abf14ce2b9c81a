use std::env;

use anyhow::{Context, Result};

const DEFAULT_BASE_URL: &str = "https://api.the-odds-api.com/v4";
pub const DEFAULT_SPORT: &str = "mma_mixed_martial_arts";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret injected into every upstream call as `apiKey`
    pub odds_api_key: String,

    /// The Odds API base URL (no trailing slash)
    pub odds_api_base_url: String,

    /// Sport key used when a request does not name one
    pub default_sport: String,

    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            odds_api_key: env::var("ODDS_API_KEY").unwrap_or_default(),

            odds_api_base_url: env::var("ODDS_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),

            default_sport: env::var("DEFAULT_SPORT")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SPORT.to_string()),

            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "8787".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
