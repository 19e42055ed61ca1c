use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Process-wide configuration, read once at startup. Missing provider
/// credentials are fatal here rather than surfacing per-request.
#[derive(Debug, Clone)]
pub struct Config {
    pub tavily_api_key: String,
    pub openai_api_key: String,
    pub allowed_origins: Vec<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load .env file if present

        Ok(Self {
            tavily_api_key: env::var("TAVILY_API_KEY").context("TAVILY_API_KEY must be set")?,
            openai_api_key: env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a number")?,
        })
    }
}
