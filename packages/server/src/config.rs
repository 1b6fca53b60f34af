use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub notion_token: String,
    pub notion_database_id: String,
    pub resend_api_key: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            notion_token: env::var("NOTION_TOKEN")
                .context("NOTION_TOKEN must be set")?,
            notion_database_id: env::var("NOTION_DATABASE_ID")
                .context("NOTION_DATABASE_ID must be set")?,
            resend_api_key: env::var("RESEND_API_KEY")
                .context("RESEND_API_KEY must be set")?,
        })
    }
}
