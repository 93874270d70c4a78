use anyhow::{Context, Result};

/// Default chat-completion endpoint when `AI_GATEWAY_URL` is not set.
pub const DEFAULT_AI_GATEWAY_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Application configuration loaded from environment variables.
///
/// Credentials are optional at startup. A missing AI key or database URL is
/// reported as a configuration error on the first request that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub ai_gateway_url: String,
    pub ai_gateway_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            ai_gateway_url: optional_env("AI_GATEWAY_URL")
                .unwrap_or_else(|| DEFAULT_AI_GATEWAY_URL.to_string()),
            ai_gateway_api_key: optional_env("AI_GATEWAY_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
