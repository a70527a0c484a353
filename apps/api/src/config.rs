use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Every external credential is optional: a missing key degrades the feature
/// that needs it (video results, scoped course search, LLM reports) instead of
/// failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// YouTube Data API key. Absent → the video provider returns no results.
    pub youtube_api_key: Option<String>,
    /// Google Custom Search key. Both this and `google_cse_id` must be set
    /// for the tier-2 course search to be attempted.
    pub google_api_key: Option<String>,
    pub google_cse_id: Option<String>,
    /// Gemini API key. Absent → the report endpoint serves the static report.
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            youtube_api_key: optional_env("YOUTUBE_API_KEY"),
            google_api_key: optional_env("GOOGLE_API_KEY"),
            google_cse_id: optional_env("GOOGLE_CSE_ID"),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating unset and empty as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
