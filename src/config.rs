use anyhow::Result;

/// Default number of search results requested per pool build
pub const DEFAULT_MAX_CANDIDATES: u32 = 25;

const DEFAULT_MOOD_API_BASE: &str = "http://127.0.0.1:8000";

/// Configuration loaded from environment variables
#[derive(Debug)]
pub struct Config {
    pub api_key: String,
    pub access_token: String,
    pub mood_api_base: String,
    pub max_candidates: u32,
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    // Read variables
    let api_key = std::env::var("YOUTUBE_API_KEY")?;
    let access_token = std::env::var("YOUTUBE_ACCESS_TOKEN")?;
    let mood_api_base =
        std::env::var("MOOD_API_BASE").unwrap_or_else(|_| DEFAULT_MOOD_API_BASE.to_string());
    let max_candidates = std::env::var("MAX_CANDIDATES")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_MAX_CANDIDATES);
    Ok(Config {
        api_key,
        access_token,
        mood_api_base,
        max_candidates,
    })
}
