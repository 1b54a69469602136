use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables.
///
/// Only the enhancement path needs it; layout and export run without any
/// environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // a missing .env is fine, the var may be exported

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Missing required environment variable '{key}'"))
}
