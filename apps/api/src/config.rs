use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_BASE;
use crate::outreach::email_composer::CandidateProfile;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_api_base: String,
    pub candidate: CandidateProfile,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = CandidateProfile::default();

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            groq_api_base: optional_env("GROQ_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            candidate: CandidateProfile {
                name: optional_env("CANDIDATE_NAME").unwrap_or(defaults.name),
                background: optional_env("CANDIDATE_BACKGROUND").unwrap_or(defaults.background),
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
