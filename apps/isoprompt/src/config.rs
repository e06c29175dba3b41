use crate::errors::{IsoPromptError, Result};

/// Environment variable holding the credential for the completion service.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Optional override for OpenAI-compatible endpoints.
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2000;
pub const MIN_TEMPERATURE: f64 = 0.0;
pub const MAX_TEMPERATURE: f64 = 2.0;

/// Models the validator accepts.
pub const SUPPORTED_MODELS: &[&str] = &[
    "gpt-4o-mini",
    "gpt-4o",
    "gpt-4.1",
    "gpt-4.1-mini",
    "gpt-4.1-nano",
    "gpt-4-turbo",
    "gpt-4",
    "gpt-3.5-turbo",
    "o3-mini",
    "o1-mini",
];

/// Runtime configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Reads the process environment. Does not touch `.env`; call
    /// [`load_dotenv`] once at startup for that.
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            api_key: require_env(API_KEY_VAR)?,
            base_url: std::env::var(BASE_URL_VAR)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

/// Loads `.env` from the working directory if present.
/// Returns whether a file was found; a missing file is not an error.
pub fn load_dotenv() -> bool {
    dotenvy::dotenv().is_ok()
}

fn require_env(key: &'static str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(IsoPromptError::MissingCredential(key))
}
