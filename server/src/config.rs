//! Environment-based server configuration
//!
//! Provider credentials and endpoints are loaded from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over `.env` file values.
//!
//! ## Required Keys
//! - `GOOGLE_API_KEY`: Gemini API access key for article generation
//! - `DEVTO_API_KEY`: dev.to (Forem) API key for publishing
//!
//! ## Optional Keys
//! - `GEMINI_MODEL`: model identifier (default `gemini-1.5-pro`)
//! - `GENERATION_BASE_URL`: generation endpoint base, overridable for tests
//! - `DEVTO_BASE_URL`: publishing endpoint base, overridable for tests

use crate::error::{ServerError, ServerResult};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_GENERATION_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_PUBLISH_BASE_URL: &str = "https://dev.to";

/// Generation provider configuration
#[derive(Clone, Debug)]
pub struct GenerationSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

/// Publishing provider configuration
#[derive(Clone, Debug)]
pub struct PublishingSettings {
    pub api_key: String,
    pub base_url: String,
}

/// Complete server configuration
#[derive(Clone, Debug)]
pub struct Settings {
    pub generation: GenerationSettings,
    pub publishing: PublishingSettings,
}

impl Settings {
    /// Load configuration from the environment
    ///
    /// Safe to call multiple times: dotenvy ignores already-set variables.
    /// No validation beyond presence is applied to key values.
    pub fn from_env() -> ServerResult<Self> {
        // Silently ignored when no .env file exists
        let _ = dotenvy::dotenv();

        let generation = GenerationSettings {
            api_key: required_var("GOOGLE_API_KEY")?,
            model: optional_var("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            base_url: optional_var("GENERATION_BASE_URL", DEFAULT_GENERATION_BASE_URL),
        };

        let publishing = PublishingSettings {
            api_key: required_var("DEVTO_API_KEY")?,
            base_url: optional_var("DEVTO_BASE_URL", DEFAULT_PUBLISH_BASE_URL),
        };

        Ok(Settings { generation, publishing })
    }
}

fn required_var(key: &str) -> ServerResult<String> {
    std::env::var(key).map_err(|_| ServerError::MissingEnv { key: key.to_string() })
}

fn optional_var(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
