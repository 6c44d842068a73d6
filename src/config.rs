//! Runtime configuration
//!
//! The remote credential is supplied out of band through the environment and
//! treated as an opaque constant; the request layer never manages or rotates
//! it.

use crate::error::{AppError, Result};
use crate::ports::llm::LlmConfig;

/// Environment variable carrying the API credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable optionally overriding the model name
pub const MODEL_ENV: &str = "MEETING_RECAP_MODEL";

/// Static configuration for the request layer
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
}

impl AppConfig {
    /// Read configuration from the environment
    ///
    /// `GEMINI_API_KEY` is required; `MEETING_RECAP_MODEL` falls back to the
    /// default model when unset.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::Config(format!("{} is not set", API_KEY_ENV))
            })?;

        let model = std::env::var(MODEL_ENV)
            .ok()
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| LlmConfig::default().model);

        Ok(Self { api_key, model })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_a_config_error() {
        // Runs in its own process-wide env; use the absence of the variable
        std::env::remove_var(API_KEY_ENV);
        let error = AppConfig::from_env().unwrap_err();
        assert!(matches!(error, AppError::Config(_)));
        assert!(error.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_model_defaults_when_unset() {
        assert_eq!(
            LlmConfig::default().model,
            "gemini-2.5-flash-preview-09-2025"
        );
    }
}
