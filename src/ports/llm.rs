/// Text generation port trait
///
/// Defines the interface for remote generative-text services. An
/// implementation performs exactly one attempt over the wire; retrying is the
/// request client's job, so the seam stays mockable per attempt.
use crate::domain::schema::ResponseSchema;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One model invocation: a prompt plus an optional structured-output schema
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,

    /// When set, the remote model is instructed to emit JSON conforming to
    /// this shape. The returned text is still raw; parsing and validation
    /// happen in the request client.
    pub schema: Option<ResponseSchema>,
}

impl GenerationRequest {
    /// Free-text request
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            schema: None,
        }
    }

    /// Schema-constrained request
    pub fn structured(prompt: impl Into<String>, schema: ResponseSchema) -> Self {
        Self {
            prompt: prompt.into(),
            schema: Some(schema),
        }
    }
}

/// Configuration for generation requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model name (e.g., "gemini-2.5-flash-preview-09-2025")
    pub model: String,

    /// Temperature for generation (0.0 to 1.0)
    pub temperature: Option<f32>,

    /// Maximum tokens in response
    pub max_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash-preview-09-2025".to_string(),
            temperature: Some(0.3), // Lower temperature for more focused outputs
            max_tokens: Some(2000),
        }
    }
}

/// Port trait for generative-text services
#[async_trait]
pub trait TextGenerationPort: Send + Sync {
    /// Perform a single attempt against the remote model and return its raw
    /// text output. Must not retry internally.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
