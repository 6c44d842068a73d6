//! Google Gemini adapter
//!
//! Implements the TextGenerationPort for Google's generateContent API.
//! Performs exactly one attempt per call; the request client owns retries.

use crate::error::{AppError, Result};
use crate::ports::llm::{GenerationRequest, LlmConfig, TextGenerationPort};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini generateContent implementation
pub struct GeminiModel {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GeminiModel {
    /// Create a new Gemini adapter with the given API key and config
    pub fn new(api_key: String, config: LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    fn build_body(&self, request: &GenerationRequest) -> GenerateContentRequest {
        let generation_config = Some(GenerationConfig {
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_tokens,
            response_mime_type: request.schema.as_ref().map(|_| "application/json"),
            response_schema: request.schema.as_ref().map(|s| s.to_request_value()),
        });

        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config,
        }
    }

    fn endpoint(&self) -> String {
        // Accept both "gemini-..." and "models/gemini-..." spellings
        let model_name = if self.config.model.starts_with("models/") {
            self.config.model.clone()
        } else {
            format!("models/{}", self.config.model)
        };
        format!("{}/{}:generateContent", GEMINI_API_BASE, model_name)
    }
}

#[async_trait]
impl TextGenerationPort for GeminiModel {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let body = self.build_body(request);

        log::info!(
            "Calling Gemini generateContent, model: {}, structured: {}",
            self.config.model,
            request.schema.is_some()
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", &self.api_key)])
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("generateContent request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Transport(format!(
                "generateContent failed with status {}: {}",
                status, error_text
            )));
        }

        let content_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to decode response: {}", e)))?;

        let text = content_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::EmptyPayload);
        }

        log::info!("Gemini completion successful, generated {} characters", text.len());
        Ok(text.to_string())
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::ResponseSchema;

    fn model(api_key: &str) -> GeminiModel {
        GeminiModel::new(api_key.to_string(), LlmConfig::default()).unwrap()
    }

    #[test]
    fn test_gemini_model_creation() {
        let service = model("test_api_key");
        assert_eq!(service.provider_name(), "gemini");
        assert!(service.is_configured());
    }

    #[test]
    fn test_gemini_model_not_configured() {
        let service = model("");
        assert!(!service.is_configured());
    }

    #[test]
    fn test_endpoint_accepts_both_model_spellings() {
        let service = model("k");
        assert!(service.endpoint().ends_with(
            "/models/gemini-2.5-flash-preview-09-2025:generateContent"
        ));

        let prefixed = GeminiModel::new(
            "k".to_string(),
            LlmConfig {
                model: "models/gemini-pro".to_string(),
                ..LlmConfig::default()
            },
        )
        .unwrap();
        assert!(prefixed.endpoint().ends_with("/models/gemini-pro:generateContent"));
    }

    #[test]
    fn test_free_text_body_omits_schema_directive() {
        let service = model("k");
        let body = service.build_body(&GenerationRequest::text("hello"));
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert!(value["generationConfig"].get("responseMimeType").is_none());
        assert!(value["generationConfig"].get("responseSchema").is_none());
    }

    #[test]
    fn test_structured_body_carries_schema_directive() {
        let service = model("k");
        let body = service.build_body(&GenerationRequest::structured(
            "summarize",
            ResponseSchema::extraction(),
        ));
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert_eq!(
            value["generationConfig"]["responseSchema"]["required"][0],
            "summary"
        );
    }
}
