//! Request client: one logical model invocation with retry/backoff
//!
//! Wraps a TextGenerationPort and retries transient failures under an
//! exponential backoff policy. Free-text calls return the raw text;
//! schema-constrained calls parse, validate and decode the returned JSON,
//! treating any malformed attempt as retryable.

use crate::domain::schema::ResponseSchema;
use crate::error::{AppError, Result};
use crate::ports::llm::{GenerationRequest, TextGenerationPort};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Exponential backoff retry policy
///
/// Attempt 0 runs immediately; attempt i (i >= 1) waits `base_delay * 2^(i-1)`
/// first. The default of 5 attempts and a 1s base gives delays of 1s, 2s, 4s
/// and 8s before attempts 2-5.
#[derive(Debug, Clone)]
pub struct BackoffPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl BackoffPolicy {
    /// Create a policy; `max_attempts` is clamped to at least one
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Total number of attempts (initial call included)
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay to wait before the given 0-indexed attempt, `None` for the first
    pub fn delay_before(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 {
            None
        } else {
            let exponent = (attempt - 1).min(31);
            Some(self.base_delay.saturating_mul(1u32 << exponent))
        }
    }
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self::new(5, Duration::from_secs(1))
    }
}

/// Client performing one model invocation with retry/backoff
///
/// Pure function of its inputs plus the network: mutates no shared state, and
/// only ever returns success or a terminal `ExhaustedRetries` to its caller.
pub struct RequestClient {
    model: Arc<dyn TextGenerationPort>,
    backoff: BackoffPolicy,
}

impl RequestClient {
    pub fn new(model: Arc<dyn TextGenerationPort>, backoff: BackoffPolicy) -> Self {
        Self { model, backoff }
    }

    /// Invoke the model unconstrained and return its raw text
    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        let request = GenerationRequest::text(prompt);
        self.invoke(&request, Ok).await
    }

    /// Invoke the model with a response schema and decode the conforming JSON
    /// into `T`. Parse, validation and decode failures retry like any other
    /// unusable response.
    pub async fn generate_structured<T: DeserializeOwned>(
        &self,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> Result<T> {
        let request = GenerationRequest::structured(prompt, schema.clone());
        self.invoke(&request, |text| {
            let value: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
                AppError::MalformedOutput(format!("response is not valid JSON: {}", e))
            })?;
            schema.validate(&value)?;
            serde_json::from_value(value).map_err(|e| {
                AppError::MalformedOutput(format!("response does not match expected shape: {}", e))
            })
        })
        .await
    }

    async fn invoke<T>(
        &self,
        request: &GenerationRequest,
        decode: impl Fn(String) -> Result<T>,
    ) -> Result<T> {
        let mut last_error = None;

        for attempt in 0..self.backoff.max_attempts() {
            if let Some(delay) = self.backoff.delay_before(attempt) {
                tokio::time::sleep(delay).await;
            }

            match self.model.generate(request).await.and_then(&decode) {
                Ok(output) => {
                    if attempt > 0 {
                        log::info!("Request succeeded on attempt {}", attempt + 1);
                    }
                    return Ok(output);
                }
                Err(error) if error.is_retryable() => {
                    log::warn!(
                        "Attempt {}/{} failed: {}",
                        attempt + 1,
                        self.backoff.max_attempts(),
                        error
                    );
                    last_error = Some(error);
                }
                Err(error) => return Err(error),
            }
        }

        let attempts = self.backoff.max_attempts();
        let source = last_error.unwrap_or(AppError::EmptyPayload);
        Err(AppError::ExhaustedRetries {
            attempts,
            source: Box::new(source),
        })
    }
}
