//! Mock implementations for testing

use crate::error::{AppError, Result};
use crate::ports::llm::{GenerationRequest, TextGenerationPort};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Scripted mock model for testing the request layer
///
/// Plays back a queue of per-attempt outcomes and records every request it
/// receives. An optional gate holds calls in flight until the test releases
/// them, which lets tests observe Pending/busy states deterministically.
#[derive(Clone, Default)]
pub struct MockModel {
    script: Arc<Mutex<VecDeque<Result<String>>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
    gate: Option<Arc<Notify>>,
}

impl MockModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock whose calls block until `gate.notify_one()` is called once per
    /// in-flight request
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    /// Queue a successful attempt returning `text`
    pub fn push_ok(&self, text: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(text.into()));
    }

    /// Queue a failing attempt
    pub fn push_err(&self, error: AppError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// Number of attempts the mock has served
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Prompts of all served attempts, in order
    pub fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.prompt.clone())
            .collect()
    }

    /// Whether the most recent request carried a schema directive
    pub fn last_request_was_structured(&self) -> Option<bool> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map(|r| r.schema.is_some())
    }
}

#[async_trait]
impl TextGenerationPort for MockModel {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Transport("mock script exhausted".to_string())))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        true
    }
}
