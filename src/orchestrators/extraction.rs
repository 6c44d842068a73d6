//! Extraction orchestrator
//!
//! Turns a transcript into a summary plus ordered action items via one
//! schema-constrained model call. At most one extraction is in flight at a
//! time; a second request while busy is refused, not queued.

use crate::client::RequestClient;
use crate::domain::models::{ActionItem, ExtractionResult};
use crate::domain::prompts::PromptTemplates;
use crate::domain::schema::ResponseSchema;
use crate::error::{AppError, Result};
use serde::Deserialize;
use std::sync::{Arc, Mutex};

/// Wire shape of a conforming extraction response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractionPayload {
    summary: String,
    action_items: Vec<ActionItem>,
}

#[derive(Default)]
struct ExtractionState {
    busy: bool,
    latest: Option<ExtractionResult>,
}

/// Orchestrates the transcript -> summary + action items flow
pub struct ExtractionOrchestrator {
    client: Arc<RequestClient>,
    state: Mutex<ExtractionState>,
}

impl ExtractionOrchestrator {
    pub fn new(client: Arc<RequestClient>) -> Self {
        Self {
            client,
            state: Mutex::new(ExtractionState::default()),
        }
    }

    /// Whether an extraction is currently in flight
    pub fn is_busy(&self) -> bool {
        self.state.lock().unwrap().busy
    }

    /// The most recent successful result, if any
    pub fn latest(&self) -> Option<ExtractionResult> {
        self.state.lock().unwrap().latest.clone()
    }

    /// Extract a summary and action items from the transcript
    ///
    /// Rejects an empty transcript and concurrent calls before issuing any
    /// network traffic. On success the stored result is replaced wholesale;
    /// on failure the prior result stays untouched and the busy flag is
    /// cleared either way.
    pub async fn extract(&self, transcript: &str) -> Result<ExtractionResult> {
        if transcript.trim().is_empty() {
            return Err(AppError::InvalidInput("transcript is empty".to_string()));
        }

        {
            let mut state = self.state.lock().unwrap();
            if state.busy {
                return Err(AppError::InvalidInput(
                    "an extraction is already in progress".to_string(),
                ));
            }
            state.busy = true;
        }

        log::info!("Starting extraction, transcript length: {}", transcript.len());

        let prompt = PromptTemplates::render_extraction(transcript);
        let outcome = self
            .client
            .generate_structured::<ExtractionPayload>(&prompt, &ResponseSchema::extraction())
            .await;

        let mut state = self.state.lock().unwrap();
        state.busy = false;

        match outcome {
            Ok(payload) => {
                let result = ExtractionResult::new(payload.summary, payload.action_items);
                log::info!(
                    "Extraction succeeded with {} action items",
                    result.action_items.len()
                );
                state.latest = Some(result.clone());
                Ok(result)
            }
            Err(error) => {
                log::error!("Extraction failed: {}", error);
                Err(error)
            }
        }
    }
}
