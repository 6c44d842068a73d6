//! Meeting assistant facade
//!
//! The surface the UI layer talks to: one shared request client behind both
//! orchestration flows. Extraction and drafting keep their own state; the
//! facade adds the one cross-cutting rule, that action-item indices are only
//! meaningful within one extraction result, so every successful extraction
//! drops all prior draft entries.

use crate::adapters::llm::GeminiModel;
use crate::client::{BackoffPolicy, RequestClient};
use crate::config::AppConfig;
use crate::domain::models::{ActionItem, DraftEntry, DraftStatus, ExtractionResult};
use crate::error::Result;
use crate::orchestrators::{DraftOrchestrator, ExtractionOrchestrator};
use crate::ports::llm::LlmConfig;
use std::sync::Arc;

/// Entry point for the two AI features
pub struct MeetingAssistant {
    extraction: ExtractionOrchestrator,
    drafts: DraftOrchestrator,
}

impl MeetingAssistant {
    /// Build an assistant on top of an existing request client
    pub fn new(client: Arc<RequestClient>) -> Self {
        Self {
            extraction: ExtractionOrchestrator::new(client.clone()),
            drafts: DraftOrchestrator::new(client),
        }
    }

    /// Build an assistant talking to Gemini with the configured credential
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let llm_config = LlmConfig {
            model: config.model.clone(),
            ..LlmConfig::default()
        };
        let model = GeminiModel::new(config.api_key.clone(), llm_config)?;
        let client = RequestClient::new(Arc::new(model), BackoffPolicy::default());
        Ok(Self::new(Arc::new(client)))
    }

    /// Extract a summary and action items from a transcript
    ///
    /// On success all draft entries are cleared: the new result renumbers the
    /// action items, so stale drafts would point at the wrong owners.
    pub async fn extract(&self, transcript: &str) -> Result<ExtractionResult> {
        let result = self.extraction.extract(transcript).await?;
        self.drafts.clear();
        Ok(result)
    }

    /// Draft a follow-up message for one action item of the current result
    pub async fn draft_follow_up(&self, index: usize, item: &ActionItem) -> Result<String> {
        self.drafts.draft_follow_up(index, item).await
    }

    /// Whether an extraction is in flight
    pub fn is_extracting(&self) -> bool {
        self.extraction.is_busy()
    }

    /// The current extraction result, if any
    pub fn latest_extraction(&self) -> Option<ExtractionResult> {
        self.extraction.latest()
    }

    /// Draft state for one action-item index
    pub fn draft_entry(&self, index: usize) -> Option<DraftEntry> {
        self.drafts.entry(index)
    }

    /// Draft status for one action-item index
    pub fn draft_status(&self, index: usize) -> DraftStatus {
        self.drafts.status(index)
    }
}
