//! Draft orchestrator
//!
//! Drafts a follow-up message for one action item via an unconstrained model
//! call. State is keyed by the item's index in the current extraction result;
//! entries are independent, so drafts for distinct indices run concurrently
//! while a duplicate request for an index already pending is refused.

use crate::client::RequestClient;
use crate::domain::models::{ActionItem, DraftEntry, DraftStatus};
use crate::domain::prompts::PromptTemplates;
use crate::error::{AppError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Orchestrates per-action-item follow-up drafting
pub struct DraftOrchestrator {
    client: Arc<RequestClient>,
    entries: Mutex<HashMap<usize, DraftEntry>>,
}

impl DraftOrchestrator {
    pub fn new(client: Arc<RequestClient>) -> Self {
        Self {
            client,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Draft state for one index, if a draft was ever requested for it
    pub fn entry(&self, index: usize) -> Option<DraftEntry> {
        self.entries.lock().unwrap().get(&index).cloned()
    }

    /// Status for one index; indices never drafted are `Idle`
    pub fn status(&self, index: usize) -> DraftStatus {
        self.entries
            .lock()
            .unwrap()
            .get(&index)
            .map(|e| e.status)
            .unwrap_or(DraftStatus::Idle)
    }

    /// Drop all entries. Index identity is only stable within one extraction
    /// result, so this runs whenever a new extraction replaces the items.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Draft a follow-up message for the action item at `index`
    ///
    /// Refused while a draft for the same index is pending; re-drafting a
    /// finished index overwrites its content. Other indices are never touched.
    pub async fn draft_follow_up(&self, index: usize, item: &ActionItem) -> Result<String> {
        {
            let mut entries = self.entries.lock().unwrap();
            let entry = entries.entry(index).or_default();
            if entry.status == DraftStatus::Pending {
                return Err(AppError::InvalidInput(format!(
                    "a draft for action item {} is already in progress",
                    index
                )));
            }
            entry.status = DraftStatus::Pending;
            entry.updated_at = chrono::Utc::now().timestamp();
        }

        log::info!("Drafting follow-up for action item {} ({})", index, item.owner);

        let prompt = PromptTemplates::render_follow_up(&item.text, &item.owner);
        let outcome = self.client.generate_text(&prompt).await;

        let mut entries = self.entries.lock().unwrap();
        let entry = entries.entry(index).or_default();
        entry.updated_at = chrono::Utc::now().timestamp();

        match outcome {
            Ok(content) => {
                entry.status = DraftStatus::Done;
                entry.content = Some(content.clone());
                Ok(content)
            }
            Err(error) => {
                log::error!("Draft for action item {} failed: {}", index, error);
                // Keep any previously drafted content visible
                entry.status = DraftStatus::Failed;
                Err(error)
            }
        }
    }
}
