/// Domain models for the meeting-recap core
///
/// These models are platform-agnostic and represent core business entities.
use serde::{Deserialize, Serialize};

/// A discrete task surfaced from a transcript, with responsible-party attribution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionItem {
    /// The specific task to be completed
    pub text: String,

    /// The person or department responsible for the task
    pub owner: String,
}

impl ActionItem {
    /// Creates a new action item
    pub fn new(text: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            owner: owner.into(),
        }
    }
}

/// The result of one successful extraction call
///
/// Immutable once produced; a later extraction replaces the whole snapshot,
/// it never merges into an existing one. Action-item identity is positional
/// and only stable within this one result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub summary: String,
    pub action_items: Vec<ActionItem>,
    pub generated_at: i64, // Unix timestamp
}

impl ExtractionResult {
    /// Creates a new extraction result stamped with the current time
    pub fn new(summary: String, action_items: Vec<ActionItem>) -> Self {
        Self {
            summary,
            action_items,
            generated_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Lifecycle of one per-action-item draft request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    Idle,
    Pending,
    Done,
    Failed,
}

impl std::fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftStatus::Idle => write!(f, "idle"),
            DraftStatus::Pending => write!(f, "pending"),
            DraftStatus::Done => write!(f, "done"),
            DraftStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Draft state for one action item, keyed by its index in the extraction result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftEntry {
    pub status: DraftStatus,

    /// The drafted message body; set on success and kept across a later
    /// failed re-draft so the last good draft stays visible.
    pub content: Option<String>,

    pub updated_at: i64, // Unix timestamp
}

impl DraftEntry {
    /// Creates a fresh idle entry
    pub fn new() -> Self {
        Self {
            status: DraftStatus::Idle,
            content: None,
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}

impl Default for DraftEntry {
    fn default() -> Self {
        Self::new()
    }
}
