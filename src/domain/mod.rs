/// Domain layer - core business models
///
/// These models are platform-agnostic and represent core business entities.
pub mod models;
pub mod prompts;
pub mod schema;

pub use models::{ActionItem, DraftEntry, DraftStatus, ExtractionResult};
pub use prompts::PromptTemplates;
pub use schema::{FieldKind, ResponseSchema, SchemaField};
