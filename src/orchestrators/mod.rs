/// Orchestrators - request/retry/state-update flows for the two AI features
pub mod draft;
pub mod extraction;

pub use draft::DraftOrchestrator;
pub use extraction::ExtractionOrchestrator;
