/// Adapters - implementations of the port traits for external services
pub mod llm;
