//! LLM service adapters
//!
//! Implementations of the TextGenerationPort trait. The product ships against
//! Google's Gemini generateContent API.

pub mod gemini;

pub use gemini::GeminiModel;
