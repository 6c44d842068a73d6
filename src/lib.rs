//! Core request layer for the meeting-recap assistant
//!
//! This crate implements the generative-text plumbing behind the product's
//! two AI features: turning a meeting transcript into a summary with action
//! items (schema-constrained extraction) and drafting a follow-up message for
//! a single action item (free text). The UI shell, audio capture and storage
//! live elsewhere and consume this crate through [`MeetingAssistant`].

pub mod adapters;
pub mod assistant;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod orchestrators;
pub mod ports;

pub use assistant::MeetingAssistant;
pub use client::{BackoffPolicy, RequestClient};
pub use config::AppConfig;
pub use error::{AppError, Result};
