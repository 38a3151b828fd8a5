//! Chat-completion client.
//!
//! Provides the request/response message types, configuration loading and
//! a [`reqwest`]-based client for an OpenAI-compatible chat-completions
//! endpoint.

pub mod api;
pub mod config;
pub mod messages;

pub use api::{ChatCompletionApi, OpenAiApiError};
pub use config::OpenAiConfig;
