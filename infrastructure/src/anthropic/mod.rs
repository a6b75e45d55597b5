//! Anthropic Messages API adapter.
//!
//! Implements the [`CompletionClient`](tutor_application::CompletionClient)
//! port with a single `POST /v1/messages` per question.

mod client;
mod error;
mod types;

pub use client::{AnthropicCompletionClient, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
pub use error::AnthropicError;
