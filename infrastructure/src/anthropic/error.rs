//! Error types for the Anthropic adapter

use thiserror::Error;
use tutor_application::CompletionError;

/// What went wrong talking to the Messages API.
///
/// Only used for diagnostics; callers see a single
/// [`CompletionError::RequestFailed`].
#[derive(Error, Debug)]
pub enum AnthropicError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("Response contained no content blocks")]
    EmptyContent,

    #[error("First content block has no text")]
    MissingText,
}

impl From<AnthropicError> for CompletionError {
    fn from(e: AnthropicError) -> Self {
        CompletionError::RequestFailed(e.to_string())
    }
}
