//! Completion client port
//!
//! Defines the single request/response exchange with the external
//! text-completion service.

use crate::config::CompletionConfig;
use async_trait::async_trait;
use thiserror::Error;
use tutor_domain::Credential;

/// Errors that can occur during a completion request.
///
/// Deliberately coarse: transport failures, non-success statuses and
/// malformed bodies all collapse into `RequestFailed`. The message is for
/// diagnostics only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl CompletionError {
    pub fn request_failed(detail: impl Into<String>) -> Self {
        CompletionError::RequestFailed(detail.into())
    }
}

/// Client for the completion service.
///
/// Stateless across calls and single-shot: no streaming, no retry. Callers
/// are responsible for serializing requests.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` as the only user turn and return the reply text.
    async fn complete(
        &self,
        prompt: &str,
        credential: &Credential,
        config: &CompletionConfig,
    ) -> Result<String, CompletionError>;
}
