//! Application layer for thermo-tutor
//!
//! This crate contains the session use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::CompletionConfig;
pub use ports::{
    completion_client::{CompletionClient, CompletionError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    credential_store::{CredentialStore, CredentialStoreError},
    session_observer::{NoSessionObserver, SessionObserver},
};
pub use use_cases::chat_session::{ChatSessionUseCase, SetCredentialError, SubmitOutcome};
