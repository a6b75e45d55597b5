//! Infrastructure layer for thermo-tutor
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the Anthropic completion client, credential stores,
//! configuration file loading and the conversation log.

pub mod anthropic;
pub mod config;
pub mod credential;
pub mod logging;

// Re-export commonly used types
pub use anthropic::{AnthropicCompletionClient, AnthropicError};
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, expand_home};
pub use credential::{FileCredentialStore, InMemoryCredentialStore};
pub use logging::JsonlConversationLogger;
