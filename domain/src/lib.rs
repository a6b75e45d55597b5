//! Domain layer for thermo-tutor
//!
//! This crate contains the core entities and value objects of a tutoring
//! chat session. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Transcript**: the append-only sequence of exchanged messages
//! - **ChatSession**: a transcript plus the Idle / AwaitingReply state machine
//! - **Credential**: the secret authorizing completion requests

pub mod core;
pub mod credential;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model, question::Question};
pub use credential::{CREDENTIAL_KEY, Credential};
pub use session::{
    chat_session::{ChatSession, PendingExchange, SessionState, SubmitRejection},
    entities::{Message, MessageId, Role, Transcript},
};
