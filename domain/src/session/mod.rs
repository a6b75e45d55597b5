//! Chat session domain.
//!
//! - [`entities::Message`] — a single entry of the transcript
//! - [`entities::Transcript`] — the append-only message sequence
//! - [`chat_session::ChatSession`] — transcript plus the pending state machine

pub mod chat_session;
pub mod entities;
