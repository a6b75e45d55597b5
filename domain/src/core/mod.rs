//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — the completion model the tutor talks to
//! - [`question::Question`] — a validated question typed by the learner
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod question;
