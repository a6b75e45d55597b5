//! Interactive chat module
//!
//! Provides a readline-based interactive tutoring session.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
