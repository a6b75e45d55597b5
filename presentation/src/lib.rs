//! Presentation layer for thermo-tutor
//!
//! This crate contains CLI definitions, output formatters,
//! the progress reporter, and the interactive REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ConsoleReporter;
