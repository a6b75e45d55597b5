//! Application-level configuration.
//!
//! - [`CompletionConfig`] — the fixed parameters of every completion request

pub mod completion_config;

pub use completion_config::CompletionConfig;
