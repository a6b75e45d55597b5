//! Completion parameters.
//!
//! [`CompletionConfig`] groups what stays fixed for every request a session
//! issues: model, output bound and the persona's system instruction.

use serde::{Deserialize, Serialize};
use tutor_domain::Model;
use tutor_domain::prompt::SYSTEM_PROMPT;

/// Default upper bound on reply size, in tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Target model.
    pub model: Model,
    /// Maximum output tokens per reply.
    pub max_tokens: u32,
    /// System instruction describing the tutor persona.
    pub system_prompt: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }
}

impl CompletionConfig {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }
}
