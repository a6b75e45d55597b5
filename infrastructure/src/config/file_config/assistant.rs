//! Assistant configuration from TOML (`[assistant]` section)

use serde::{Deserialize, Serialize};
use tutor_application::CompletionConfig;
use tutor_application::config::completion_config::DEFAULT_MAX_TOKENS;
use tutor_domain::Model;

/// Completion parameters and persona
///
/// # Example
///
/// ```toml
/// [assistant]
/// model = "claude-3-5-sonnet-20241022"
/// max_tokens = 1024
/// system_prompt = "You are a patient thermodynamics tutor."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssistantConfig {
    /// Model identifier sent to the completion service
    pub model: String,
    /// Maximum output tokens per reply
    pub max_tokens: u32,
    /// Override of the built-in persona
    pub system_prompt: Option<String>,
}

impl Default for FileAssistantConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: None,
        }
    }
}

impl FileAssistantConfig {
    pub fn to_completion_config(&self) -> CompletionConfig {
        let mut config = CompletionConfig::default();
        let model = self.model.trim();
        if !model.is_empty() {
            config.model = Model::from(model);
        }
        if self.max_tokens > 0 {
            config.max_tokens = self.max_tokens;
        }
        if let Some(prompt) = &self.system_prompt
            && !prompt.trim().is_empty()
        {
            config.system_prompt = prompt.clone();
        }
        config
    }
}
