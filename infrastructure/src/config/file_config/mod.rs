//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types on use.

mod assistant;
mod credentials;
mod logging;
mod output;
mod provider;
mod repl;

pub use assistant::FileAssistantConfig;
pub use credentials::FileCredentialsConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tutor_application::CompletionConfig;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("assistant.model cannot be empty")]
    EmptyModelName,

    #[error("assistant.max_tokens cannot be 0")]
    ZeroMaxTokens,

    #[error("provider.base_url cannot be empty")]
    EmptyBaseUrl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion parameters and persona
    pub assistant: FileAssistantConfig,
    /// Completion service endpoint
    pub provider: FileProviderConfig,
    /// Credential persistence
    pub credentials: FileCredentialsConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every problem found.
    ///
    /// Invalid values are not fatal: [`FileConfig::completion_config`] and
    /// friends fall back to defaults for them.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if self.assistant.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if self.assistant.max_tokens == 0 {
            issues.push(ConfigValidationError::ZeroMaxTokens);
        }
        if self.provider.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        }
        issues
    }

    /// Build the completion parameters, ignoring invalid values.
    pub fn completion_config(&self) -> CompletionConfig {
        self.assistant.to_completion_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_domain::Model;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[assistant]
model = "claude-3-5-haiku-20241022"
max_tokens = 512
system_prompt = "You teach heat transfer."

[provider]
base_url = "http://localhost:8080"

[credentials]
path = "/tmp/creds.json"

[repl]
show_progress = false
history_file = "~/.local/share/thermo-tutor/history.txt"

[output]
color = false

[logging]
conversation_log = "/tmp/tutor.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_empty());

        let completion = config.completion_config();
        assert_eq!(completion.model, Model::ClaudeHaiku35);
        assert_eq!(completion.max_tokens, 512);
        assert_eq!(completion.system_prompt, "You teach heat transfer.");
        assert_eq!(config.provider.base_url, "http://localhost:8080");
        assert_eq!(config.provider.api_version, "2023-06-01");
        assert_eq!(config.credentials.path.as_deref(), Some("/tmp/creds.json"));
        assert!(!config.repl.show_progress);
        assert!(!config.output.color);
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some("/tmp/tutor.jsonl")
        );
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_empty());
        assert_eq!(config.completion_config(), CompletionConfig::default());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let toml_str = r#"
[assistant]
model = "  "
max_tokens = 0

[provider]
base_url = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            vec![
                ConfigValidationError::EmptyModelName,
                ConfigValidationError::ZeroMaxTokens,
                ConfigValidationError::EmptyBaseUrl,
            ]
        );
        // Invalid values fall back to defaults
        assert_eq!(config.completion_config(), CompletionConfig::default());
    }
}
