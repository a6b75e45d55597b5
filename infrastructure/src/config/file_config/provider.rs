//! Provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

/// Anthropic Messages API endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: crate::anthropic::DEFAULT_BASE_URL.to_string(),
            api_version: crate::anthropic::DEFAULT_API_VERSION.to_string(),
        }
    }
}
