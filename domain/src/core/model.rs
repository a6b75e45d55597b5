//! Model value object representing the completion model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Target model for completion requests (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    ClaudeSonnet35,
    ClaudeHaiku35,
    ClaudeOpus3,
    Custom(String),
}

impl Model {
    /// Get the string identifier sent to the completion service
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeSonnet35 => "claude-3-5-sonnet-20241022",
            Model::ClaudeHaiku35 => "claude-3-5-haiku-20241022",
            Model::ClaudeOpus3 => "claude-3-opus-20240229",
            Model::Custom(s) => s,
        }
    }

    /// Human-facing name, shown in the chat header
    pub fn display_name(&self) -> &str {
        match self {
            Model::ClaudeSonnet35 => "Claude Sonnet 3.5",
            Model::ClaudeHaiku35 => "Claude Haiku 3.5",
            Model::ClaudeOpus3 => "Claude Opus 3",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::ClaudeSonnet35
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "claude-3-5-sonnet-20241022" => Model::ClaudeSonnet35,
            "claude-3-5-haiku-20241022" => Model::ClaudeHaiku35,
            "claude-3-opus-20240229" => Model::ClaudeOpus3,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
