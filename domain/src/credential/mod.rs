//! Credential value object.
//!
//! The secret that authorizes outbound completion requests. Formatting is
//! redacted so the value cannot leak through `{:?}` or `{}` in logs.

use crate::core::error::DomainError;
use std::fmt;

/// Fixed name under which the credential is persisted.
pub const CREDENTIAL_KEY: &str = "anthropic_api_key";

/// An opaque, non-empty API credential (Value Object)
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Create a credential, trimming surrounding whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCredential);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Raw secret. Only for the authorization header and the credential store.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_trims() {
        let c = Credential::new("  sk-ant-123 \n").unwrap();
        assert_eq!(c.expose(), "sk-ant-123");
    }

    #[test]
    fn test_blank_credential_rejected() {
        assert_eq!(Credential::new(""), Err(DomainError::EmptyCredential));
        assert_eq!(Credential::new("   "), Err(DomainError::EmptyCredential));
    }

    #[test]
    fn test_formatting_is_redacted() {
        let c = Credential::new("sk-ant-secret").unwrap();
        assert!(!format!("{:?}", c).contains("secret"));
        assert!(!format!("{}", c).contains("secret"));
    }
}
