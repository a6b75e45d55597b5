//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Credential cannot be empty")]
    EmptyCredential,

    #[error("Question cannot be empty")]
    EmptyQuestion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::EmptyCredential.to_string(),
            "Credential cannot be empty"
        );
        assert_eq!(DomainError::EmptyQuestion.to_string(), "Question cannot be empty");
    }
}
