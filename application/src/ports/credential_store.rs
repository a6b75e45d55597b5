//! Credential persistence port.
//!
//! The session loads the credential once at start and writes it back on
//! every change. Implementations decide where it lives.

use thiserror::Error;
use tutor_domain::Credential;

/// Errors raised by a credential store. Never carry the secret itself.
#[derive(Error, Debug)]
pub enum CredentialStoreError {
    #[error("Credential store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Credential store is corrupt: {0}")]
    Corrupt(String),
}

/// Persistence adapter for the credential.
pub trait CredentialStore: Send + Sync {
    /// Read the stored credential, `None` when nothing is stored.
    fn load(&self) -> Result<Option<Credential>, CredentialStoreError>;

    /// Overwrite the stored credential.
    fn save(&self, credential: &Credential) -> Result<(), CredentialStoreError>;

    /// Forget the stored credential.
    fn clear(&self) -> Result<(), CredentialStoreError>;
}
