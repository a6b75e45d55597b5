//! Credential store adapters.
//!
//! - [`FileCredentialStore`] — JSON key-value file in the user's data dir
//! - [`InMemoryCredentialStore`] — process-local, for `--no-persist` and tests

mod file_store;
mod memory_store;

pub use file_store::FileCredentialStore;
pub use memory_store::InMemoryCredentialStore;
