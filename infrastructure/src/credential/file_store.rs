//! File-backed credential store.
//!
//! The file is a flat JSON object of string values. The credential lives
//! under [`CREDENTIAL_KEY`]; any other keys are left untouched.
//!
//! Writes go to a temporary file in the same directory which then replaces
//! the original, so a failed write never truncates the existing entries.

use serde_json::{Map, Value};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use tutor_application::{CredentialStore, CredentialStoreError};
use tutor_domain::{CREDENTIAL_KEY, Credential};

/// Credential store backed by a JSON key-value file.
///
/// No expiry and no encryption. On Unix the file always ends up with mode
/// 0600, including files that existed before with wider permissions.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, CredentialStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(CredentialStoreError::Corrupt(format!(
                "{} is not a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(CredentialStoreError::Corrupt(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), CredentialStoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| CredentialStoreError::Corrupt(e.to_string()))?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o600))?;
        }
        tmp.write_all(json.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<Credential>, CredentialStoreError> {
        let entries = self.read_entries()?;
        match entries.get(CREDENTIAL_KEY) {
            None | Some(Value::Null) => Ok(None),
            // A blank stored value counts as "not set".
            Some(Value::String(s)) => Ok(Credential::new(s.as_str()).ok()),
            Some(_) => Err(CredentialStoreError::Corrupt(format!(
                "value under '{}' is not a string",
                CREDENTIAL_KEY
            ))),
        }
    }

    fn save(&self, credential: &Credential) -> Result<(), CredentialStoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(
            CREDENTIAL_KEY.to_string(),
            Value::String(credential.expose().to_string()),
        );
        self.write_entries(&entries)?;
        debug!("Credential saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialStoreError> {
        let mut entries = self.read_entries()?;
        if entries.remove(CREDENTIAL_KEY).is_some() {
            self.write_entries(&entries)?;
            debug!("Credential removed from {}", self.path.display());
        }
        Ok(())
    }
}
