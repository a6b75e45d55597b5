//! Credential storage configuration from TOML (`[credentials]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCredentialsConfig {
    /// Credential file. Defaults to `<data_dir>/thermo-tutor/credentials.json`.
    pub path: Option<String>,
}
