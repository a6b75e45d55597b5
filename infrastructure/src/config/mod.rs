//! Configuration file loading for thermo-tutor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `THERMO_TUTOR_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./thermo-tutor.toml` or `./.thermo-tutor.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/thermo-tutor/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAssistantConfig, FileConfig, FileCredentialsConfig,
    FileLoggingConfig, FileOutputConfig, FileProviderConfig, FileReplConfig,
};
pub use loader::{ConfigLoader, expand_home};
