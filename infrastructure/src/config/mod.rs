//! Configuration file loading for atelier-contact
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ATELIER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./atelier-contact.toml` or `./.atelier-contact.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/atelier-contact/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileClientConfig, FileConfig, FileContactConfig, FileMailConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
