//! Application configuration
//!
//! Optional configuration loaded from `ghnotes/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from config.toml
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// GitHub Enterprise host (e.g., "ghe.example.com"); public GitHub when unset
    #[serde(default)]
    pub host: Option<String>,
}

impl AppConfig {
    /// Load config from the per-user config directory, or use defaults
    pub fn load() -> Self {
        match crate::paths::app_config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                log::debug!("No config directory: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from the given file, or use defaults
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Using default app config");
                return Self::default();
            }
            Err(e) => {
                log::warn!("Unable to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                log::info!("Loaded app config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }
}
