//! Configuration file paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/ghnotes/`
//! - macOS: `~/Library/Application Support/ghnotes/`
//! - Windows: `%APPDATA%\ghnotes\`
//!
//! Directories are never created here: a missing config directory simply
//! means there is nothing to load.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "ghnotes";
const ENV_FILE: &str = "env";
const LOCAL_ENV_FILE: &str = ".env";
const APP_CONFIG_FILE: &str = "config.toml";

/// Get the application config directory
/// Returns ~/.config/ghnotes/ on Linux, ~/Library/Application Support/ghnotes/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to the per-user env file (`ghnotes/env`)
pub fn env_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(ENV_FILE))
}

/// Get path to the `.env` file in CWD
pub fn local_env_file_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(LOCAL_ENV_FILE))
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(APP_CONFIG_FILE))
}
