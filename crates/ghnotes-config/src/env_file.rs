//! Loading of `.env`-style credential files
//!
//! Files are loaded with `dotenvy`, which never overrides variables that are
//! already present in the process environment. Loading the per-user file
//! before the working-directory `.env` therefore gives the precedence
//! environment > per-user file > `.env`.

use crate::paths;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Result of trying to load a single env file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileOutcome {
    /// File was read and its variables merged into the environment
    Loaded(PathBuf),
    /// File does not exist (not an error)
    Missing(PathBuf),
    /// File exists but could not be read or parsed
    Failed(PathBuf, String),
}

/// Load the per-user env file and then `.env` from the working directory
pub fn load_env_files() -> Vec<EnvFileOutcome> {
    let candidates: Vec<PathBuf> = [paths::env_file_path(), paths::local_env_file_path()]
        .into_iter()
        .filter_map(|path| match path {
            Ok(path) => Some(path),
            Err(e) => {
                debug!("Skipping env file: {:#}", e);
                None
            }
        })
        .collect();

    load_env_files_from(&candidates)
}

/// Load the given env files in order; earlier files take precedence
pub fn load_env_files_from(paths: &[PathBuf]) -> Vec<EnvFileOutcome> {
    paths.iter().map(|path| load_env_file(path)).collect()
}

/// Load a single env file, logging anything other than a missing file
pub fn load_env_file(path: &Path) -> EnvFileOutcome {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!("Loaded env file from: {}", path.display());
            EnvFileOutcome::Loaded(path.to_path_buf())
        }
        Err(e) if e.not_found() => {
            debug!("No env file at {}", path.display());
            EnvFileOutcome::Missing(path.to_path_buf())
        }
        Err(e) => {
            warn!("Unable to load env file {}: {}", path.display(), e);
            EnvFileOutcome::Failed(path.to_path_buf(), e.to_string())
        }
    }
}
