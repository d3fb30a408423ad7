//! Configuration and credential loading for ghnotes
//!
//! This crate provides:
//! - Per-user config paths
//! - `.env`-style credential file loading
//! - GitHub token resolution
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod env_file;
pub mod paths;
pub mod token;

pub use app_config::AppConfig;
pub use env_file::{load_env_files, EnvFileOutcome};
pub use token::{resolve_token, Credential};
