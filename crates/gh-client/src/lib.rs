//! GitHub API client for notifications
//!
//! This crate provides a trait-based GitHub API client covering the calls
//! needed to summarize a user's notifications: listing notifications and
//! looking up the pull request or issue a notification points at.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_notifications()                         │
//! │  - fetch_pull_request()                          │
//! │  - fetch_issue()                                 │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!               ┌─────────────────┐
//!               │ OctocrabClient  │
//!               │ (direct API)    │
//!               └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OctocrabClient::connect("token", None)?;
//! let notifications = client.fetch_notifications().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod resource_url;
pub mod types;

/// Default GitHub host (public GitHub)
pub const DEFAULT_HOST: &str = "github.com";

pub use client::GitHubClient;
pub use octocrab_client::OctocrabClient;
pub use resource_url::{ResourceKind, ResourceUrl, ResourceUrlError};
pub use types::{
    Notification, RepositoryRef, ResolvedResource, ResourceState, Subject, SubjectKind,
};
