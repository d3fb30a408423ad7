//! GitHub client trait
//!
//! This module defines the `GitHubClient` trait that all client
//! implementations must satisfy. It covers exactly the three REST calls
//! the summarizer needs.

use crate::types::{Notification, ResolvedResource};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the interface for interacting with the GitHub API.
/// The production implementation is `OctocrabClient`; tests provide
/// in-memory implementations.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::GitHubClient;
///
/// async fn count(client: &dyn GitHubClient) -> anyhow::Result<usize> {
///     Ok(client.fetch_notifications().await?.len())
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch pending notifications for the authenticated user
    ///
    /// Only the first page is requested, with default options. The
    /// notifications are returned in the order GitHub sent them.
    async fn fetch_notifications(&self) -> anyhow::Result<Vec<Notification>>;

    /// Fetch the current state of a pull request
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<ResolvedResource>;

    /// Fetch the current state of an issue
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `issue_number` - Issue number
    async fn fetch_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> anyhow::Result<ResolvedResource>;
}
