//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API.
//! They are intentionally separate from octocrab's models so the
//! summarizer can be tested without building octocrab payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pending notification for the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Why the user was notified (e.g., "mentioned", "review_requested")
    pub reason: String,

    /// Repository the notification belongs to
    pub repository: RepositoryRef,

    /// The thing the notification is about
    pub subject: Subject,

    /// When the notification was last updated
    pub updated_at: DateTime<Utc>,
}

/// Repository a notification belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRef {
    /// Full name in `owner/repo` form
    pub full_name: String,

    /// Repository URL for opening in browser
    pub html_url: String,
}

/// Subject of a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject title (PR or issue title, release name, ...)
    pub title: String,

    /// REST API URL of the subject, if GitHub provided one
    pub url: Option<String>,

    /// Subject type
    pub kind: SubjectKind,
}

/// Type of a notification subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectKind {
    PullRequest,
    Issue,
    /// Anything else GitHub reports (Release, Discussion, CheckSuite, ...)
    Other(String),
}

impl SubjectKind {
    /// Parse the `type` field of a notification subject
    pub fn from_api(kind: &str) -> Self {
        match kind {
            "PullRequest" => SubjectKind::PullRequest,
            "Issue" => SubjectKind::Issue,
            other => SubjectKind::Other(other.to_string()),
        }
    }
}

/// Current state of a pull request or issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceState {
    Open,
    Closed,
    Other(String),
}

impl ResourceState {
    pub fn is_closed(&self) -> bool {
        matches!(self, ResourceState::Closed)
    }
}

/// A pull request or issue fetched to resolve a notification subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedResource {
    /// Current state
    pub state: ResourceState,

    /// Canonical URL for opening in browser
    pub html_url: String,
}
