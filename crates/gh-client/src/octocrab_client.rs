//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.

use crate::client::GitHubClient;
use crate::types::{
    Notification, RepositoryRef, ResolvedResource, ResourceState, Subject, SubjectKind,
};
use crate::DEFAULT_HOST;
use anyhow::Context;
use async_trait::async_trait;
use log::{debug, info};
use octocrab::Octocrab;
use std::sync::Arc;

const PUBLIC_API_URL: &str = "https://api.github.com";

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
    base_url: String,
}

impl OctocrabClient {
    /// Build an authenticated client for the given host
    ///
    /// `None` or `github.com` talks to the public API, any other host is
    /// treated as GitHub Enterprise (`https://{host}/api/v3`).
    pub fn connect(token: &str, host: Option<&str>) -> anyhow::Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        let base_url = match host {
            Some(h) if h != DEFAULT_HOST => {
                let uri = enterprise_api_url(h);
                builder = builder.base_uri(&uri).context("Failed to set base URI")?;
                uri
            }
            _ => PUBLIC_API_URL.to_string(),
        };

        let octocrab = builder.build().context("Failed to build Octocrab client")?;
        info!("GitHub client created for {}", base_url);

        Ok(Self {
            octocrab: Arc::new(octocrab),
            base_url,
        })
    }

    /// API base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_notifications(&self) -> anyhow::Result<Vec<Notification>> {
        debug!("Fetching notifications");

        let page = self
            .octocrab
            .activity()
            .notifications()
            .list()
            .send()
            .await?;

        let notifications: Vec<Notification> =
            page.items.iter().map(convert_notification).collect();

        debug!("Fetched {} notifications", notifications.len());
        Ok(notifications)
    }

    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<ResolvedResource> {
        debug!("Fetching PR #{} for {}/{}", pr_number, owner, repo);

        let pr = self.octocrab.pulls(owner, repo).get(pr_number).await?;

        Ok(ResolvedResource {
            state: pr
                .state
                .as_ref()
                .map(convert_issue_state)
                .unwrap_or_else(|| ResourceState::Other(String::new())),
            html_url: pr.html_url.map(|u| u.to_string()).unwrap_or_default(),
        })
    }

    async fn fetch_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> anyhow::Result<ResolvedResource> {
        debug!("Fetching issue #{} for {}/{}", issue_number, owner, repo);

        let issue = self.octocrab.issues(owner, repo).get(issue_number).await?;

        Ok(ResolvedResource {
            state: convert_issue_state(&issue.state),
            html_url: issue.html_url.to_string(),
        })
    }
}

fn enterprise_api_url(host: &str) -> String {
    format!("https://{}/api/v3", host)
}

/// Convert octocrab Notification to our Notification type
fn convert_notification(note: &octocrab::models::activity::Notification) -> Notification {
    Notification {
        reason: note.reason.clone(),
        repository: RepositoryRef {
            full_name: note
                .repository
                .full_name
                .clone()
                .unwrap_or_else(|| note.repository.name.clone()),
            html_url: note
                .repository
                .html_url
                .as_ref()
                .map(|u| u.to_string())
                .unwrap_or_default(),
        },
        subject: Subject {
            title: note.subject.title.clone(),
            url: note.subject.url.as_ref().map(|u| u.to_string()),
            kind: SubjectKind::from_api(&note.subject.r#type),
        },
        updated_at: note.updated_at,
    }
}

/// Convert octocrab IssueState to our ResourceState
fn convert_issue_state(state: &octocrab::models::IssueState) -> ResourceState {
    use octocrab::models::IssueState as OIS;
    match state {
        OIS::Open => ResourceState::Open,
        OIS::Closed => ResourceState::Closed,
        other => ResourceState::Other(format!("{:?}", other).to_lowercase()),
    }
}
