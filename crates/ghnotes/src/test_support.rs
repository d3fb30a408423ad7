//! In-memory `GitHubClient` used by the unit tests

use async_trait::async_trait;
use chrono::Utc;
use gh_client::{
    GitHubClient, Notification, RepositoryRef, ResolvedResource, ResourceState, Subject,
    SubjectKind,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock client serving canned notifications and lookups
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    notifications: Vec<Notification>,
    resources: HashMap<String, ResolvedResource>,
    list_error: Option<String>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockClient {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications,
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            list_error: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn with_pull(mut self, owner: &str, repo: &str, number: u64, state: ResourceState) -> Self {
        let html_url = format!("https://github.com/{}/{}/pull/{}", owner, repo, number);
        self.resources.insert(
            key("pulls", owner, repo, number),
            ResolvedResource { state, html_url },
        );
        self
    }

    pub fn with_issue(mut self, owner: &str, repo: &str, number: u64, state: ResourceState) -> Self {
        let html_url = format!("https://github.com/{}/{}/issues/{}", owner, repo, number);
        self.resources.insert(
            key("issues", owner, repo, number),
            ResolvedResource { state, html_url },
        );
        self
    }

    /// Lookups performed so far, as `kind/owner/repo/number`
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    fn lookup(&self, k: String) -> anyhow::Result<ResolvedResource> {
        self.lookups.lock().unwrap().push(k.clone());
        self.resources
            .get(&k)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Not Found: {}", k))
    }
}

fn key(kind: &str, owner: &str, repo: &str, number: u64) -> String {
    format!("{}/{}/{}/{}", kind, owner, repo, number)
}

#[async_trait]
impl GitHubClient for MockClient {
    async fn fetch_notifications(&self) -> anyhow::Result<Vec<Notification>> {
        match &self.list_error {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(self.notifications.clone()),
        }
    }

    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<ResolvedResource> {
        self.lookup(key("pulls", owner, repo, pr_number))
    }

    async fn fetch_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> anyhow::Result<ResolvedResource> {
        self.lookup(key("issues", owner, repo, issue_number))
    }
}

/// Build a notification for `full_name` with the given subject
pub fn notification(
    reason: &str,
    full_name: &str,
    title: &str,
    kind: SubjectKind,
    url: Option<&str>,
) -> Notification {
    Notification {
        reason: reason.to_string(),
        repository: RepositoryRef {
            full_name: full_name.to_string(),
            html_url: format!("https://github.com/{}", full_name),
        },
        subject: Subject {
            title: title.to_string(),
            url: url.map(str::to_string),
            kind,
        },
        updated_at: Utc::now(),
    }
}
