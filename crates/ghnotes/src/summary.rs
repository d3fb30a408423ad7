//! The fetch, resolve, filter and print pipeline

use crate::output::{write_entry, Entry};
use crate::reason::Tag;
use crate::resolver::{resolve, Resolution};
use anyhow::Context;
use gh_client::GitHubClient;
use log::debug;
use std::io::Write;

/// What happened during one summarizer run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Notifications printed
    pub shown: usize,
    /// Notifications dropped because their PR or issue is closed
    pub skipped_closed: usize,
    /// Per-item lookup failures that fell back to the repository URL
    pub warnings: Vec<String>,
}

/// Fetch notifications and print every one that is not closed
///
/// Notifications are handled one at a time in the order GitHub returned
/// them, and each entry is written as soon as it is known. A failed list
/// call or a malformed subject URL aborts the run; a failed lookup does not.
pub async fn summarize<C, W>(client: &C, out: &mut W) -> anyhow::Result<Summary>
where
    C: GitHubClient + ?Sized,
    W: Write,
{
    let notifications = client
        .fetch_notifications()
        .await
        .context("failed to authenticate to github")?;

    debug!("Summarizing {} notifications", notifications.len());

    let mut summary = Summary::default();

    for note in &notifications {
        let tag = Tag::from_reason(&note.reason);

        let resolution = resolve(client, &note.subject).await.with_context(|| {
            format!(
                "unexpected subject url for '{}' in {}",
                note.subject.title, note.repository.full_name
            )
        })?;

        let resolved_url = match resolution {
            Resolution::Resolved(resource) if resource.state.is_closed() => {
                debug!(
                    "Skipping closed subject '{}' in {}",
                    note.subject.title, note.repository.full_name
                );
                summary.skipped_closed += 1;
                continue;
            }
            Resolution::Resolved(resource) => Some(resource.html_url),
            Resolution::Skipped => None,
            Resolution::LookupFailed(message) => {
                summary.warnings.push(message);
                None
            }
        };

        let url = resolved_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| note.repository.html_url.clone());

        write_entry(
            out,
            &Entry {
                tag,
                repository: &note.repository.full_name,
                title: &note.subject.title,
                url: &url,
            },
        )?;
        summary.shown += 1;
    }

    out.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{notification, MockClient};
    use gh_client::{ResourceState, SubjectKind};

    async fn run(client: &MockClient) -> (anyhow::Result<Summary>, String) {
        let mut out = Vec::new();
        let result = summarize(client, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_open_shown_and_closed_dropped() {
        let client = MockClient::new(vec![
            notification(
                "review_requested",
                "acme/widget",
                "Fix bug",
                SubjectKind::PullRequest,
                Some("https://api.github.com/repos/acme/widget/pulls/42"),
            ),
            notification(
                "mentioned",
                "acme/widget",
                "Old discussion",
                SubjectKind::Issue,
                Some("https://api.github.com/repos/acme/widget/issues/7"),
            ),
        ])
        .with_pull("acme", "widget", 42, ResourceState::Open)
        .with_issue("acme", "widget", 7, ResourceState::Closed);

        let (result, output) = run(&client).await;
        let summary = result.unwrap();

        assert_eq!(
            output,
            "[RV] acme/widget\n    Fix bug\n    https://github.com/acme/widget/pull/42\n"
        );
        assert_eq!(summary.shown, 1);
        assert_eq!(summary.skipped_closed, 1);
        assert!(summary.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_closed_pull_request_dropped() {
        let client = MockClient::new(vec![notification(
            "author",
            "acme/widget",
            "Merged work",
            SubjectKind::PullRequest,
            Some("https://api.github.com/repos/acme/widget/pulls/3"),
        )])
        .with_pull("acme", "widget", 3, ResourceState::Closed);

        let (result, output) = run(&client).await;

        assert!(output.is_empty());
        assert_eq!(result.unwrap().skipped_closed, 1);
    }

    #[tokio::test]
    async fn test_other_subject_uses_repository_url() {
        let client = MockClient::new(vec![
            notification(
                "subscribed",
                "acme/widget",
                "v1.0.0",
                SubjectKind::Other("Release".to_string()),
                Some("https://api.github.com/repos/acme/widget/releases/1"),
            ),
            notification(
                "ci_activity",
                "acme/gadget",
                "CI run failed",
                SubjectKind::Other("CheckSuite".to_string()),
                None,
            ),
        ]);

        let (result, output) = run(&client).await;

        assert_eq!(
            output,
            "[S ] acme/widget\n    v1.0.0\n    https://github.com/acme/widget\n\
             [CI] acme/gadget\n    CI run failed\n    https://github.com/acme/gadget\n"
        );
        assert_eq!(result.unwrap().shown, 2);
        assert!(client.lookups().is_empty());
    }

    #[tokio::test]
    async fn test_failed_lookup_is_shown_with_warning() {
        let client = MockClient::new(vec![notification(
            "assigned",
            "acme/widget",
            "Gone missing",
            SubjectKind::Issue,
            Some("https://api.github.com/repos/acme/widget/issues/404"),
        )]);

        let (result, output) = run(&client).await;
        let summary = result.unwrap();

        assert_eq!(
            output,
            "[A ] acme/widget\n    Gone missing\n    https://github.com/acme/widget\n"
        );
        assert_eq!(summary.shown, 1);
        assert_eq!(summary.skipped_closed, 0);
        assert_eq!(summary.warnings.len(), 1);
    }

    #[tokio::test]
    async fn test_preserves_notification_order() {
        let client = MockClient::new(vec![
            notification("mentioned", "acme/b", "second", SubjectKind::Other(String::new()), None),
            notification("mentioned", "acme/a", "first", SubjectKind::Other(String::new()), None),
        ]);

        let (_, output) = run(&client).await;
        let repos: Vec<&str> = output.lines().filter(|l| l.starts_with('[')).collect();

        assert_eq!(repos, vec!["[M ] acme/b", "[M ] acme/a"]);
    }

    #[tokio::test]
    async fn test_list_failure_is_fatal() {
        let client = MockClient::failing("401 Bad credentials");

        let (result, output) = run(&client).await;
        let err = result.unwrap_err();

        assert!(output.is_empty());
        assert!(format!("{:#}", err).starts_with("failed to authenticate to github"));
    }

    #[tokio::test]
    async fn test_malformed_url_aborts_run() {
        let client = MockClient::new(vec![
            notification(
                "mentioned",
                "acme/widget",
                "Printed first",
                SubjectKind::Other("Discussion".to_string()),
                None,
            ),
            notification(
                "review_requested",
                "acme/widget",
                "Broken",
                SubjectKind::PullRequest,
                Some("https://api.github.com/repos/acme/widget/pulls"),
            ),
            notification(
                "mentioned",
                "acme/widget",
                "Never reached",
                SubjectKind::Other("Discussion".to_string()),
                None,
            ),
        ]);

        let (result, output) = run(&client).await;

        assert!(result.is_err());
        assert!(output.contains("Printed first"));
        assert!(!output.contains("Never reached"));
    }
}
