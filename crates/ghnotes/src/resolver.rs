//! Resolution of notification subjects to their pull request or issue

use gh_client::{
    GitHubClient, ResolvedResource, ResourceKind, ResourceUrl, ResourceUrlError, Subject,
    SubjectKind,
};
use log::{debug, warn};

/// Outcome of resolving a single notification subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The pull request or issue was fetched
    Resolved(ResolvedResource),
    /// Nothing to resolve: no URL, or a subject type other than PR/issue
    Skipped,
    /// The lookup failed; the notification is shown with its repository URL
    LookupFailed(String),
}

/// Fetch the current state of the resource a subject points at
///
/// Lookup failures are logged and reported as `Resolution::LookupFailed`.
/// A subject URL that does not have the expected REST shape is returned
/// as an error.
pub async fn resolve<C>(client: &C, subject: &Subject) -> Result<Resolution, ResourceUrlError>
where
    C: GitHubClient + ?Sized,
{
    let Some(url) = subject.url.as_deref().filter(|u| !u.is_empty()) else {
        return Ok(Resolution::Skipped);
    };

    let kind = match subject.kind {
        SubjectKind::PullRequest => ResourceKind::PullRequest,
        SubjectKind::Issue => ResourceKind::Issue,
        SubjectKind::Other(ref other) => {
            debug!("Not resolving subject of type '{}'", other);
            return Ok(Resolution::Skipped);
        }
    };

    let target = ResourceUrl::parse(url, kind)?;

    let lookup = match kind {
        ResourceKind::PullRequest => {
            client
                .fetch_pull_request(&target.owner, &target.repo, target.number)
                .await
        }
        ResourceKind::Issue => {
            client
                .fetch_issue(&target.owner, &target.repo, target.number)
                .await
        }
    };

    match lookup {
        Ok(resource) => Ok(Resolution::Resolved(resource)),
        Err(e) => {
            let message = format!(
                "failed to fetch {} {}/{}#{}: {:#}",
                kind, target.owner, target.repo, target.number, e
            );
            warn!("{}", message);
            Ok(Resolution::LookupFailed(message))
        }
    }
}
