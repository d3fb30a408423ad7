//! Parsing of notification subject URLs
//!
//! Notification subjects point at REST endpoints such as
//! `https://api.github.com/repos/{owner}/{repo}/pulls/{number}`.
//! Enterprise hosts prefix the path with `/api/v3`, so only the
//! trailing five segments are validated.

use std::fmt;
use thiserror::Error;

/// Kind of resource a subject URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    PullRequest,
    Issue,
}

impl ResourceKind {
    /// Collection segment used in the REST path
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResourceKind::PullRequest => "pulls",
            ResourceKind::Issue => "issues",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::PullRequest => write!(f, "pull request"),
            ResourceKind::Issue => write!(f, "issue"),
        }
    }
}

/// Reasons a subject URL could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceUrlError {
    #[error("resource url {url:?} has {found} path segments, expected at least 5")]
    TooFewSegments { url: String, found: usize },

    #[error("resource url {url:?} is missing the `repos` segment")]
    MissingReposSegment { url: String },

    #[error("resource url {url:?} points at `{found}`, expected `{expected}`")]
    UnexpectedKind {
        url: String,
        expected: &'static str,
        found: String,
    },

    #[error("resource url {url:?} has an empty owner or repository")]
    EmptyOwnerOrRepo { url: String },

    #[error("resource url {url:?} has a non-numeric id `{found}`")]
    InvalidNumber { url: String, found: String },
}

/// Owner, repository and number extracted from a subject URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUrl {
    pub owner: String,
    pub repo: String,
    pub kind: ResourceKind,
    pub number: u64,
}

impl ResourceUrl {
    /// Parse a REST resource URL, checking it points at the expected kind
    pub fn parse(url: &str, expected: ResourceKind) -> Result<Self, ResourceUrlError> {
        let path = strip_origin(url);
        let segments: Vec<&str> = path.trim_end_matches('/').split('/').collect();

        if segments.len() < 5 {
            return Err(ResourceUrlError::TooFewSegments {
                url: url.to_string(),
                found: segments.len(),
            });
        }

        let tail = &segments[segments.len() - 5..];
        let (repos, owner, repo, kind, number) = (tail[0], tail[1], tail[2], tail[3], tail[4]);

        if repos != "repos" {
            return Err(ResourceUrlError::MissingReposSegment {
                url: url.to_string(),
            });
        }
        if kind != expected.path_segment() {
            return Err(ResourceUrlError::UnexpectedKind {
                url: url.to_string(),
                expected: expected.path_segment(),
                found: kind.to_string(),
            });
        }
        if owner.is_empty() || repo.is_empty() {
            return Err(ResourceUrlError::EmptyOwnerOrRepo {
                url: url.to_string(),
            });
        }
        let number = number
            .parse::<u64>()
            .map_err(|_| ResourceUrlError::InvalidNumber {
                url: url.to_string(),
                found: number.to_string(),
            })?;

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            kind: expected,
            number,
        })
    }
}

/// Drop `scheme://host` so only the path remains
fn strip_origin(url: &str) -> &str {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    match without_query.split_once("://") {
        Some((_, rest)) => rest.find('/').map(|idx| &rest[idx + 1..]).unwrap_or(""),
        None => without_query.trim_start_matches('/'),
    }
}
