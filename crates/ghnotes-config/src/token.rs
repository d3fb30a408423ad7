//! GitHub token resolution

use log::debug;
use std::fmt;

const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Bearer token used to authenticate against the GitHub API
///
/// May be empty; an empty or invalid token shows up later as an
/// authentication failure from the API.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    token: String,
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.token.is_empty() { "<empty>" } else { "<redacted>" };
        f.debug_struct("Credential").field("token", &shown).finish()
    }
}

/// Read the token from `GITHUB_TOKEN`, falling back to `GH_TOKEN`
pub fn resolve_token() -> Credential {
    resolve_token_with(|key| std::env::var(key).ok())
}

fn resolve_token_with(lookup: impl Fn(&str) -> Option<String>) -> Credential {
    for key in TOKEN_VARS {
        if let Some(token) = lookup(key).filter(|t| !t.is_empty()) {
            debug!("Using token from {}", key);
            return Credential::new(token);
        }
    }

    debug!("No GitHub token found in environment");
    Credential::default()
}
