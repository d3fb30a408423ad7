//! Short display tags for notification reasons

use std::fmt;

/// Two-character tag shown in front of each notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    ReviewRequested,
    CiActivity,
    Mentioned,
    Assigned,
    Author,
    Subscribed,
    Unknown,
}

impl Tag {
    /// Map a notification `reason` to its tag; unknown reasons get a blank tag
    pub fn from_reason(reason: &str) -> Self {
        match reason {
            "review_requested" => Tag::ReviewRequested,
            "ci_activity" => Tag::CiActivity,
            "mentioned" => Tag::Mentioned,
            "assigned" => Tag::Assigned,
            "author" => Tag::Author,
            "subscribed" => Tag::Subscribed,
            _ => Tag::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::ReviewRequested => "RV",
            Tag::CiActivity => "CI",
            Tag::Mentioned => "M ",
            Tag::Assigned => "A ",
            Tag::Author => "AU",
            Tag::Subscribed => "S ",
            Tag::Unknown => "  ",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
