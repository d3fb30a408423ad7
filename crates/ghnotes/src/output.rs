//! Plain-text rendering of summarized notifications

use crate::reason::Tag;
use std::io::{self, Write};

/// One notification ready to be printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub tag: Tag,
    pub repository: &'a str,
    pub title: &'a str,
    pub url: &'a str,
}

/// Write the three lines for one notification
///
/// ```text
/// [RV] acme/widget
///     Fix bug
///     https://github.com/acme/widget/pull/42
/// ```
pub fn write_entry<W: Write>(out: &mut W, entry: &Entry<'_>) -> io::Result<()> {
    writeln!(out, "[{:>2}] {}", entry.tag, entry.repository)?;
    writeln!(out, "    {}", entry.title)?;
    writeln!(out, "    {}", entry.url)
}
