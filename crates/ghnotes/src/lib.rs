//! Summarize pending GitHub notifications
//!
//! Fetches the authenticated user's notifications, resolves each pull
//! request or issue to its current state, drops the closed ones and prints
//! the rest as a short tagged list.

pub mod output;
pub mod reason;
pub mod resolver;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use reason::Tag;
pub use resolver::{resolve, Resolution};
pub use summary::{summarize, Summary};
