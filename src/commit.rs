//! Commit model
//!
//! A commit is an immutable record of a message, a creation time, and a
//! process-unique id, linked to the commit made immediately before it.
//! The `past` link is the one exception to immutability: removal and
//! merging re-wire it, nothing else ever changes.
//!
//! Author: Mara Ellison

use std::fmt;

use chrono::{DateTime, Utc};

use crate::sequence::next_commit_id;

/// Owning link to the previous commit in a chain, or `None` at the
/// oldest commit. Single ownership keeps the chain acyclic and finite.
pub type Link = Option<Box<Commit>>;

/// A single commit in a history
#[derive(Debug, Clone)]
pub struct Commit {
    /// Unique identifier, drawn from the process-wide sequence
    pub id: String,
    /// Message describing the change
    pub message: String,
    /// Creation time, assigned at construction
    pub timestamp: DateTime<Utc>,
    /// The immediately previous commit, if any
    pub past: Link,
}

impl Commit {
    /// Create a commit on top of `past`. The id and timestamp are
    /// assigned here and never change afterwards.
    pub fn new(message: &str, past: Link) -> Self {
        Self {
            id: next_commit_id().to_string(),
            message: String::from(message),
            timestamp: Utc::now(),
            past,
        }
    }

    /// Number of commits reachable from this one, itself included.
    pub fn chain_len(&self) -> usize {
        let mut len = 0;
        let mut curr = Some(self);
        while let Some(commit) = curr {
            len += 1;
            curr = commit.past.as_deref();
        }
        len
    }
}

impl fmt::Display for Commit {
    /// Renders as `<id> at <timestamp>: <message>`, e.g.
    /// `3 at 2025-02-12 at 18:40:02 UTC: fix typo`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}: {}",
            self.id,
            self.timestamp.format("%Y-%m-%d at %H:%M:%S %Z"),
            self.message
        )
    }
}
