//! History model
//!
//! A history is a named, singly-linked chain of commits, newest at the
//! head. It supports appending, removal by id, bounded listing, and a
//! timestamp-ordered merge that drains another history. Every operation
//! validates its arguments before touching any state, so a failed call
//! leaves the history exactly as it was.
//!
//! Author: Mara Ellison

use std::fmt;

use log::debug;

use crate::commit::{Commit, Link};
use crate::error::{HistoryError, HistoryResult};
use crate::merge::merge_chains;

/// A named, ordered sequence of commits
///
/// Owns its head commit and, transitively, everything reachable through
/// `past` links. Single ownership means the chain is acyclic and a walk
/// from the head always terminates.
pub struct History {
    /// Identifying label, fixed at construction
    name: String,
    /// Most recent commit, or `None` when the history is empty
    head: Link,
}

impl History {
    /// Create an empty history with the given name.
    ///
    /// Fails with [`HistoryError::InvalidArgument`] if `name` is empty.
    pub fn new(name: &str) -> HistoryResult<Self> {
        if name.is_empty() {
            return Err(HistoryError::InvalidArgument("name must be non-empty"));
        }
        Ok(Self {
            name: String::from(name),
            head: None,
        })
    }

    /// The history's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the head commit, or `None` if the history is empty.
    pub fn head_id(&self) -> Option<&str> {
        self.head.as_deref().map(|commit| commit.id.as_str())
    }

    /// Number of commits, counted by walking the chain. O(n).
    pub fn size(&self) -> usize {
        self.head.as_deref().map_or(0, Commit::chain_len)
    }

    /// True if the history holds no commits.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// One-line summary: `<name> - Current head: <commit>`, or
    /// `<name> - No commits` when empty.
    pub fn describe(&self) -> String {
        match &self.head {
            Some(head) => format!("{} - Current head: {}", self.name, head),
            None => format!("{} - No commits", self.name),
        }
    }

    /// Whether a commit with `target_id` exists anywhere in the chain.
    ///
    /// Fails with [`HistoryError::InvalidArgument`] if `target_id` is
    /// empty. Linear search from the head.
    pub fn contains(&self, target_id: &str) -> HistoryResult<bool> {
        if target_id.is_empty() {
            return Err(HistoryError::InvalidArgument("target id must be non-empty"));
        }

        let mut curr = self.head.as_deref();
        while let Some(commit) = curr {
            if commit.id == target_id {
                return Ok(true);
            }
            curr = commit.past.as_deref();
        }
        Ok(false)
    }

    /// Descriptions of the `n` most recent commits, newest first.
    ///
    /// Returns fewer than `n` entries if the history is shorter, and an
    /// empty vec if it is empty. Fails with
    /// [`HistoryError::InvalidArgument`] if `n` is zero.
    pub fn history(&self, n: usize) -> HistoryResult<Vec<String>> {
        if n == 0 {
            return Err(HistoryError::InvalidArgument("history depth must be positive"));
        }

        let mut entries = Vec::new();
        let mut curr = self.head.as_deref();
        while let Some(commit) = curr {
            if entries.len() == n {
                break;
            }
            entries.push(commit.to_string());
            curr = commit.past.as_deref();
        }
        Ok(entries)
    }

    /// Append a new commit with the given message and return its id.
    ///
    /// The new commit takes the current head as its `past`, draws the
    /// next process-wide id, and is stamped with the current time.
    /// Fails with [`HistoryError::InvalidArgument`] if `message` is
    /// empty.
    pub fn commit(&mut self, message: &str) -> HistoryResult<String> {
        if message.is_empty() {
            return Err(HistoryError::InvalidArgument("message must be non-empty"));
        }

        let commit = Commit::new(message, self.head.take());
        let id = commit.id.clone();
        self.head = Some(Box::new(commit));
        debug!("{}: committed {id}: {message}", self.name);
        Ok(id)
    }

    /// Remove the commit with `target_id`, keeping the rest of the
    /// chain intact.
    ///
    /// Returns `true` if a commit was removed: removing the head
    /// promotes its `past`, removing an interior commit splices its
    /// neighbours together. Returns `false` if the history is empty or
    /// no commit matches, in which case nothing changes. The search
    /// stops at the first match. Fails with
    /// [`HistoryError::InvalidArgument`] if `target_id` is empty.
    pub fn drop(&mut self, target_id: &str) -> HistoryResult<bool> {
        if target_id.is_empty() {
            return Err(HistoryError::InvalidArgument("target id must be non-empty"));
        }

        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return Ok(false),
                Some(commit) if commit.id == target_id => {
                    let past = commit.past.take();
                    *cursor = past;
                    debug!("{}: dropped {target_id}", self.name);
                    return Ok(true);
                }
                Some(commit) => cursor = &mut commit.past,
            }
        }
    }

    /// Merge `other`'s commits into this history and empty `other`.
    ///
    /// The two chains are merged in timestamp-descending order; equal
    /// timestamps keep this history's commit ahead, and relative order
    /// within each original chain is preserved. `other` is left headless
    /// in every case — even when it was already empty or when this
    /// history simply adopts its whole chain.
    pub fn synchronize(&mut self, other: &mut History) {
        debug!(
            "{}: synchronizing {} commits from {}",
            self.name,
            other.size(),
            other.name
        );
        self.head = merge_chains(self.head.take(), other.head.take());
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
