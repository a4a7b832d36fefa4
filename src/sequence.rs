//! Commit id allocation
//!
//! Commit ids come from a single process-wide sequence: a monotonically
//! increasing counter shared by every history in the process. Ids are
//! therefore unique for the lifetime of the process, but carry no ordering
//! relative to timestamps. The counter is atomic so concurrent callers
//! would still get distinct ids.
//!
//! Author: Mara Ellison

use std::sync::atomic::{AtomicU64, Ordering};

/// A monotonically increasing id allocator.
///
/// The crate owns one process-wide instance (see [`next_commit_id`]);
/// standalone instances are useful when callers want an isolated
/// numbering domain.
#[derive(Debug, Default)]
pub struct CommitSequence {
    next: AtomicU64,
}

impl CommitSequence {
    /// Create a sequence starting at 0.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Take the next id, advancing the sequence by one.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset the sequence back to 0. Primarily for test isolation.
    pub fn reset(&self) {
        self.next.store(0, Ordering::Relaxed);
    }
}

/// The shared sequence all commits in the process draw from.
static SEQUENCE: CommitSequence = CommitSequence::new();

/// Take the next id from the process-wide sequence.
pub fn next_commit_id() -> u64 {
    SEQUENCE.next_id()
}

/// Reset the process-wide sequence to 0. Primarily for test isolation.
pub fn reset_commit_ids() {
    SEQUENCE.reset();
}

/// Serializes tests that draw from or reset the process-wide sequence.
/// Cargo runs tests in parallel; any test asserting concrete id values
/// must hold this guard for its full duration.
#[cfg(test)]
pub(crate) fn sequence_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let seq = CommitSequence::new();
        let a = seq.next_id();
        let b = seq.next_id();
        let c = seq.next_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_sequence_starts_at_zero() {
        let seq = CommitSequence::new();
        assert_eq!(seq.next_id(), 0);
        assert_eq!(seq.next_id(), 1);
    }

    #[test]
    fn test_reset_restarts_numbering() {
        let seq = CommitSequence::new();
        seq.next_id();
        seq.next_id();
        seq.reset();
        assert_eq!(seq.next_id(), 0);
    }

    #[test]
    fn test_default_equals_new() {
        let d = CommitSequence::default();
        assert_eq!(d.next_id(), 0);
    }
}
