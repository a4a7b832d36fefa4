//! chainlog — Linear commit history
//!
//! A minimal model of a version-control history: a singly-linked chain
//! of immutable commit records, newest at the head, each commit owning
//! the one made immediately before it.
//!
//! Histories support appending ([`History::commit`]), removal by id
//! ([`History::drop`]), bounded listing ([`History::history`]), and a
//! timestamp-ordered merge ([`History::synchronize`]) that drains the
//! other history in every case.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`commit`] | Commit record and the owning chain link |
//! | [`error`] | `InvalidArgument` error and result alias |
//! | [`history`] | Named commit chain with all operations |
//! | [`merge`] | Merge step of two descending-sorted chains |
//! | [`sequence`] | Process-wide monotonic commit-id allocator |
//!
//! # Quick Start
//!
//! ```
//! use chainlog::History;
//!
//! let mut repo = History::new("demo")?;
//! let first = repo.commit("initial commit")?;
//! repo.commit("add feature")?;
//!
//! assert_eq!(repo.size(), 2);
//! assert!(repo.contains(&first)?);
//!
//! // Newest first, at most two entries
//! let log = repo.history(2)?;
//! assert!(log[0].ends_with(": add feature"));
//! # Ok::<(), chainlog::HistoryError>(())
//! ```
//!
//! Author: Mara Ellison

pub mod commit;
pub mod error;
pub mod history;
pub mod merge;
pub mod sequence;

pub use commit::{Commit, Link};
pub use error::{HistoryError, HistoryResult};
pub use history::History;
pub use merge::merge_chains;
pub use sequence::{next_commit_id, reset_commit_ids, CommitSequence};
