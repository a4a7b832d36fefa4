//! Error types
//!
//! Every fallible operation on a history fails in exactly one way:
//! the caller handed it an argument that cannot be acted on. Validation
//! always happens before any mutation, so a returned error means the
//! history is exactly as it was.
//!
//! Author: Mara Ellison

use thiserror::Error;

/// Result type for history operations
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Errors raised by history operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// An argument failed validation (empty name, empty id, empty
    /// message, or a zero history depth). Carries a short reason.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
