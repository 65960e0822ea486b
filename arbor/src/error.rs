//! Tree error types.

use thiserror::Error;

/// Errors raised by tree operations.
///
/// These are programmer errors: the caller passed an index that does not
/// exist. Nothing is mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// `insert_node` was given an index with no existing entry.
    #[error("There is no node at index {index} (tree length is {len})")]
    NoNodeAtIndex {
        /// The requested index.
        index: usize,
        /// Number of entries at that level.
        len: usize,
    },
}
