//! Error types for tree queries.

use thiserror::Error;

/// Recoverable failures reported by [`OSAvlTree`](crate::OSAvlTree).
///
/// Contract violations such as an out-of-range [`find_stat`](crate::OSAvlTree::find_stat)
/// are not represented here; those panic.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A query that needs at least one key was made on an empty tree.
    #[error("container is empty")]
    EmptyContainer,
}

/// A specialized Result type for tree queries.
pub type Result<T> = core::result::Result<T, Error>;
