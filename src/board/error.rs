//! Error types for the collection store

use thiserror::Error;

use crate::types::ColumnId;

/// Result type for store operations that can fail
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors raised by the collection store.
///
/// Stale ids are not errors: the store treats them as no-ops. Only contract
/// violations by the caller surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A task was requested under a column that does not exist
    #[error("missing parent: column {column} does not exist")]
    MissingParent { column: ColumnId },
}
