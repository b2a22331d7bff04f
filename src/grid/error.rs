//! Error taxonomy for grid operations

use thiserror::Error;

use super::address::RowId;

/// Errors raised by grid store, paste and session operations.
///
/// Paste overflow past the last column is not an error: surplus cells are
/// dropped and counted in [`PasteReport`](super::paste::PasteReport).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The row id is not (or no longer) in the tree. Usually a stale cursor.
    #[error("row not found: {0}")]
    NotFound(RowId),

    /// Leaf rows cannot own children (tree depth is at most two).
    #[error("row {0} is not a group and cannot have children")]
    NotAGroup(RowId),

    #[error("column {column} is outside the grid ({column_count} data columns)")]
    ColumnOutOfRange { column: usize, column_count: usize },

    /// A group id still collided after the single disambiguating suffix.
    #[error("duplicate row id: {0}")]
    DuplicateId(RowId),

    #[error("group rows need a non-empty label")]
    EmptyGroupLabel,
}

pub type GridResult<T> = Result<T, GridError>;
