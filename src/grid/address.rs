//! Cell addressing
//!
//! A cell is named by a row id and a text-column index. Column 0 is the row's
//! own label; column `n >= 1` is `values[n - 1]`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a row in the tree.
///
/// Group ids are derived from their label, leaf ids are generated. The empty
/// id is reserved for the invisible root that owns the groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The root sentinel (parent of every group row)
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// What a text-column index refers to on a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSlot {
    /// Column 0: the row label
    Label,
    /// Column `n >= 1`: index `n - 1` into the value list
    Value(usize),
}

impl ColumnSlot {
    pub fn from_column(column: usize) -> Self {
        match column {
            0 => ColumnSlot::Label,
            n => ColumnSlot::Value(n - 1),
        }
    }

    pub fn column(self) -> usize {
        match self {
            ColumnSlot::Label => 0,
            ColumnSlot::Value(idx) => idx + 1,
        }
    }
}

/// A (row, text-column) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellAddress {
    pub row: RowId,
    pub column: usize,
}

impl CellAddress {
    pub fn new(row: impl Into<RowId>, column: usize) -> Self {
        Self {
            row: row.into(),
            column,
        }
    }

    pub fn slot(&self) -> ColumnSlot {
        ColumnSlot::from_column(self.column)
    }

    pub fn is_label(&self) -> bool {
        self.column == 0
    }

    /// 0-based data column, `None` for the label
    pub fn value_index(&self) -> Option<usize> {
        match self.slot() {
            ColumnSlot::Label => None,
            ColumnSlot::Value(idx) => Some(idx),
        }
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.row, self.column)
    }
}
