//! Navigation cursor: the currently targeted cell and Tab cycling
//!
//! Tab walks the populated cells of a row, then moves to the next sibling
//! row (wrapping to the first one), restarting at column 1. Group rows are
//! only ever addressed through their label.

use super::address::{CellAddress, RowId};
use super::model::GridStore;

/// Targeted cell. `row == None` means nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridCursor {
    pub row: Option<RowId>,
    pub column: usize,
}

impl GridCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(address: CellAddress) -> Self {
        Self {
            row: Some(address.row),
            column: address.column,
        }
    }

    pub fn address(&self) -> Option<CellAddress> {
        self.row
            .as_ref()
            .map(|row| CellAddress::new(row.clone(), self.column))
    }

    pub fn select(&mut self, address: CellAddress) {
        self.row = Some(address.row);
        self.column = address.column;
    }

    pub fn clear(&mut self) {
        self.row = None;
        self.column = 0;
    }

    /// Drop the selection if its row no longer exists. Returns whether the
    /// cursor is still valid.
    pub fn revalidate(&mut self, store: &GridStore) -> bool {
        match &self.row {
            Some(row) if store.contains(row) => true,
            Some(row) => {
                tracing::debug!(%row, "cursor row vanished, clearing selection");
                self.clear();
                false
            }
            None => false,
        }
    }

    /// Move to the next cell (Tab) and return it.
    ///
    /// Returns `None` only when the grid has no rows at all.
    pub fn advance(&mut self, store: &GridStore) -> Option<CellAddress> {
        self.revalidate(store);

        let Some(current) = self.row.clone() else {
            let first = store.groups().first()?.clone();
            self.row = Some(first);
            self.column = 0;
            return self.address();
        };

        let populated = store.row(&current).map(|r| r.value_count()).unwrap_or(0);
        if self.column >= populated {
            self.row = Some(next_sibling(store, &current));
            self.column = 1;
        } else {
            self.column += 1;
        }

        if let Some(row) = self.row.as_ref().and_then(|id| store.row(id).ok()) {
            if row.is_group() && !row.children.is_empty() && row.value(self.column - 1).is_empty()
            {
                self.column = 0;
            }
        }

        tracing::trace!(row = ?self.row, column = self.column, "cursor advanced");
        self.address()
    }
}

/// The row after `current` within its parent, wrapping around. Among group
/// rows, groups without leaves are skipped.
fn next_sibling(store: &GridStore, current: &RowId) -> RowId {
    let Ok(parent) = store.parent_of(current) else {
        return current.clone();
    };
    let Ok(siblings) = store.children_of(parent) else {
        return current.clone();
    };
    let Some(start) = siblings.iter().position(|s| s == current) else {
        return current.clone();
    };

    let skip_empty_groups = parent.is_root();
    (1..=siblings.len())
        .map(|step| &siblings[(start + step) % siblings.len()])
        .find(|candidate| {
            !skip_empty_groups
                || *candidate == current
                || store
                    .children_of(candidate)
                    .is_ok_and(|children| !children.is_empty())
        })
        .cloned()
        .unwrap_or_else(|| current.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::model::{InsertAt, NewRow};

    fn vehicles() -> GridStore {
        let mut store = GridStore::new(4);
        let sedan = store
            .insert_row(&RowId::root(), NewRow::group("Sedan"), InsertAt::End)
            .unwrap();
        store
            .insert_row(&sedan, NewRow::leaf(["Nissan", "2010"]), InsertAt::End)
            .unwrap();
        store
            .insert_row(&sedan, NewRow::leaf(["Subaru", "1990", "White"]), InsertAt::End)
            .unwrap();
        store
            .insert_row(&RowId::root(), NewRow::group("Empty"), InsertAt::End)
            .unwrap();
        let suv = store
            .insert_row(&RowId::root(), NewRow::group("SUVs"), InsertAt::End)
            .unwrap();
        store
            .insert_row(&suv, NewRow::leaf(["Blue Whale"]), InsertAt::End)
            .unwrap();
        store
    }

    #[test]
    fn test_first_tab_lands_on_first_group_label() {
        let store = vehicles();
        let mut cursor = GridCursor::new();
        assert_eq!(cursor.advance(&store), Some(CellAddress::new("Sedan", 0)));
    }

    #[test]
    fn test_tab_walks_values_then_wraps_within_group() {
        let store = vehicles();
        let mut cursor = GridCursor::at(CellAddress::new("I001", 1));

        assert_eq!(cursor.advance(&store), Some(CellAddress::new("I001", 2)));
        // I001 has two values: column 2 is its last populated cell
        assert_eq!(cursor.advance(&store), Some(CellAddress::new("I002", 1)));
        assert_eq!(cursor.advance(&store), Some(CellAddress::new("I002", 2)));
        assert_eq!(cursor.advance(&store), Some(CellAddress::new("I002", 3)));
        assert_eq!(cursor.advance(&store), Some(CellAddress::new("I001", 1)));
    }

    #[test]
    fn test_tab_between_groups_skips_empty_groups() {
        let store = vehicles();
        let mut cursor = GridCursor::at(CellAddress::new("Sedan", 0));
        assert_eq!(cursor.advance(&store), Some(CellAddress::new("SUVs", 0)));
        assert_eq!(cursor.advance(&store), Some(CellAddress::new("Sedan", 0)));
    }

    #[test]
    fn test_single_leaf_wraps_to_itself() {
        let store = vehicles();
        let mut cursor = GridCursor::at(CellAddress::new("I003", 1));
        assert_eq!(cursor.advance(&store), Some(CellAddress::new("I003", 1)));
    }

    #[test]
    fn test_stale_cursor_restarts_at_first_group() {
        let mut store = vehicles();
        let mut cursor = GridCursor::at(CellAddress::new("I003", 1));
        store.delete_rows(&[RowId::from("I003")]).unwrap();
        assert_eq!(cursor.advance(&store), Some(CellAddress::new("Sedan", 0)));
    }

    #[test]
    fn test_empty_grid_has_no_target() {
        let store = GridStore::new(3);
        let mut cursor = GridCursor::new();
        assert_eq!(cursor.advance(&store), None);
        assert!(cursor.row.is_none());
    }
}
