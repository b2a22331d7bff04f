//! Context menu: named actions over the grid operations
//!
//! Every action carries the [`MenuTarget`] captured when the menu was opened,
//! so entries never share mutable click state. The handlers that touch the
//! rest of the application (selection, clipboard) live in `update::menu`;
//! this module holds the entry table and the placement rules.

use super::address::{CellAddress, RowId};
use super::error::GridResult;
use super::model::{GridStore, InsertAt, NewRow};
use crate::host::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    SortAscending,
    SortDescending,
    DeleteSelectedRows,
    ClearColumn,
    AddRow,
    Copy,
    Paste,
}

/// Menu entry definition
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub action: MenuAction,
    pub label: &'static str,
    /// Cascade the entry is nested under, if any
    pub submenu: Option<&'static str>,
}

pub const SORT_SUBMENU: &str = "⬆⬇ Sort";

/// Entries in display order
pub static MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry {
        action: MenuAction::SortAscending,
        label: "⬆ Sort Ascending",
        submenu: Some(SORT_SUBMENU),
    },
    MenuEntry {
        action: MenuAction::SortDescending,
        label: "⬇ Sort Descending",
        submenu: Some(SORT_SUBMENU),
    },
    MenuEntry {
        action: MenuAction::DeleteSelectedRows,
        label: "Delete Selected Rows",
        submenu: None,
    },
    MenuEntry {
        action: MenuAction::ClearColumn,
        label: "Clear Column",
        submenu: None,
    },
    MenuEntry {
        action: MenuAction::AddRow,
        label: "Add New Row",
        submenu: None,
    },
    MenuEntry {
        action: MenuAction::Copy,
        label: "Copy",
        submenu: None,
    },
    MenuEntry {
        action: MenuAction::Paste,
        label: "Paste",
        submenu: None,
    },
];

impl MenuAction {
    pub fn label(self) -> &'static str {
        MENU_ENTRIES
            .iter()
            .find(|entry| entry.action == self)
            .map(|entry| entry.label)
            .unwrap_or("")
    }
}

/// Where the menu was opened, resolved through the host at right-click time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTarget {
    pub region: Region,
    /// Row under the pointer, if any
    pub row: Option<RowId>,
    /// Text column under the pointer
    pub column: usize,
}

impl MenuTarget {
    pub fn new(region: Region, row: Option<RowId>, column: usize) -> Self {
        Self {
            region,
            row,
            column,
        }
    }

    pub fn nothing(column: usize) -> Self {
        Self::new(Region::Nothing, None, column)
    }

    pub fn heading(column: usize) -> Self {
        Self::new(Region::Heading, None, column)
    }
}

/// Insert one blank leaf at the place the menu was opened.
///
/// - group row: before its first leaf
/// - leaf row: right after it
/// - heading: after the first leaf of the first group
/// - empty space: at the end of the last group
///
/// Returns `None` when the grid has no group to hold the row.
pub fn insert_row_at(store: &mut GridStore, target: &MenuTarget) -> GridResult<Option<RowId>> {
    let placement = match (target.region, &target.row) {
        (Region::Tree | Region::Cell, Some(row)) if store.is_group(row) => {
            Some((row.clone(), InsertAt::Index(0)))
        }
        (Region::Tree | Region::Cell, Some(row)) => {
            let parent = store.parent_of(row)?.clone();
            let index = store.index_in_parent(row)?;
            Some((parent, InsertAt::Index(index + 1)))
        }
        (Region::Heading, _) => store.groups().first().map(|group| {
            let has_leaf = store.children_of(group).is_ok_and(|c| !c.is_empty());
            let at = if has_leaf {
                InsertAt::Index(1)
            } else {
                InsertAt::Index(0)
            };
            (group.clone(), at)
        }),
        _ => store
            .groups()
            .last()
            .map(|group| (group.clone(), InsertAt::End)),
    };

    let Some((group, at)) = placement else {
        tracing::warn!(region = ?target.region, "no group to insert a row into");
        return Ok(None);
    };
    let id = store.insert_row(&group, NewRow::blank(store.column_count()), at)?;
    tracing::debug!(%id, %group, ?at, "inserted row from menu");
    Ok(Some(id))
}

/// Resolve the anchor cell for a paste at the menu location.
///
/// On empty space a blank row is appended first and becomes the anchor. On a
/// heading the anchor is the first leaf of the first group (or the group
/// itself when it has no leaves).
pub fn paste_anchor(store: &mut GridStore, target: &MenuTarget) -> GridResult<Option<CellAddress>> {
    let row = match (target.region, &target.row) {
        (Region::Tree | Region::Cell, Some(row)) => Some(row.clone()),
        (Region::Heading, _) => store.groups().first().map(|group| {
            store
                .children_of(group)
                .ok()
                .and_then(|children| children.first())
                .unwrap_or(group)
                .clone()
        }),
        _ => insert_row_at(store, &MenuTarget::nothing(target.column))?,
    };
    Ok(row.map(|row| CellAddress::new(row, target.column)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> GridStore {
        let mut store = GridStore::new(3);
        for (group, leaves) in [("Sedan", 2), ("Empty", 0), ("SUVs", 1)] {
            let id = store
                .insert_row(&RowId::root(), NewRow::group(group), InsertAt::End)
                .unwrap();
            for i in 0..leaves {
                store
                    .insert_row(&id, NewRow::leaf([format!("{}{}", group, i)]), InsertAt::End)
                    .unwrap();
            }
        }
        store
    }

    fn position(store: &GridStore, id: &RowId) -> (RowId, usize) {
        (
            store.parent_of(id).unwrap().clone(),
            store.index_in_parent(id).unwrap(),
        )
    }

    #[test]
    fn test_entries_in_menu_order() {
        let labels: Vec<&str> = MENU_ENTRIES.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                "⬆ Sort Ascending",
                "⬇ Sort Descending",
                "Delete Selected Rows",
                "Clear Column",
                "Add New Row",
                "Copy",
                "Paste"
            ]
        );
        assert_eq!(MenuAction::Paste.label(), "Paste");
    }

    #[test]
    fn test_insert_on_group_goes_first() {
        let mut store = store();
        let target = MenuTarget::new(Region::Tree, Some("Sedan".into()), 0);
        let id = insert_row_at(&mut store, &target).unwrap().unwrap();
        assert_eq!(position(&store, &id), ("Sedan".into(), 0));
        assert_eq!(store.row(&id).unwrap().values, vec!["", "", ""]);
    }

    #[test]
    fn test_insert_on_cell_goes_after_row() {
        let mut store = store();
        let target = MenuTarget::new(Region::Cell, Some("I001".into()), 2);
        let id = insert_row_at(&mut store, &target).unwrap().unwrap();
        assert_eq!(position(&store, &id), ("Sedan".into(), 1));
    }

    #[test]
    fn test_insert_on_heading_and_empty_space() {
        let mut store = store();
        let id = insert_row_at(&mut store, &MenuTarget::heading(1)).unwrap().unwrap();
        assert_eq!(position(&store, &id), ("Sedan".into(), 1));

        let id = insert_row_at(&mut store, &MenuTarget::nothing(1)).unwrap().unwrap();
        assert_eq!(position(&store, &id), ("SUVs".into(), 1));
    }

    #[test]
    fn test_insert_without_groups() {
        let mut store = GridStore::new(2);
        assert_eq!(insert_row_at(&mut store, &MenuTarget::nothing(1)).unwrap(), None);
    }

    #[test]
    fn test_paste_anchor_on_empty_space_appends_row() {
        let mut store = store();
        let anchor = paste_anchor(&mut store, &MenuTarget::nothing(2)).unwrap().unwrap();
        assert_eq!(position(&store, &anchor.row), ("SUVs".into(), 1));
        assert_eq!(anchor.column, 2);
    }

    #[test]
    fn test_paste_anchor_on_heading_is_first_leaf() {
        let mut store = store();
        let anchor = paste_anchor(&mut store, &MenuTarget::heading(3)).unwrap().unwrap();
        assert_eq!(anchor, CellAddress::new("I001", 3));
    }
}
