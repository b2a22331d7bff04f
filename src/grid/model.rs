//! Grid store: the two-level tree of group rows and leaf rows
//!
//! The store owns every row, keeps each group's children in display order and
//! maintains the zebra tags (`even`/`odd` by position within the group) as a
//! side effect of every structural mutation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::address::{ColumnSlot, RowId};
use super::error::{GridError, GridResult};

/// Display classification of a row. Derived from position, never authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowTag {
    Group,
    Even,
    Odd,
}

impl RowTag {
    /// Tag for a leaf at the given 0-based position within its group
    pub fn for_position(position: usize) -> Self {
        if position % 2 == 0 {
            RowTag::Even
        } else {
            RowTag::Odd
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RowTag::Group => "group",
            RowTag::Even => "even",
            RowTag::Odd => "odd",
        }
    }
}

/// A node in the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    /// Owning group, or the root sentinel for group rows
    pub parent: RowId,
    pub label: String,
    /// One string per data column; may be shorter than the column count
    pub values: Vec<String>,
    pub tag: RowTag,
    /// Whether a group shows its leaves
    pub open: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<RowId>,
}

impl Row {
    pub fn is_group(&self) -> bool {
        self.parent.is_root()
    }

    /// Value at a 0-based data column, empty when beyond the stored length
    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }

    /// Number of stored (populated) values
    pub fn value_count(&self) -> usize {
        self.values.len()
    }
}

/// Where to place a row among its siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertAt {
    /// Before the sibling currently at this index (clamped to the end)
    Index(usize),
    #[default]
    End,
}

impl InsertAt {
    fn resolve(self, len: usize) -> usize {
        match self {
            InsertAt::Index(idx) => idx.min(len),
            InsertAt::End => len,
        }
    }
}

/// Content for a row about to be inserted
#[derive(Debug, Clone, Default)]
pub struct NewRow {
    pub label: String,
    pub values: Vec<String>,
    pub open: bool,
}

impl NewRow {
    pub fn group(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: Vec::new(),
            open: true,
        }
    }

    pub fn leaf<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: String::new(),
            values: values.into_iter().map(Into::into).collect(),
            open: false,
        }
    }

    /// A leaf with one empty value per column
    pub fn blank(column_count: usize) -> Self {
        Self::leaf(vec![String::new(); column_count])
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

/// The tree of rows plus the fixed data-column count
#[derive(Debug, Clone, Default)]
pub struct GridStore {
    rows: HashMap<RowId, Row>,
    /// Group rows in display order
    groups: Vec<RowId>,
    column_count: usize,
    next_leaf_id: u32,
}

impl GridStore {
    pub fn new(column_count: usize) -> Self {
        Self {
            rows: HashMap::new(),
            groups: Vec::new(),
            column_count,
            next_leaf_id: 1,
        }
    }

    /// Number of data columns (excluding the label column)
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn contains(&self, id: &RowId) -> bool {
        self.rows.contains_key(id)
    }

    pub fn row(&self, id: &RowId) -> GridResult<&Row> {
        self.rows
            .get(id)
            .ok_or_else(|| GridError::NotFound(id.clone()))
    }

    fn row_mut(&mut self, id: &RowId) -> GridResult<&mut Row> {
        self.rows
            .get_mut(id)
            .ok_or_else(|| GridError::NotFound(id.clone()))
    }

    pub fn is_group(&self, id: &RowId) -> bool {
        self.rows.get(id).is_some_and(Row::is_group)
    }

    pub fn parent_of(&self, id: &RowId) -> GridResult<&RowId> {
        self.row(id).map(|row| &row.parent)
    }

    /// Group rows in display order
    pub fn groups(&self) -> &[RowId] {
        &self.groups
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Ordered children of a row; the root id yields the group rows
    pub fn children_of(&self, id: &RowId) -> GridResult<&[RowId]> {
        if id.is_root() {
            return Ok(&self.groups);
        }
        Ok(&self.row(id)?.children)
    }

    /// Position of a row within its parent's children
    pub fn index_in_parent(&self, id: &RowId) -> GridResult<usize> {
        let parent = self.parent_of(id)?;
        self.children_of(parent)?
            .iter()
            .position(|child| child == id)
            .ok_or_else(|| GridError::NotFound(id.clone()))
    }

    /// (group index, position) as displayed; a group sits at position 0 and
    /// its leaves follow from 1
    fn display_position(&self, id: &RowId) -> Option<(usize, usize)> {
        let row = self.rows.get(id)?;
        if row.is_group() {
            let group = self.groups.iter().position(|g| g == id)?;
            return Some((group, 0));
        }
        let group = self.groups.iter().position(|g| *g == row.parent)?;
        let index = self.index_in_parent(id).ok()?;
        Some((group, index + 1))
    }

    /// `ids` reordered top to bottom as displayed. Unknown ids keep their
    /// relative order at the end.
    pub fn in_display_order(&self, ids: &[RowId]) -> Vec<RowId> {
        let mut ordered = ids.to_vec();
        ordered.sort_by_key(|id| self.display_position(id).unwrap_or((usize::MAX, usize::MAX)));
        ordered
    }

    /// Every leaf row, group by group
    pub fn leaves(&self) -> impl Iterator<Item = &Row> + '_ {
        self.groups
            .iter()
            .filter_map(|group| self.rows.get(group))
            .flat_map(|group| group.children.iter())
            .filter_map(|leaf| self.rows.get(leaf))
    }

    // =========================================================================
    // Structural mutation
    // =========================================================================

    /// Insert a row under `parent` and return its id.
    ///
    /// Under the root a group row is created whose id is its label; a label
    /// already used by a group gets a single `"1"` suffix. Under a group a leaf
    /// is created with a generated id and its values truncated to the column
    /// count. The group's zebra tags are recomputed afterwards.
    pub fn insert_row(&mut self, parent: &RowId, row: NewRow, at: InsertAt) -> GridResult<RowId> {
        if parent.is_root() {
            return self.insert_group(row, at);
        }

        let group = self.row(parent)?;
        if !group.is_group() {
            return Err(GridError::NotAGroup(parent.clone()));
        }
        let position = at.resolve(group.children.len());
        let tag = RowTag::for_position(group.children.len());

        let id = self.generate_leaf_id();
        let mut values = row.values;
        values.truncate(self.column_count);

        self.rows.insert(
            id.clone(),
            Row {
                id: id.clone(),
                parent: parent.clone(),
                label: row.label,
                values,
                tag,
                open: false,
                children: Vec::new(),
            },
        );
        self.row_mut(parent)?.children.insert(position, id.clone());
        self.retag_group(parent)?;

        tracing::trace!(%id, %parent, position, "inserted leaf row");
        Ok(id)
    }

    fn insert_group(&mut self, row: NewRow, at: InsertAt) -> GridResult<RowId> {
        if row.label.is_empty() {
            return Err(GridError::EmptyGroupLabel);
        }

        let mut label = row.label;
        if self.groups.iter().any(|g| g.as_str() == label) {
            label.push('1');
        }
        let id = RowId::new(label.clone());
        if self.rows.contains_key(&id) {
            return Err(GridError::DuplicateId(id));
        }

        let mut values = row.values;
        values.truncate(self.column_count);
        let position = at.resolve(self.groups.len());

        self.rows.insert(
            id.clone(),
            Row {
                id: id.clone(),
                parent: RowId::root(),
                label,
                values,
                tag: RowTag::Group,
                open: row.open,
                children: Vec::new(),
            },
        );
        self.groups.insert(position, id.clone());

        tracing::trace!(%id, position, "inserted group row");
        Ok(id)
    }

    fn generate_leaf_id(&mut self) -> RowId {
        loop {
            let id = RowId::new(format!("I{:03X}", self.next_leaf_id));
            self.next_leaf_id += 1;
            if !self.rows.contains_key(&id) {
                return id;
            }
        }
    }

    /// Remove rows (and the leaves of removed groups).
    ///
    /// Every id is validated before anything is removed, so a stale id leaves
    /// the tree untouched. Returns the number of rows removed.
    pub fn delete_rows(&mut self, ids: &[RowId]) -> GridResult<usize> {
        if let Some(missing) = ids.iter().find(|id| !self.rows.contains_key(*id)) {
            return Err(GridError::NotFound(missing.clone()));
        }

        let mut removed = 0;
        let mut touched_groups: Vec<RowId> = Vec::new();

        for id in ids {
            // Already gone as the child of a group deleted earlier in this batch
            let Some(row) = self.rows.remove(id) else {
                continue;
            };
            removed += 1;

            if row.is_group() {
                self.groups.retain(|g| g != id);
                for child in &row.children {
                    if self.rows.remove(child).is_some() {
                        removed += 1;
                    }
                }
                touched_groups.retain(|g| g != id);
            } else {
                if let Some(group) = self.rows.get_mut(&row.parent) {
                    group.children.retain(|c| c != id);
                }
                if !touched_groups.contains(&row.parent) {
                    touched_groups.push(row.parent);
                }
            }
        }

        for group in touched_groups {
            if self.rows.contains_key(&group) {
                self.retag_group(&group)?;
            }
        }

        tracing::debug!(requested = ids.len(), removed, "deleted rows");
        Ok(removed)
    }

    /// Move a row to a new index among its current siblings
    pub fn move_row(&mut self, id: &RowId, index: usize) -> GridResult<()> {
        let parent = self.parent_of(id)?.clone();
        let siblings = if parent.is_root() {
            &mut self.groups
        } else {
            &mut self.row_mut(&parent)?.children
        };

        let from = siblings
            .iter()
            .position(|s| s == id)
            .ok_or_else(|| GridError::NotFound(id.clone()))?;
        let moved = siblings.remove(from);
        let to = index.min(siblings.len());
        siblings.insert(to, moved);

        if !parent.is_root() {
            self.retag_group(&parent)?;
        }
        Ok(())
    }

    /// Replace a group's child order. `order` must be a permutation of the
    /// current children.
    pub(crate) fn reorder_children(&mut self, group: &RowId, order: Vec<RowId>) -> GridResult<()> {
        let row = self.row_mut(group)?;
        debug_assert_eq!(row.children.len(), order.len());
        row.children = order;
        self.retag_group(group)
    }

    pub fn set_open(&mut self, id: &RowId, open: bool) -> GridResult<()> {
        let row = self.row_mut(id)?;
        if !row.is_group() {
            return Err(GridError::NotAGroup(id.clone()));
        }
        row.open = open;
        Ok(())
    }

    pub fn toggle_open(&mut self, id: &RowId) -> GridResult<bool> {
        let open = !self.row(id)?.open;
        self.set_open(id, open)?;
        Ok(open)
    }

    // =========================================================================
    // Cell access
    // =========================================================================

    /// Text at a cell. Column 0 is the label; reads past the stored values
    /// yield an empty string.
    pub fn get_value(&self, id: &RowId, column: usize) -> GridResult<&str> {
        let row = self.row(id)?;
        Ok(match ColumnSlot::from_column(column) {
            ColumnSlot::Label => row.label.as_str(),
            ColumnSlot::Value(idx) => row.value(idx),
        })
    }

    /// Write a cell, padding the value list with empty strings as needed
    pub fn set_value(&mut self, id: &RowId, column: usize, text: &str) -> GridResult<()> {
        self.check_column(column)?;
        let row = self.row_mut(id)?;
        match ColumnSlot::from_column(column) {
            ColumnSlot::Label => row.label = text.to_string(),
            ColumnSlot::Value(idx) => {
                if row.values.len() <= idx {
                    row.values.resize(idx + 1, String::new());
                }
                row.values[idx] = text.to_string();
            }
        }
        Ok(())
    }

    /// Blank one column on every leaf row of every group
    pub fn clear_column(&mut self, column: usize) -> GridResult<usize> {
        self.check_column(column)?;
        let leaves: Vec<RowId> = self.leaves().map(|row| row.id.clone()).collect();
        for leaf in &leaves {
            self.set_value(leaf, column, "")?;
        }
        tracing::debug!(column, cleared = leaves.len(), "cleared column");
        Ok(leaves.len())
    }

    pub(crate) fn check_column(&self, column: usize) -> GridResult<()> {
        if column > self.column_count {
            return Err(GridError::ColumnOutOfRange {
                column,
                column_count: self.column_count,
            });
        }
        Ok(())
    }

    // =========================================================================
    // Zebra tags
    // =========================================================================

    /// Recompute `even`/`odd` tags for one group's leaves by position
    pub fn retag_group(&mut self, group: &RowId) -> GridResult<()> {
        let children = self.row(group)?.children.clone();
        for (position, child) in children.iter().enumerate() {
            if let Some(row) = self.rows.get_mut(child) {
                row.tag = RowTag::for_position(position);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_group(leaves: usize) -> (GridStore, RowId) {
        let mut store = GridStore::new(4);
        let group = store
            .insert_row(&RowId::root(), NewRow::group("Sedan"), InsertAt::End)
            .unwrap();
        for i in 0..leaves {
            store
                .insert_row(&group, NewRow::leaf([format!("car{}", i)]), InsertAt::End)
                .unwrap();
        }
        (store, group)
    }

    fn tags(store: &GridStore, group: &RowId) -> Vec<RowTag> {
        store
            .children_of(group)
            .unwrap()
            .iter()
            .map(|id| store.row(id).unwrap().tag)
            .collect()
    }

    #[test]
    fn test_insert_group_uses_label_as_id() {
        let (store, group) = store_with_group(0);
        assert_eq!(group.as_str(), "Sedan");
        assert_eq!(store.row(&group).unwrap().tag, RowTag::Group);
        assert_eq!(store.children_of(&RowId::root()).unwrap(), &[group]);
    }

    #[test]
    fn test_duplicate_group_label_gets_suffix() {
        let (mut store, _) = store_with_group(0);
        let second = store
            .insert_row(&RowId::root(), NewRow::group("Sedan"), InsertAt::End)
            .unwrap();
        assert_eq!(second.as_str(), "Sedan1");
        assert_eq!(store.row(&second).unwrap().label, "Sedan1");
    }

    #[test]
    fn test_empty_group_label_rejected() {
        let mut store = GridStore::new(2);
        let err = store
            .insert_row(&RowId::root(), NewRow::group(""), InsertAt::End)
            .unwrap_err();
        assert_eq!(err, GridError::EmptyGroupLabel);
    }

    #[test]
    fn test_leaf_cannot_have_children() {
        let (mut store, group) = store_with_group(1);
        let leaf = store.children_of(&group).unwrap()[0].clone();
        let err = store
            .insert_row(&leaf, NewRow::leaf(["x"]), InsertAt::End)
            .unwrap_err();
        assert_eq!(err, GridError::NotAGroup(leaf));
    }

    #[test]
    fn test_insert_in_middle_retags_group() {
        let (mut store, group) = store_with_group(3);
        store
            .insert_row(&group, NewRow::leaf(["new"]), InsertAt::Index(1))
            .unwrap();
        assert_eq!(
            tags(&store, &group),
            vec![RowTag::Even, RowTag::Odd, RowTag::Even, RowTag::Odd]
        );
        let second = &store.children_of(&group).unwrap()[1];
        assert_eq!(store.get_value(second, 1).unwrap(), "new");
    }

    #[test]
    fn test_leaf_values_truncated_to_column_count() {
        let (mut store, group) = store_with_group(0);
        let leaf = store
            .insert_row(&group, NewRow::leaf(["a", "b", "c", "d", "e"]), InsertAt::End)
            .unwrap();
        assert_eq!(store.row(&leaf).unwrap().values.len(), 4);
    }

    #[test]
    fn test_delete_retags_remaining() {
        let (mut store, group) = store_with_group(4);
        let first = store.children_of(&group).unwrap()[0].clone();
        assert_eq!(store.delete_rows(&[first]).unwrap(), 1);
        assert_eq!(tags(&store, &group), vec![RowTag::Even, RowTag::Odd, RowTag::Even]);
    }

    #[test]
    fn test_delete_group_removes_leaves() {
        let (mut store, group) = store_with_group(2);
        let leaf = store.children_of(&group).unwrap()[0].clone();
        assert_eq!(store.delete_rows(&[group.clone(), leaf]).unwrap(), 3);
        assert!(store.groups().is_empty());
        assert_eq!(store.row_count(), 0);
    }

    #[test]
    fn test_delete_unknown_row_is_not_found() {
        let (mut store, group) = store_with_group(1);
        let err = store
            .delete_rows(&[RowId::from("I999"), group.clone()])
            .unwrap_err();
        assert_eq!(err, GridError::NotFound(RowId::from("I999")));
        assert!(store.contains(&group));
    }

    #[test]
    fn test_get_value_past_end_is_empty() {
        let (store, group) = store_with_group(1);
        let leaf = &store.children_of(&group).unwrap()[0];
        assert_eq!(store.get_value(leaf, 1).unwrap(), "car0");
        assert_eq!(store.get_value(leaf, 3).unwrap(), "");
        assert_eq!(store.get_value(leaf, 0).unwrap(), "");
    }

    #[test]
    fn test_set_value_pads_values() {
        let (mut store, group) = store_with_group(1);
        let leaf = store.children_of(&group).unwrap()[0].clone();
        store.set_value(&leaf, 4, "Plates").unwrap();
        assert_eq!(store.row(&leaf).unwrap().values, vec!["car0", "", "", "Plates"]);

        store.set_value(&leaf, 0, "label").unwrap();
        assert_eq!(store.get_value(&leaf, 0).unwrap(), "label");

        let err = store.set_value(&leaf, 5, "x").unwrap_err();
        assert_eq!(
            err,
            GridError::ColumnOutOfRange {
                column: 5,
                column_count: 4
            }
        );
    }

    #[test]
    fn test_move_row_retags() {
        let (mut store, group) = store_with_group(3);
        let last = store.children_of(&group).unwrap()[2].clone();
        store.move_row(&last, 0).unwrap();
        assert_eq!(store.children_of(&group).unwrap()[0], last);
        assert_eq!(store.row(&last).unwrap().tag, RowTag::Even);
    }

    #[test]
    fn test_toggle_open() {
        let (mut store, group) = store_with_group(0);
        assert!(store.row(&group).unwrap().open);
        assert!(!store.toggle_open(&group).unwrap());
        assert!(!store.row(&group).unwrap().open);
    }

    #[test]
    fn test_leaf_ids_are_sequential_hex() {
        let (store, group) = store_with_group(11);
        let children = store.children_of(&group).unwrap();
        assert_eq!(children[0].as_str(), "I001");
        assert_eq!(children[9].as_str(), "I00A");
    }

    #[test]
    fn test_in_display_order() {
        let (mut store, sedan) = store_with_group(2);
        let suv = store
            .insert_row(&RowId::root(), NewRow::group("SUVs"), InsertAt::End)
            .unwrap();
        let whale = store
            .insert_row(&suv, NewRow::leaf(["Blue Whale"]), InsertAt::End)
            .unwrap();
        let clicked = vec![
            whale.clone(),
            RowId::from("gone"),
            RowId::from("I002"),
            sedan.clone(),
            RowId::from("I001"),
        ];
        assert_eq!(
            store.in_display_order(&clicked),
            vec![
                sedan,
                RowId::from("I001"),
                RowId::from("I002"),
                whale,
                RowId::from("gone"),
            ]
        );
    }
}
