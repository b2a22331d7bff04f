//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use treegrid::config::{ColumnSpec, GridConfig, GroupSeed};
use treegrid::grid::{GridStore, RowId, RowTag};
use treegrid::host::{CellBox, GridHost, MemoryClipboard, Region};
use treegrid::model::AppModel;
use treegrid::runtime::GridRuntime;
use treegrid::view::visible_rows;

/// Row height and column width of [`TableLayout`], in pixels
pub const ROW_HEIGHT: f32 = 20.0;
pub const COLUMN_WIDTH: f32 = 100.0;

/// Host geometry for a plain table: a heading strip, then one row per
/// visible grid row. Column `n` spans `n * 100 .. (n + 1) * 100`.
pub struct TableLayout {
    rows: Vec<RowId>,
}

impl TableLayout {
    pub fn of(model: &AppModel) -> Self {
        Self {
            rows: visible_rows(model).into_iter().map(|row| row.id).collect(),
        }
    }

    /// Centre of a cell, for synthesizing pointer events
    pub fn point(&self, row: &str, column: usize) -> (f32, f32) {
        let index = self
            .rows
            .iter()
            .position(|r| r.as_str() == row)
            .unwrap_or_else(|| panic!("row {} is not visible", row));
        (
            column as f32 * COLUMN_WIDTH + COLUMN_WIDTH / 2.0,
            (index + 1) as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0,
        )
    }

    /// A point below the last row
    pub fn below(&self, column: usize) -> (f32, f32) {
        (
            column as f32 * COLUMN_WIDTH + COLUMN_WIDTH / 2.0,
            (self.rows.len() + 2) as f32 * ROW_HEIGHT,
        )
    }

    pub fn heading(&self, column: usize) -> (f32, f32) {
        (column as f32 * COLUMN_WIDTH + COLUMN_WIDTH / 2.0, ROW_HEIGHT / 2.0)
    }
}

impl GridHost for TableLayout {
    fn identify_region(&self, x: f32, y: f32) -> Region {
        if y < ROW_HEIGHT {
            Region::Heading
        } else if self.identify_row(y).is_none() {
            Region::Nothing
        } else if x < COLUMN_WIDTH {
            Region::Tree
        } else {
            Region::Cell
        }
    }

    fn identify_column(&self, x: f32) -> usize {
        (x / COLUMN_WIDTH) as usize
    }

    fn identify_row(&self, y: f32) -> Option<RowId> {
        if y < ROW_HEIGHT {
            return None;
        }
        let index = ((y - ROW_HEIGHT) / ROW_HEIGHT) as usize;
        self.rows.get(index).cloned()
    }

    fn bounding_box(&self, row: &RowId, column: usize) -> Option<CellBox> {
        let index = self.rows.iter().position(|r| r == row)?;
        Some(CellBox {
            x: column as f32 * COLUMN_WIDTH,
            y: (index + 1) as f32 * ROW_HEIGHT,
            width: COLUMN_WIDTH,
            height: ROW_HEIGHT,
        })
    }
}

/// The demo grid: Sedan (I001, I002) and SUVs (I003), four data columns
pub fn vehicle_model() -> AppModel {
    AppModel::new(GridConfig::default()).unwrap()
}

/// A model with columns `[name, year, color, issue]` and the given groups
pub fn model_with(groups: Vec<GroupSeed>) -> AppModel {
    let columns = ["name", "year", "color", "issue"]
        .iter()
        .map(|id| ColumnSpec::new(*id, *id))
        .collect();
    let mut config = GridConfig::with_columns("type", columns);
    config.groups = groups;
    AppModel::new(config).unwrap()
}

/// Runtime over the demo grid with a private clipboard
pub fn vehicle_runtime() -> GridRuntime<MemoryClipboard> {
    GridRuntime::new(vehicle_model(), MemoryClipboard::default())
}

pub fn id(s: &str) -> RowId {
    RowId::from(s)
}

/// Leaf ids of a group, in order
pub fn children(store: &GridStore, group: &str) -> Vec<RowId> {
    store.children_of(&id(group)).unwrap().to_vec()
}

pub fn values(store: &GridStore, row: &RowId) -> Vec<String> {
    store.row(row).unwrap().values.clone()
}

/// A column's text down a group
pub fn column(store: &GridStore, group: &str, column: usize) -> Vec<String> {
    children(store, group)
        .iter()
        .map(|row| store.get_value(row, column).unwrap().to_string())
        .collect()
}

/// Assert every group's leaves alternate even/odd by position
pub fn assert_zebra(store: &GridStore) {
    for group in store.groups() {
        for (position, leaf) in store.children_of(group).unwrap().iter().enumerate() {
            assert_eq!(
                store.row(leaf).unwrap().tag,
                RowTag::for_position(position),
                "leaf {} at position {} of {}",
                leaf,
                position,
                group
            );
        }
    }
}
