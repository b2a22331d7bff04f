//! Per-group column sort with direction toggling

use std::collections::HashMap;

use super::address::RowId;
use super::error::GridResult;
use super::model::GridStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Remembers, per column, which direction the next header click sorts in
#[derive(Debug, Clone, Default)]
pub struct SortState {
    next: HashMap<usize, SortDirection>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction the next header click on `column` will use
    pub fn next_direction(&self, column: usize) -> SortDirection {
        self.next.get(&column).copied().unwrap_or_default()
    }

    /// Record a sort so the following header click goes the other way
    pub fn record(&mut self, column: usize, direction: SortDirection) {
        self.next.insert(column, direction.reversed());
    }

    /// Header click: returns the direction to sort in and flips the toggle
    pub fn toggle(&mut self, column: usize) -> SortDirection {
        let direction = self.next_direction(column);
        self.record(column, direction);
        direction
    }
}

impl GridStore {
    /// Sort every group's leaves by the text in `column`.
    ///
    /// The sort is stable in both directions: rows with equal text keep their
    /// relative order. Zebra tags are recomputed afterwards.
    pub fn sort_by_column(&mut self, column: usize, direction: SortDirection) -> GridResult<()> {
        self.check_column(column)?;

        for group in self.groups().to_vec() {
            let mut keyed: Vec<(String, RowId)> = self
                .children_of(&group)?
                .iter()
                .map(|id| Ok((self.get_value(id, column)?.to_string(), id.clone())))
                .collect::<GridResult<_>>()?;

            match direction {
                SortDirection::Ascending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
                SortDirection::Descending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
            }

            let order = keyed.into_iter().map(|(_, id)| id).collect();
            self.reorder_children(&group, order)?;
        }

        tracing::debug!(column, ?direction, "sorted groups by column");
        Ok(())
    }
}
