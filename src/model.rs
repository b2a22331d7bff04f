//! Application model: the grid plus everything the event loop tracks about it
//!
//! All state lives here and is only changed by `update`.

use crate::config::GridConfig;
use crate::editable::EditConstraints;
use crate::grid::{
    EditSession, GridCursor, GridError, GridResult, GridStore, MenuTarget, RowId, RowTag,
    SortState,
};

#[derive(Debug, Clone)]
pub struct AppModel {
    pub grid: GridStore,
    pub config: GridConfig,
    /// Targeted cell (Tab navigation, overlay placement)
    pub cursor: GridCursor,
    /// Selected rows, in selection order (copy and delete act on these)
    pub selection: Vec<RowId>,
    /// Per-column header sort toggles
    pub sort: SortState,
    pub session: EditSession,
    /// Location of the open context menu
    pub context_menu: Option<MenuTarget>,
    /// Last grid error, shown by hosts that have a status line
    pub last_error: Option<GridError>,
}

impl AppModel {
    /// Build the grid from the configured schema and seed rows
    pub fn new(config: GridConfig) -> GridResult<Self> {
        let grid = config.build_store()?;
        Ok(Self::with_store(grid, config))
    }

    pub fn with_store(grid: GridStore, config: GridConfig) -> Self {
        Self {
            grid,
            config,
            cursor: GridCursor::new(),
            selection: Vec::new(),
            sort: SortState::new(),
            session: EditSession::default(),
            context_menu: None,
            last_error: None,
        }
    }

    pub fn overlay_constraints(&self) -> EditConstraints {
        EditConstraints::overlay().with_max_length(self.config.overlay_max_length)
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    /// Replace the row selection, or add to it when `extend` is set
    pub fn select_row(&mut self, row: RowId, extend: bool) {
        if !extend {
            self.selection.clear();
        }
        if !self.selection.contains(&row) {
            self.selection.push(row);
        }
    }

    pub fn is_selected(&self, row: &RowId) -> bool {
        self.selection.contains(row)
    }

    /// Drop selected rows and the cursor row if they no longer exist
    pub fn prune_stale_targets(&mut self) {
        let grid = &self.grid;
        self.selection.retain(|id| grid.contains(id));
        self.cursor.revalidate(&self.grid);
    }

    /// Record a grid error. The event loop keeps running.
    pub fn report_error(&mut self, context: &str, err: GridError) {
        tracing::warn!(%err, context, "grid operation failed");
        self.last_error = Some(err);
    }

    /// Check the structural invariants: leaf parents are live groups and zebra
    /// tags match positions.
    pub fn check_invariants(&self) -> Result<(), String> {
        for group in self.grid.groups() {
            let row = self.grid.row(group).map_err(|e| e.to_string())?;
            if !row.parent.is_root() || row.tag != RowTag::Group {
                return Err(format!("group {} is not a top-level group row", group));
            }
            for (position, leaf) in row.children.iter().enumerate() {
                let leaf_row = self.grid.row(leaf).map_err(|e| e.to_string())?;
                if &leaf_row.parent != group {
                    return Err(format!("leaf {} does not point at group {}", leaf, group));
                }
                if leaf_row.tag != RowTag::for_position(position) {
                    return Err(format!(
                        "leaf {} at position {} is tagged {}",
                        leaf,
                        position,
                        leaf_row.tag.name()
                    ));
                }
                if leaf_row.values.len() > self.grid.column_count() {
                    return Err(format!("leaf {} has too many values", leaf));
                }
            }
        }
        Ok(())
    }

    /// Panic with context if an invariant is broken (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        if let Err(problem) = self.check_invariants() {
            panic!("grid invariant broken after {}: {}", context, problem);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_row_extend() {
        let mut model = AppModel::new(GridConfig::default()).unwrap();
        model.select_row("I001".into(), false);
        model.select_row("I002".into(), true);
        model.select_row("I001".into(), true);
        assert_eq!(model.selection, vec![RowId::from("I001"), RowId::from("I002")]);

        model.select_row("SUVs".into(), false);
        assert_eq!(model.selection, vec![RowId::from("SUVs")]);
    }

    #[test]
    fn test_prune_stale_targets() {
        let mut model = AppModel::new(GridConfig::default()).unwrap();
        model.select_row("I001".into(), false);
        model.select_row("I003".into(), true);
        model.cursor.select(crate::grid::CellAddress::new("I003", 2));

        model.grid.delete_rows(&[RowId::from("I003")]).unwrap();
        model.prune_stale_targets();
        assert_eq!(model.selection, vec![RowId::from("I001")]);
        assert!(model.cursor.row.is_none());
    }

    #[test]
    fn test_default_model_holds_invariants() {
        let model = AppModel::new(GridConfig::default()).unwrap();
        assert!(model.check_invariants().is_ok());
    }
}
