//! Grid update functions
//!
//! Handles GridMsg messages: selection, Tab navigation, sorting, structural
//! edits and clipboard round trips.

use crate::commands::Cmd;
use crate::grid::paste::{paste_text, serialize_rows};
use crate::grid::{menu, CellAddress, CommitTrigger, MenuTarget, RowId, SortDirection};
use crate::messages::GridMsg;
use crate::model::AppModel;

use super::edit::commit_overlay;

/// Handle grid messages
pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    // Anything aimed at the grid takes focus from the overlay
    let committed = match &msg {
        GridMsg::CopySelection | GridMsg::PasteAt(_) => None,
        _ => commit_overlay(model, CommitTrigger::Blur),
    };

    let cmd = match msg {
        GridMsg::Select {
            row,
            column,
            extend,
        } => select(model, row, column, extend),
        GridMsg::ClearSelection => clear_selection(model),
        GridMsg::EditCell(target) => open_editor(model, target),
        GridMsg::EditNewRow { column } => edit_new_row(model, column),
        GridMsg::Advance => advance(model),
        GridMsg::HeaderClick { column } => {
            let direction = model.sort.toggle(column);
            sort(model, column, direction)
        }
        GridMsg::Sort { column, direction } => {
            model.sort.record(column, direction);
            sort(model, column, direction)
        }
        GridMsg::ClearColumn { column } => clear_column(model, column),
        GridMsg::DeleteSelected => delete_selected(model),
        GridMsg::CopySelection => copy_selection(model),
        GridMsg::PasteAt(target) => Some(Cmd::ReadClipboard { target }),
        GridMsg::PasteText { target, text } => paste(model, &target, &text),
        GridMsg::ToggleGroup(row) => toggle_group(model, &row),
    };

    match (committed, cmd) {
        (Some(a), Some(b)) => Some(Cmd::batch(vec![a, b])),
        (a, b) => a.or(b),
    }
}

fn select(model: &mut AppModel, row: RowId, column: usize, extend: bool) -> Option<Cmd> {
    if !model.grid.contains(&row) {
        tracing::debug!(%row, "ignoring click on a row that no longer exists");
        return None;
    }
    model.cursor.select(CellAddress::new(row.clone(), column));
    model.select_row(row, extend);
    Some(Cmd::redraw_rows())
}

fn clear_selection(model: &mut AppModel) -> Option<Cmd> {
    if model.selection.is_empty() && model.cursor.row.is_none() {
        return None;
    }
    model.selection.clear();
    model.cursor.clear();
    Some(Cmd::redraw_rows())
}

/// Open the overlay on a cell and make it the cursor target
fn open_editor(model: &mut AppModel, target: CellAddress) -> Option<Cmd> {
    let constraints = model.overlay_constraints();
    if let Err(err) = model.session.open(&model.grid, target, constraints) {
        model.report_error("open editor", err);
        return None;
    }
    let target = model.session.target()?.clone();
    model.select_row(target.row.clone(), false);
    model.cursor.select(target);
    Some(Cmd::redraw_overlay())
}

/// Double-click below the last row: append a blank leaf to the last group
fn edit_new_row(model: &mut AppModel, column: usize) -> Option<Cmd> {
    match menu::insert_row_at(&mut model.grid, &MenuTarget::nothing(column)) {
        Ok(Some(row)) => {
            open_editor(model, CellAddress::new(row, column));
            Some(Cmd::Redraw)
        }
        Ok(None) => None,
        Err(err) => {
            model.report_error("append row", err);
            None
        }
    }
}

/// Tab: move to the next cell and edit it
fn advance(model: &mut AppModel) -> Option<Cmd> {
    let target = model.cursor.advance(&model.grid)?;
    open_editor(model, target)
}

fn sort(model: &mut AppModel, column: usize, direction: SortDirection) -> Option<Cmd> {
    if let Err(err) = model.grid.sort_by_column(column, direction) {
        model.report_error("sort", err);
        return None;
    }
    Some(Cmd::redraw_rows())
}

fn clear_column(model: &mut AppModel, column: usize) -> Option<Cmd> {
    match model.grid.clear_column(column) {
        Ok(_) => Some(Cmd::redraw_rows()),
        Err(err) => {
            model.report_error("clear column", err);
            None
        }
    }
}

fn delete_selected(model: &mut AppModel) -> Option<Cmd> {
    if model.selection.is_empty() {
        return None;
    }
    // Rows may have gone away since they were selected
    model.prune_stale_targets();
    let selected = std::mem::take(&mut model.selection);
    if let Err(err) = model.grid.delete_rows(&selected) {
        model.report_error("delete rows", err);
    }
    model.prune_stale_targets();
    Some(Cmd::redraw_rows())
}

fn copy_selection(model: &mut AppModel) -> Option<Cmd> {
    if model.selection.is_empty() {
        tracing::debug!("nothing to copy");
        return None;
    }
    let rows = model.grid.in_display_order(&model.selection);
    match serialize_rows(&model.grid, &rows) {
        Ok(text) => Some(Cmd::WriteClipboard { text }),
        Err(err) => {
            model.report_error("copy", err);
            model.prune_stale_targets();
            None
        }
    }
}

fn paste(model: &mut AppModel, target: &MenuTarget, text: &str) -> Option<Cmd> {
    if text.is_empty() {
        tracing::debug!("clipboard empty, nothing to paste");
        return None;
    }

    let anchor = match menu::paste_anchor(&mut model.grid, target) {
        Ok(Some(anchor)) => anchor,
        Ok(None) => return None,
        Err(err) => {
            model.report_error("paste", err);
            return None;
        }
    };

    if let Err(err) = paste_text(&mut model.grid, &anchor, text) {
        // Rows written before the failure stay written
        model.report_error("paste", err);
    }
    model.prune_stale_targets();
    Some(Cmd::redraw_rows())
}

fn toggle_group(model: &mut AppModel, row: &RowId) -> Option<Cmd> {
    match model.grid.toggle_open(row) {
        Ok(open) => {
            tracing::debug!(%row, open, "toggled group");
            Some(Cmd::redraw_rows())
        }
        Err(err) => {
            model.report_error("toggle group", err);
            None
        }
    }
}
