//! Overlay editor update functions

use crate::commands::Cmd;
use crate::grid::{CommitOutcome, CommitTrigger};
use crate::messages::EditMsg;
use crate::model::AppModel;

/// Handle overlay editor messages
pub fn update_edit(model: &mut AppModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::Text(text_msg) => {
            if !model.is_editing() {
                return None;
            }
            model.session.edit(text_msg);
            Some(Cmd::redraw_overlay())
        }
        EditMsg::PasteClipboard => model
            .is_editing()
            .then_some(Cmd::ReadClipboardIntoOverlay),
        EditMsg::Confirm => commit_overlay(model, CommitTrigger::Confirm),
        EditMsg::Blur => commit_overlay(model, CommitTrigger::Blur),
    }
}

/// Commit and close the overlay if one is open.
///
/// Every grid interaction that moves focus away from the overlay goes through
/// here first. Failures are reported; the overlay is closed either way.
pub(crate) fn commit_overlay(model: &mut AppModel, trigger: CommitTrigger) -> Option<Cmd> {
    if !model.is_editing() {
        return None;
    }

    match model.session.commit(&mut model.grid, trigger) {
        Ok(CommitOutcome::Committed { target, report }) => {
            tracing::debug!(
                %target,
                written = report.cells_written,
                appended = report.rows_appended.len(),
                "overlay committed"
            );
            model.cursor.select(target);
        }
        Ok(CommitOutcome::NothingOpen) => {}
        Err(err) => model.report_error("commit overlay", err),
    }

    model.prune_stale_targets();
    Some(Cmd::redraw_rows_and_overlay())
}
