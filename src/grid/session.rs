//! Edit session: the overlay editor lifecycle
//!
//! ```text
//!   Idle --open(cell)--> Editing --confirm | blur--> Idle
//! ```
//!
//! Opening seeds the overlay with the cell's text, fully selected, so typing
//! overwrites it. Confirm (Enter) and blur (focus lost) both commit through
//! the paste engine and always return to `Idle`, whatever the text and even
//! when the commit fails. There is no cancel transition.

use super::address::CellAddress;
use super::error::GridResult;
use super::model::GridStore;
use super::paste::{commit_text, PasteReport};
use crate::editable::{EditConstraints, EditableState, TextEditMsg};

/// The floating input placed over the cell being edited
#[derive(Debug, Clone)]
pub struct OverlayEditor {
    /// Cell the text will be committed to
    pub target: CellAddress,
    pub input: EditableState,
}

impl OverlayEditor {
    pub fn text(&self) -> String {
        self.input.text()
    }
}

/// What ended an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    /// Enter pressed in the overlay
    Confirm,
    /// The overlay lost focus
    Blur,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// No overlay was open
    NothingOpen,
    Committed {
        target: CellAddress,
        report: PasteReport,
    },
}

#[derive(Debug, Clone, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(OverlayEditor),
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    pub fn editor(&self) -> Option<&OverlayEditor> {
        match self {
            EditSession::Editing(editor) => Some(editor),
            EditSession::Idle => None,
        }
    }

    pub fn target(&self) -> Option<&CellAddress> {
        self.editor().map(|editor| &editor.target)
    }

    /// Open the overlay on `target`, seeded with its current text.
    ///
    /// Group rows are only edited through their label, so a data column on a
    /// group row opens the label instead. Replaces any open overlay without
    /// committing it; callers blur the old one first.
    pub fn open(
        &mut self,
        store: &GridStore,
        target: CellAddress,
        constraints: EditConstraints,
    ) -> GridResult<()> {
        store.check_column(target.column)?;
        let target = if store.is_group(&target.row) && !target.is_label() {
            CellAddress::new(target.row, 0)
        } else {
            target
        };
        let seed = store.get_value(&target.row, target.column)?;

        let mut input = EditableState::with_text(seed, constraints);
        input.select_all();

        tracing::debug!(%target, seed, "opening overlay editor");
        *self = EditSession::Editing(OverlayEditor { target, input });
        Ok(())
    }

    /// Feed a keystroke or pasted text to the overlay. Ignored when idle.
    pub fn edit(&mut self, msg: TextEditMsg) -> bool {
        match self {
            EditSession::Editing(editor) => editor.input.apply(msg),
            EditSession::Idle => false,
        }
    }

    /// Commit the overlay text and close it.
    ///
    /// The session is `Idle` afterwards even if the commit fails (for example
    /// when the target row was deleted while editing).
    pub fn commit(&mut self, store: &mut GridStore, trigger: CommitTrigger) -> GridResult<CommitOutcome> {
        let EditSession::Editing(editor) = std::mem::take(self) else {
            return Ok(CommitOutcome::NothingOpen);
        };

        let text = editor.text();
        tracing::debug!(target = %editor.target, ?trigger, len = text.len(), "committing overlay");
        let report = commit_text(store, &editor.target, &text)?;
        Ok(CommitOutcome::Committed {
            target: editor.target,
            report,
        })
    }

    pub fn confirm(&mut self, store: &mut GridStore) -> GridResult<CommitOutcome> {
        self.commit(store, CommitTrigger::Confirm)
    }

    pub fn blur(&mut self, store: &mut GridStore) -> GridResult<CommitOutcome> {
        self.commit(store, CommitTrigger::Blur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::MoveTarget;
    use crate::grid::address::RowId;
    use crate::grid::error::GridError;
    use crate::grid::model::{InsertAt, NewRow};

    fn store() -> (GridStore, RowId) {
        let mut store = GridStore::new(4);
        let group = store
            .insert_row(&RowId::root(), NewRow::group("Sedan"), InsertAt::End)
            .unwrap();
        let leaf = store
            .insert_row(
                &group,
                NewRow::leaf(["Nissan Altama", "2010", "Silver", "Expired Paper Plates"]),
                InsertAt::End,
            )
            .unwrap();
        (store, leaf)
    }

    #[test]
    fn test_open_seeds_and_selects_all() {
        let (store, leaf) = store();
        let mut session = EditSession::default();
        session
            .open(&store, CellAddress::new(leaf, 3), EditConstraints::overlay())
            .unwrap();

        let editor = session.editor().unwrap();
        assert_eq!(editor.text(), "Silver");
        assert_eq!(editor.input.selected_text(), "Silver");
    }

    #[test]
    fn test_open_on_group_data_column_targets_label() {
        let (store, _) = store();
        let mut session = EditSession::default();
        session
            .open(&store, CellAddress::new("Sedan", 2), EditConstraints::overlay())
            .unwrap();

        let editor = session.editor().unwrap();
        assert_eq!(editor.target, CellAddress::new("Sedan", 0));
        assert_eq!(editor.text(), "Sedan");
    }

    #[test]
    fn test_typing_then_confirm_overwrites_cell() {
        let (mut store, leaf) = store();
        let mut session = EditSession::default();
        session
            .open(&store, CellAddress::new(leaf.clone(), 3), EditConstraints::overlay())
            .unwrap();
        for ch in "Red".chars() {
            session.edit(TextEditMsg::InsertChar(ch));
        }

        let outcome = session.confirm(&mut store).unwrap();
        assert!(matches!(outcome, CommitOutcome::Committed { .. }));
        assert!(!session.is_editing());
        assert_eq!(store.get_value(&leaf, 3).unwrap(), "Red");
    }

    #[test]
    fn test_blur_commits_block_and_grows_group() {
        let (mut store, leaf) = store();
        let mut session = EditSession::default();
        session
            .open(&store, CellAddress::new(leaf.clone(), 1), EditConstraints::overlay())
            .unwrap();
        session.edit(TextEditMsg::InsertText("Subaru\t1990\nMazda\t1988".into()));

        let CommitOutcome::Committed { report, .. } = session.blur(&mut store).unwrap() else {
            panic!("expected a commit");
        };
        assert_eq!(report.rows_appended.len(), 1);
        assert_eq!(store.get_value(&leaf, 2).unwrap(), "1990");
    }

    #[test]
    fn test_empty_commit_clears_cell() {
        let (mut store, leaf) = store();
        let mut session = EditSession::default();
        session
            .open(&store, CellAddress::new(leaf.clone(), 2), EditConstraints::overlay())
            .unwrap();
        session.edit(TextEditMsg::DeleteBackward);
        session.confirm(&mut store).unwrap();
        assert_eq!(store.get_value(&leaf, 2).unwrap(), "");
    }

    #[test]
    fn test_stale_target_closes_overlay() {
        let (mut store, leaf) = store();
        let mut session = EditSession::default();
        session
            .open(&store, CellAddress::new(leaf.clone(), 1), EditConstraints::overlay())
            .unwrap();
        store.delete_rows(&[leaf.clone()]).unwrap();

        let err = session.blur(&mut store).unwrap_err();
        assert_eq!(err, GridError::NotFound(leaf));
        assert!(!session.is_editing());
    }

    #[test]
    fn test_idle_ignores_input() {
        let mut session = EditSession::default();
        assert!(!session.edit(TextEditMsg::Move(MoveTarget::End)));
        let (mut store, _) = store();
        assert_eq!(session.confirm(&mut store).unwrap(), CommitOutcome::NothingOpen);
    }
}
