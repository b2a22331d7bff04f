//! Context menu update functions

use crate::commands::{Cmd, DamageArea};
use crate::grid::{menu, CellAddress, CommitTrigger, MenuAction, MenuTarget, SortDirection};
use crate::messages::{GridMsg, MenuMsg};
use crate::model::AppModel;

use super::edit::commit_overlay;
use super::grid::update_grid;

/// Handle context menu messages
pub fn update_menu(model: &mut AppModel, msg: MenuMsg) -> Option<Cmd> {
    match msg {
        MenuMsg::Open(target) => {
            let committed = commit_overlay(model, CommitTrigger::Blur);
            model.context_menu = Some(target);
            Some(match committed {
                Some(cmd) => Cmd::batch(vec![cmd, Cmd::RedrawAreas(vec![DamageArea::ContextMenu])]),
                None => Cmd::RedrawAreas(vec![DamageArea::ContextMenu]),
            })
        }
        MenuMsg::Dismiss => {
            model.context_menu.take()?;
            Some(Cmd::RedrawAreas(vec![DamageArea::ContextMenu]))
        }
        MenuMsg::Invoke { action, target } => {
            model.context_menu = None;
            tracing::debug!(label = action.label(), ?target, "menu action");
            invoke(model, action, target)
        }
    }
}

fn invoke(model: &mut AppModel, action: MenuAction, target: MenuTarget) -> Option<Cmd> {
    let column = target.column;
    let cmd = match action {
        MenuAction::SortAscending => update_grid(
            model,
            GridMsg::Sort {
                column,
                direction: SortDirection::Ascending,
            },
        ),
        MenuAction::SortDescending => update_grid(
            model,
            GridMsg::Sort {
                column,
                direction: SortDirection::Descending,
            },
        ),
        MenuAction::DeleteSelectedRows => update_grid(model, GridMsg::DeleteSelected),
        MenuAction::ClearColumn => update_grid(model, GridMsg::ClearColumn { column }),
        MenuAction::AddRow => add_row(model, &target),
        MenuAction::Copy => update_grid(model, GridMsg::CopySelection),
        MenuAction::Paste => update_grid(model, GridMsg::PasteAt(target)),
    };

    let close_menu = Cmd::RedrawAreas(vec![DamageArea::ContextMenu]);
    Some(match cmd {
        Some(cmd) => Cmd::batch(vec![close_menu, cmd]),
        None => close_menu,
    })
}

/// Insert a blank row at the menu location and select it
fn add_row(model: &mut AppModel, target: &MenuTarget) -> Option<Cmd> {
    let committed = commit_overlay(model, CommitTrigger::Blur);
    match menu::insert_row_at(&mut model.grid, target) {
        Ok(Some(row)) => {
            model.select_row(row.clone(), false);
            model.cursor.select(CellAddress::new(row, target.column));
            Some(Cmd::Redraw)
        }
        Ok(None) => committed,
        Err(err) => {
            model.report_error("add row", err);
            committed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::grid::RowId;
    use crate::host::Region;

    #[test]
    fn test_open_and_dismiss() {
        let mut model = AppModel::new(GridConfig::default()).unwrap();
        let target = MenuTarget::heading(2);
        update_menu(&mut model, MenuMsg::Open(target.clone()));
        assert_eq!(model.context_menu, Some(target));
        assert!(update_menu(&mut model, MenuMsg::Dismiss).is_some());
        assert!(update_menu(&mut model, MenuMsg::Dismiss).is_none());
    }

    #[test]
    fn test_menu_sort_records_toggle() {
        let mut model = AppModel::new(GridConfig::default()).unwrap();
        update_menu(
            &mut model,
            MenuMsg::Invoke {
                action: MenuAction::SortDescending,
                target: MenuTarget::heading(1),
            },
        );
        assert_eq!(model.sort.next_direction(1), SortDirection::Ascending);
        let sedan = model.grid.children_of(&RowId::from("Sedan")).unwrap();
        assert_eq!(sedan[0].as_str(), "I002");
    }

    #[test]
    fn test_add_row_selects_new_row() {
        let mut model = AppModel::new(GridConfig::default()).unwrap();
        let target = MenuTarget::new(Region::Cell, Some("I001".into()), 3);
        update_menu(
            &mut model,
            MenuMsg::Invoke {
                action: MenuAction::AddRow,
                target,
            },
        );
        let sedan = model.grid.children_of(&RowId::from("Sedan")).unwrap().to_vec();
        assert_eq!(sedan.len(), 3);
        assert_eq!(model.selection, vec![sedan[1].clone()]);
        assert_eq!(model.cursor.address(), Some(CellAddress::new(sedan[1].clone(), 3)));
    }
}
