//! Tab navigation tests through the update loop

mod common;

use common::{id, vehicle_model};
use treegrid::grid::CellAddress;
use treegrid::messages::{GridMsg, Msg};
use treegrid::update::update;

fn tab(model: &mut treegrid::AppModel) -> Option<CellAddress> {
    update(model, Msg::Grid(GridMsg::Advance));
    model.cursor.address()
}

#[test]
fn test_first_tab_edits_first_group_label() {
    let mut model = vehicle_model();
    assert_eq!(tab(&mut model), Some(CellAddress::new("Sedan", 0)));
    assert!(model.is_editing());
    assert_eq!(model.session.editor().unwrap().text(), "Sedan");
}

#[test]
fn test_tab_cycles_within_group() {
    let mut model = vehicle_model();
    update(&mut model, Msg::select("I002", 3));

    assert_eq!(tab(&mut model), Some(CellAddress::new("I002", 4)));
    assert_eq!(tab(&mut model), Some(CellAddress::new("I001", 1)));
    assert_eq!(tab(&mut model), Some(CellAddress::new("I001", 2)));
}

#[test]
fn test_tab_commits_previous_cell() {
    let mut model = vehicle_model();
    update(&mut model, Msg::edit_cell("I003", 2));
    update(&mut model, Msg::insert_text("1996"));
    tab(&mut model);

    assert_eq!(model.grid.get_value(&id("I003"), 2).unwrap(), "1996");
    assert_eq!(model.cursor.address(), Some(CellAddress::new("I003", 3)));
}

#[test]
fn test_tab_after_deleting_cursor_row_restarts() {
    let mut model = vehicle_model();
    update(&mut model, Msg::select("I003", 1));
    update(&mut model, Msg::Grid(GridMsg::DeleteSelected));
    assert_eq!(tab(&mut model), Some(CellAddress::new("Sedan", 0)));
}

#[test]
fn test_tab_skips_group_emptied_mid_session() {
    let mut model = vehicle_model();
    update(&mut model, Msg::select("I003", 1));
    update(&mut model, Msg::Grid(GridMsg::DeleteSelected));
    update(&mut model, Msg::select("Sedan", 0));

    assert_eq!(tab(&mut model), Some(CellAddress::new("Sedan", 0)));
    assert_eq!(tab(&mut model), Some(CellAddress::new("Sedan", 0)));
}
