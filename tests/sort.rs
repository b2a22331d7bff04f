//! Sort tests - per-group ordering, stability, header toggling

mod common;

use common::{assert_zebra, column, model_with, vehicle_model};
use treegrid::config::GroupSeed;
use treegrid::grid::SortDirection;
use treegrid::messages::{GridMsg, Msg};
use treegrid::update::update;

#[test]
fn test_descending_reverses_ascending_for_distinct_values() {
    let mut model = model_with(vec![
        GroupSeed::new("A", [vec!["m"], vec!["z"], vec!["b"], vec!["q"]]),
        GroupSeed::new("B", [vec!["y"], vec!["c"]]),
    ]);

    model.grid.sort_by_column(1, SortDirection::Ascending).unwrap();
    let mut ascending = column(&model.grid, "A", 1);
    assert_eq!(ascending, vec!["b", "m", "q", "z"]);
    assert_eq!(column(&model.grid, "B", 1), vec!["c", "y"]);

    model.grid.sort_by_column(1, SortDirection::Descending).unwrap();
    ascending.reverse();
    assert_eq!(column(&model.grid, "A", 1), ascending);
    assert_zebra(&model.grid);
}

#[test]
fn test_groups_are_sorted_independently() {
    let mut model = model_with(vec![
        GroupSeed::new("A", [vec!["b"], vec!["a"]]),
        GroupSeed::new("B", [vec!["d"], vec!["c"]]),
    ]);
    model.grid.sort_by_column(1, SortDirection::Ascending).unwrap();
    assert_eq!(column(&model.grid, "A", 1), vec!["a", "b"]);
    assert_eq!(column(&model.grid, "B", 1), vec!["c", "d"]);
}

#[test]
fn test_ties_keep_relative_order_both_ways() {
    let mut model = model_with(vec![GroupSeed::new(
        "A",
        [vec!["x", "1"], vec!["y", "0"], vec!["z", "1"], vec!["w", "0"]],
    )]);

    model.grid.sort_by_column(2, SortDirection::Ascending).unwrap();
    assert_eq!(column(&model.grid, "A", 1), vec!["y", "w", "x", "z"]);

    model.grid.sort_by_column(2, SortDirection::Descending).unwrap();
    assert_eq!(column(&model.grid, "A", 1), vec!["x", "z", "y", "w"]);
}

#[test]
fn test_sort_on_unpopulated_column_uses_empty_text() {
    let mut model = model_with(vec![GroupSeed::new("A", [vec!["b", "x"], vec!["a"]])]);
    model.grid.sort_by_column(2, SortDirection::Ascending).unwrap();
    assert_eq!(column(&model.grid, "A", 1), vec!["a", "b"]);
}

#[test]
fn test_header_clicks_toggle_per_column() {
    let mut model = vehicle_model();

    update(&mut model, Msg::Grid(GridMsg::HeaderClick { column: 2 }));
    assert_eq!(column(&model.grid, "Sedan", 2), vec!["1990", "2010"]);

    update(&mut model, Msg::Grid(GridMsg::HeaderClick { column: 1 }));
    assert_eq!(column(&model.grid, "Sedan", 1), vec!["Nissan Altama", "Subaru Loyal"]);

    update(&mut model, Msg::Grid(GridMsg::HeaderClick { column: 2 }));
    assert_eq!(column(&model.grid, "Sedan", 2), vec!["2010", "1990"]);
}

#[test]
fn test_sort_out_of_range_reports_error() {
    let mut model = vehicle_model();
    let cmd = update(&mut model, Msg::Grid(GridMsg::HeaderClick { column: 9 }));
    assert!(cmd.is_none());
    assert!(model.last_error.is_some());
}
