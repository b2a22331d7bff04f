//! Toolkit-independent view projection
//!
//! [`visible_rows`] flattens the tree into the rows a host should draw, in
//! order, with their tag colours. [`render_table`] draws the same projection
//! as plain text for the command line.

use serde::Serialize;

use crate::grid::{RowId, RowTag};
use crate::host::{CellBox, GridHost};
use crate::model::AppModel;

/// One drawable row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: RowId,
    /// 0 for groups, 1 for leaves
    pub depth: usize,
    pub label: String,
    /// Padded to the column count
    pub values: Vec<String>,
    pub tag: RowTag,
    pub background: String,
    pub selected: bool,
    /// Groups only: whether the leaves below are shown
    pub open: bool,
}

/// Rows in display order; leaves of closed groups are skipped
pub fn visible_rows(model: &AppModel) -> Vec<RowView> {
    project_rows(model, false)
}

/// Every row in tree order, whatever the groups' open state
pub fn all_rows(model: &AppModel) -> Vec<RowView> {
    project_rows(model, true)
}

fn project_rows(model: &AppModel, include_closed: bool) -> Vec<RowView> {
    let grid = &model.grid;
    let styles = &model.config.tag_styles;
    let width = grid.column_count();

    let project = |id: &RowId, depth: usize| -> Option<RowView> {
        let row = grid.row(id).ok()?;
        let mut values = row.values.clone();
        values.resize(width, String::new());
        Some(RowView {
            id: id.clone(),
            depth,
            label: row.label.clone(),
            values,
            tag: row.tag,
            background: styles.background(row.tag).to_string(),
            selected: model.is_selected(id),
            open: row.open,
        })
    };

    let mut rows = Vec::with_capacity(grid.row_count());
    for group in grid.groups() {
        let Some(view) = project(group, 0) else {
            continue;
        };
        let open = view.open;
        rows.push(view);
        if !open && !include_closed {
            continue;
        }
        for leaf in grid.children_of(group).unwrap_or_default() {
            rows.extend(project(leaf, 1));
        }
    }
    rows
}

/// Serializable snapshot of the whole grid
#[derive(Debug, Clone, Serialize)]
pub struct GridDump {
    pub headings: Vec<String>,
    pub rows: Vec<RowView>,
}

pub fn dump(model: &AppModel) -> GridDump {
    GridDump {
        headings: headings(model),
        rows: all_rows(model),
    }
}

/// The overlay editor as the host should draw it
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub placement: CellBox,
    pub text: String,
    /// Cursor and selection as char offsets
    pub cursor: usize,
    pub selection: (usize, usize),
}

/// Position and content of the open overlay, if its cell is on screen
pub fn overlay(model: &AppModel, host: &impl GridHost) -> Option<OverlayView> {
    let editor = model.session.editor()?;
    let placement = host.bounding_box(&editor.target.row, editor.target.column)?;
    let selection = &editor.input.selection;
    Some(OverlayView {
        placement,
        text: editor.text(),
        cursor: editor.input.cursor,
        selection: (selection.start(), selection.end()),
    })
}

/// Headings for every text column, label column first
pub fn headings(model: &AppModel) -> Vec<String> {
    (0..=model.grid.column_count())
        .map(|column| model.config.heading(column).unwrap_or_default().to_string())
        .collect()
}

/// Render the visible rows as an aligned text table.
///
/// Groups show `▾`/`▸` for open/closed, selected rows are marked with `*`.
/// Tabs and newlines inside cells are shown as `⇥` and `⏎`.
pub fn render_table(model: &AppModel) -> String {
    let rows = visible_rows(model);

    let mut lines: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    lines.push(headings(model));
    for row in &rows {
        let marker = if row.selected { '*' } else { ' ' };
        let label = match (row.depth, row.open) {
            (0, true) => format!("{}▾ {}", marker, row.label),
            (0, false) => format!("{}▸ {}", marker, row.label),
            _ => format!("{}   {}", marker, row.label),
        };
        let mut cells = vec![label];
        cells.extend(row.values.iter().cloned());
        lines.push(cells.into_iter().map(|c| printable(&c)).collect());
    }

    let columns = lines.first().map(Vec::len).unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            lines
                .iter()
                .filter_map(|line| line.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width - cell.chars().count();
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        out.push_str(cells.join(" | ").trim_end());
        out.push('\n');
        if i == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            out.push_str(&rule.join("-+-"));
            out.push('\n');
        }
    }
    out
}

fn printable(cell: &str) -> String {
    cell.replace('\t', "⇥").replace('\n', "⏎")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn model() -> AppModel {
        AppModel::new(GridConfig::default()).unwrap()
    }

    #[test]
    fn test_visible_rows_pad_and_colour() {
        let model = model();
        let rows = visible_rows(&model);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["Sedan", "I001", "I002", "SUVs", "I003"]);

        assert_eq!(rows[0].background, "#06428B");
        assert_eq!(rows[1].background, "white");
        assert_eq!(rows[2].background, "lightblue");
        assert_eq!(rows[4].values, vec!["Blue Whale", "1995", "Broken Door Handle", ""]);
    }

    #[test]
    fn test_closed_group_hides_leaves() {
        let mut model = model();
        model.grid.set_open(&RowId::from("Sedan"), false).unwrap();
        let ids: Vec<String> = visible_rows(&model).into_iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["Sedan", "SUVs", "I003"]);

        let dumped = dump(&model);
        assert_eq!(dumped.rows.len(), 5);
        assert!(!dumped.rows[0].open);
        assert_eq!(dumped.headings[0], "Vehicle Type");
    }

    #[test]
    fn test_render_table() {
        let mut model = model();
        model.select_row("I003".into(), false);
        let table = render_table(&model);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("Vehicle Type | Vehicle Name"));
        assert!(lines[1].starts_with("-------------+-"));
        assert!(lines[2].starts_with(" ▾ Sedan"));
        assert!(lines[6].starts_with("*   "));
        assert!(lines[6].contains("Blue Whale"));
        assert_eq!(lines.len(), 7);
    }
}
