//! Command-line driver for the grid
//!
//! Every grid operation the CLI offers is sent through the runtime as the
//! same message a pointer or menu interaction would produce. Operations run
//! in a fixed order: delete, sort, clear column, paste, copy.
//!
//! Rows are addressed as `GROUP:LEAF` where `LEAF` is the 0-based position of
//! the leaf within the group; an empty `LEAF` names the group row itself.

use clap::Parser;
use std::path::PathBuf;

use treegrid::grid::{MenuAction, MenuTarget, RowId, SortDirection};
use treegrid::host::{Clipboard, Region};
use treegrid::messages::{GridMsg, Msg};
use treegrid::runtime::GridRuntime;

/// Two-level editable data grid
#[derive(Parser, Debug)]
#[command(
    name = "treegrid",
    version,
    about = "Edit a grouped table with spreadsheet-style paste"
)]
pub struct CliArgs {
    /// Grid config (YAML); defaults to the user config, then the demo grid
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Replace schema and rows with a CSV file (first column is the group)
    #[arg(long, value_name = "CSV")]
    pub import: Option<PathBuf>,

    /// Delete a row (repeatable)
    #[arg(long, value_name = "GROUP:LEAF")]
    pub delete: Vec<String>,

    /// Sort every group by this text column
    #[arg(long, value_name = "COLUMN")]
    pub sort: Option<usize>,

    /// Sort descending (used with --sort)
    #[arg(long)]
    pub descending: bool,

    /// Blank a data column in every row
    #[arg(long, value_name = "COLUMN")]
    pub clear_column: Option<usize>,

    /// Paste tab/newline text from a file, or `-` for stdin
    #[arg(long, value_name = "FILE")]
    pub paste: Option<String>,

    /// Paste target; without --paste the clipboard is pasted
    #[arg(long, value_name = "GROUP:LEAF:COLUMN")]
    pub anchor: Option<String>,

    /// Copy a group and its leaves, printing the copied text
    #[arg(long, value_name = "GROUP")]
    pub copy: Option<String>,

    /// Write the resulting grid back as a config file
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Use the system clipboard instead of a private one
    #[arg(long)]
    pub system_clipboard: bool,

    /// Print the grid as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// A row reference as typed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRef {
    pub group: String,
    /// Leaf position within the group; `None` is the group row
    pub leaf: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorRef {
    pub row: RowRef,
    pub column: usize,
}

/// Where pasted text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteSource {
    File(PathBuf),
    Stdin,
    Clipboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastePlan {
    pub source: PasteSource,
    pub anchor: AnchorRef,
}

/// Validated CLI operations
#[derive(Debug, Clone, Default)]
pub struct RunPlan {
    pub config: Option<PathBuf>,
    pub import: Option<PathBuf>,
    pub delete: Vec<RowRef>,
    pub sort: Option<(usize, SortDirection)>,
    pub clear_column: Option<usize>,
    pub paste: Option<PastePlan>,
    pub copy: Option<String>,
    pub save: Option<PathBuf>,
    pub system_clipboard: bool,
    pub json: bool,
}

impl CliArgs {
    /// Check argument combinations and parse row references
    pub fn into_plan(self) -> Result<RunPlan, String> {
        if self.descending && self.sort.is_none() {
            return Err("--descending requires --sort".to_string());
        }

        let paste = match (self.paste, self.anchor) {
            (Some(_), None) => return Err("--paste requires --anchor".to_string()),
            (source, Some(anchor)) => Some(PastePlan {
                source: match source.as_deref() {
                    None => PasteSource::Clipboard,
                    Some("-") => PasteSource::Stdin,
                    Some(path) => PasteSource::File(PathBuf::from(path)),
                },
                anchor: parse_anchor(&anchor)?,
            }),
            (None, None) => None,
        };

        let delete = self
            .delete
            .iter()
            .map(|arg| parse_row_ref(arg))
            .collect::<Result<Vec<_>, _>>()?;

        let direction = if self.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };

        Ok(RunPlan {
            config: self.config,
            import: self.import,
            delete,
            sort: self.sort.map(|column| (column, direction)),
            clear_column: self.clear_column,
            paste,
            copy: self.copy,
            save: self.save,
            system_clipboard: self.system_clipboard,
            json: self.json,
        })
    }
}

/// Parse `GROUP:LEAF`
pub fn parse_row_ref(arg: &str) -> Result<RowRef, String> {
    let (group, leaf) = arg
        .rsplit_once(':')
        .ok_or_else(|| format!("Expected GROUP:LEAF, got '{}'", arg))?;
    if group.is_empty() {
        return Err(format!("Missing group in '{}'", arg));
    }
    let leaf = match leaf {
        "" => None,
        n => Some(
            n.parse()
                .map_err(|_| format!("Leaf position must be a number in '{}'", arg))?,
        ),
    };
    Ok(RowRef {
        group: group.to_string(),
        leaf,
    })
}

/// Parse `GROUP:LEAF:COLUMN`
pub fn parse_anchor(arg: &str) -> Result<AnchorRef, String> {
    let (row, column) = arg
        .rsplit_once(':')
        .ok_or_else(|| format!("Expected GROUP:LEAF:COLUMN, got '{}'", arg))?;
    let column = column
        .parse()
        .map_err(|_| format!("Column must be a number in '{}'", arg))?;
    Ok(AnchorRef {
        row: parse_row_ref(row)?,
        column,
    })
}

/// Look a row reference up in the current grid
pub fn resolve_row<C: Clipboard>(runtime: &GridRuntime<C>, row: &RowRef) -> Result<RowId, String> {
    let grid = &runtime.model.grid;
    let group = RowId::from(row.group.as_str());
    let children = grid
        .children_of(&group)
        .ok()
        .filter(|_| grid.is_group(&group))
        .ok_or_else(|| format!("No group named '{}'", row.group))?;

    match row.leaf {
        None => Ok(group),
        Some(index) => children.get(index).cloned().ok_or_else(|| {
            format!(
                "Group '{}' has {} leaves, no leaf {}",
                row.group,
                children.len(),
                index
            )
        }),
    }
}

/// Message a paste at `anchor` sends once its target row is resolved
fn paste_target<C: Clipboard>(runtime: &GridRuntime<C>, anchor: &AnchorRef) -> Result<MenuTarget, String> {
    let row = resolve_row(runtime, &anchor.row)?;
    let region = if anchor.column == 0 {
        Region::Tree
    } else {
        Region::Cell
    };
    Ok(MenuTarget::new(region, Some(row), anchor.column))
}

/// Run the plan's grid operations. `paste_text` is the already-read paste
/// input for file and stdin sources. Returns the copied text, if `--copy` ran.
pub fn execute<C: Clipboard>(
    runtime: &mut GridRuntime<C>,
    plan: &RunPlan,
    paste_text: Option<String>,
) -> Result<Option<String>, String> {
    if !plan.delete.is_empty() {
        let rows = plan
            .delete
            .iter()
            .map(|row| resolve_row(runtime, row))
            .collect::<Result<Vec<_>, _>>()?;
        select_rows(runtime, rows);
        runtime.dispatch(Msg::Grid(GridMsg::DeleteSelected));
    }

    if let Some((column, direction)) = plan.sort {
        runtime.dispatch(Msg::Grid(GridMsg::Sort { column, direction }));
    }

    if let Some(column) = plan.clear_column {
        runtime.dispatch(Msg::menu(MenuAction::ClearColumn, MenuTarget::heading(column)));
    }

    if let Some(paste) = &plan.paste {
        let target = paste_target(runtime, &paste.anchor)?;
        let msg = match (&paste.source, paste_text) {
            (PasteSource::Clipboard, _) => Msg::menu(MenuAction::Paste, target),
            (_, Some(text)) => Msg::Grid(GridMsg::PasteText { target, text }),
            (_, None) => return Err("Paste input was not read".to_string()),
        };
        runtime.dispatch(msg);
    }

    if let Some(err) = runtime.model.last_error.take() {
        return Err(err.to_string());
    }

    if let Some(group) = &plan.copy {
        let group = resolve_row(
            runtime,
            &RowRef {
                group: group.clone(),
                leaf: None,
            },
        )?;
        let mut rows = vec![group.clone()];
        rows.extend(runtime.model.grid.children_of(&group).unwrap_or_default().iter().cloned());

        select_rows(runtime, rows);
        runtime.dispatch(Msg::Grid(GridMsg::CopySelection));
        return runtime
            .clipboard
            .read_text()
            .map(Some)
            .map_err(|e| format!("Failed to read copied text: {}", e));
    }

    Ok(None)
}

/// Replace the row selection, as ctrl-clicking each row in turn would
fn select_rows<C: Clipboard>(runtime: &mut GridRuntime<C>, rows: Vec<RowId>) {
    runtime.dispatch(Msg::Grid(GridMsg::ClearSelection));
    for row in rows {
        runtime.dispatch(Msg::Grid(GridMsg::Select {
            row,
            column: 0,
            extend: true,
        }));
    }
}
