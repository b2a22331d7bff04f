//! Bulk edit: spreadsheet-style paste and the matching copy serializer
//!
//! Pasted text is a block of rows separated by `\n`, cells separated by `\t`.
//! The block is laid over the grid starting at an anchor cell:
//!
//! ```text
//!              anchor column
//!                   v
//!   leaf 0   | .  | a0 | a1 | .  |      existing rows are overwritten cell by cell
//!   leaf 1   | .  | b0 | b1 | .  |
//!   (new)    | "" | c0 | c1 |           missing rows are appended to the group,
//!                                        padded on the left with empty strings
//! ```
//!
//! Cells that would land past the last column are dropped: a paste never
//! widens the schema, but it may grow a group downwards without limit.
//! There is no rollback; rows written before a failure stay written.

use super::address::{CellAddress, RowId};
use super::error::GridResult;
use super::model::{GridStore, InsertAt, NewRow};

/// Parsed tab/newline delimited text. Rows may be ragged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteBlock {
    rows: Vec<Vec<String>>,
}

impl PasteBlock {
    /// Parse clipboard text. Empty text is a zero-row block; one trailing
    /// newline (as spreadsheets emit) does not produce an extra row.
    pub fn parse(text: &str) -> Self {
        let text = text
            .strip_suffix('\n')
            .map(|t| t.strip_suffix('\r').unwrap_or(t))
            .unwrap_or(text);
        if text.is_empty() {
            return Self::default();
        }

        let rows = text
            .split('\n')
            .map(|line| {
                line.strip_suffix('\r')
                    .unwrap_or(line)
                    .split('\t')
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { rows }
    }

    /// A one-row, one-cell block
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            rows: vec![vec![text.into()]],
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// What a merge did to the grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteReport {
    /// Existing rows that received at least one cell
    pub rows_updated: usize,
    /// Leaf rows created to hold rows past the end of the group
    pub rows_appended: Vec<RowId>,
    pub cells_written: usize,
    /// Cells dropped because they fell past the last column
    pub cells_truncated: usize,
    /// The anchor row's label was replaced instead of merging cells
    pub label_replaced: bool,
}

impl PasteReport {
    pub fn changed_anything(&self) -> bool {
        self.label_replaced || self.cells_written > 0 || !self.rows_appended.is_empty()
    }
}

/// Paste clipboard text at `anchor`.
///
/// Anchored on the label column, the whole text (newlines and tabs included)
/// becomes the row's label. Empty text is a no-op.
pub fn paste_text(store: &mut GridStore, anchor: &CellAddress, text: &str) -> GridResult<PasteReport> {
    if text.is_empty() {
        tracing::debug!(%anchor, "nothing to paste");
        return Ok(PasteReport::default());
    }
    if anchor.is_label() {
        return replace_label(store, &anchor.row, text);
    }
    merge_block(store, anchor, &PasteBlock::parse(text))
}

/// Apply text committed from the overlay editor. Unlike a clipboard paste an
/// empty commit clears the target cell.
pub fn commit_text(store: &mut GridStore, anchor: &CellAddress, text: &str) -> GridResult<PasteReport> {
    if anchor.is_label() {
        return replace_label(store, &anchor.row, text);
    }
    let block = if text.is_empty() {
        PasteBlock::single("")
    } else {
        PasteBlock::parse(text)
    };
    merge_block(store, anchor, &block)
}

fn replace_label(store: &mut GridStore, row: &RowId, text: &str) -> GridResult<PasteReport> {
    store.set_value(row, 0, text)?;
    Ok(PasteReport {
        label_replaced: true,
        ..PasteReport::default()
    })
}

/// Lay `block` over the grid with its first cell at `anchor` (column >= 1).
///
/// Anchored on a group row, the block starts at that group's first leaf.
pub fn merge_block(
    store: &mut GridStore,
    anchor: &CellAddress,
    block: &PasteBlock,
) -> GridResult<PasteReport> {
    store.check_column(anchor.column)?;
    let Some(col_offset) = anchor.value_index() else {
        let text = block
            .rows()
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
        return replace_label(store, &anchor.row, &text);
    };

    let (group, row_offset) = if store.is_group(&anchor.row) {
        (anchor.row.clone(), 0)
    } else {
        let parent = store.parent_of(&anchor.row)?.clone();
        let index = store.index_in_parent(&anchor.row)?;
        (parent, index)
    };
    let siblings = store.children_of(&group)?.to_vec();
    let capacity = store.column_count() - col_offset;

    let mut report = PasteReport::default();
    for (i, cells) in block.rows().iter().enumerate() {
        let kept = cells.len().min(capacity);
        report.cells_truncated += cells.len() - kept;
        let cells = &cells[..kept];

        match siblings.get(i + row_offset) {
            Some(target) => {
                for (j, cell) in cells.iter().enumerate() {
                    store.set_value(target, col_offset + j + 1, cell)?;
                }
                report.rows_updated += 1;
            }
            None => {
                let values = std::iter::repeat(String::new())
                    .take(col_offset)
                    .chain(cells.iter().cloned())
                    .collect::<Vec<_>>();
                let id = store.insert_row(&group, NewRow::leaf(values), InsertAt::End)?;
                report.rows_appended.push(id);
            }
        }
        report.cells_written += cells.len();
    }

    tracing::debug!(
        %anchor,
        rows = block.row_count(),
        updated = report.rows_updated,
        appended = report.rows_appended.len(),
        truncated = report.cells_truncated,
        "merged pasted block"
    );
    Ok(report)
}

/// Serialize rows for the clipboard: per row, the label line (if any) and the
/// tab-joined values line (if any value is non-empty), joined by newlines.
pub fn serialize_rows(store: &GridStore, ids: &[RowId]) -> GridResult<String> {
    let mut lines = Vec::new();
    for id in ids {
        let row = store.row(id)?;
        if !row.label.is_empty() {
            lines.push(row.label.clone());
        }
        if row.values.iter().any(|v| !v.is_empty()) {
            lines.push(row.values.join("\t"));
        }
    }
    Ok(lines.join("\n"))
}
