//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Targets are already
//! resolved to rows and columns by the host adapter (`input`), so update
//! handlers never deal in pixels.

use crate::editable::TextEditMsg;
use crate::grid::{CellAddress, MenuAction, MenuTarget, RowId, SortDirection};

/// Grid operations: selection, navigation, structure, clipboard
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    /// Click on a row: target a cell and select the row
    Select {
        row: RowId,
        column: usize,
        /// Add to the row selection instead of replacing it (Ctrl+click)
        extend: bool,
    },
    /// Click on empty space
    ClearSelection,
    /// Double-click on a row: open the overlay editor on that cell
    EditCell(CellAddress),
    /// Double-click below the last row: append a blank leaf and edit it
    EditNewRow { column: usize },
    /// Tab: advance the cursor and edit the cell it lands on
    Advance,
    /// Column heading clicked: sort, alternating direction per column
    HeaderClick { column: usize },
    Sort {
        column: usize,
        direction: SortDirection,
    },
    /// Shift+double-click on a heading
    ClearColumn { column: usize },
    /// Delete key
    DeleteSelected,
    /// Ctrl+C
    CopySelection,
    /// Ctrl+V: fetch the clipboard, then paste at the pointer location
    PasteAt(MenuTarget),
    /// Clipboard text to paste at the given location
    PasteText { target: MenuTarget, text: String },
    /// Expand or collapse a group
    ToggleGroup(RowId),
}

/// Overlay editor messages
#[derive(Debug, Clone, PartialEq)]
pub enum EditMsg {
    /// Keystroke or pasted text inside the overlay
    Text(TextEditMsg),
    /// Ctrl+V inside the overlay: insert the clipboard text
    PasteClipboard,
    /// Enter
    Confirm,
    /// The overlay lost focus
    Blur,
}

/// Context menu messages
#[derive(Debug, Clone, PartialEq)]
pub enum MenuMsg {
    /// Right click: show the menu for this location
    Open(MenuTarget),
    /// An entry was chosen; the action carries the location it was opened at
    Invoke {
        action: MenuAction,
        target: MenuTarget,
    },
    Dismiss,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Grid(GridMsg),
    Edit(EditMsg),
    Menu(MenuMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn select(row: impl Into<RowId>, column: usize) -> Self {
        Msg::Grid(GridMsg::Select {
            row: row.into(),
            column,
            extend: false,
        })
    }

    pub fn edit_cell(row: impl Into<RowId>, column: usize) -> Self {
        Msg::Grid(GridMsg::EditCell(CellAddress::new(row, column)))
    }

    pub fn insert_char(ch: char) -> Self {
        Msg::Edit(EditMsg::Text(TextEditMsg::InsertChar(ch)))
    }

    pub fn insert_text(text: impl Into<String>) -> Self {
        Msg::Edit(EditMsg::Text(TextEditMsg::InsertText(text.into())))
    }

    pub fn menu(action: MenuAction, target: MenuTarget) -> Self {
        Msg::Menu(MenuMsg::Invoke { action, target })
    }
}
