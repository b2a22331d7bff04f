//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::grid::MenuTarget;

/// Part of the widget that needs repainting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageArea {
    Rows,
    Overlay,
    ContextMenu,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw
    Redraw,
    /// Request a partial redraw of specific areas
    RedrawAreas(Vec<DamageArea>),
    /// Put text on the clipboard
    WriteClipboard { text: String },
    /// Read the clipboard and paste it at `target`.
    /// Sends `Msg::Grid(GridMsg::PasteText)` when the text is available.
    ReadClipboard { target: MenuTarget },
    /// Read the clipboard into the open overlay.
    /// Sends `Msg::Edit(EditMsg::Text(InsertText))` when the text is available.
    ReadClipboardIntoOverlay,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::RedrawAreas(areas) => !areas.is_empty(),
            // Clipboard I/O alone changes nothing on screen
            Cmd::WriteClipboard { .. } => false,
            Cmd::ReadClipboard { .. } => false,
            Cmd::ReadClipboardIntoOverlay => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Rows changed (values, order or structure)
    pub fn redraw_rows() -> Self {
        Cmd::RedrawAreas(vec![DamageArea::Rows])
    }

    /// The overlay opened, closed or its text changed
    pub fn redraw_overlay() -> Self {
        Cmd::RedrawAreas(vec![DamageArea::Overlay])
    }

    /// Rows changed and the overlay closed
    pub fn redraw_rows_and_overlay() -> Self {
        Cmd::RedrawAreas(vec![DamageArea::Rows, DamageArea::Overlay])
    }

    /// Flatten nested batches into a list of leaf commands, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
