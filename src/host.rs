//! Contracts with the host toolkit and the clipboard
//!
//! The grid never looks at pixels. A host (a window toolkit, a test double,
//! the headless CLI) answers geometry queries through [`GridHost`], and
//! clipboard access goes through [`Clipboard`].

use thiserror::Error;

use crate::grid::RowId;

/// Area of the widget under a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The label (tree) column of a row
    Tree,
    /// A data cell of a row
    Cell,
    /// Below the last row
    Nothing,
    /// A column heading
    Heading,
}

/// On-screen rectangle of a cell, in host coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CellBox {
    /// A point inside the box, used to re-target a cell by coordinates
    pub fn probe_point(&self) -> (f32, f32) {
        (self.x + 5.0, self.y + 5.0)
    }
}

/// Geometry queries answered by the rendering host
pub trait GridHost {
    fn identify_region(&self, x: f32, y: f32) -> Region;

    /// Text-column index under `x` (0 = label column)
    fn identify_column(&self, x: f32) -> usize;

    /// Row under `y`, `None` below the last row
    fn identify_row(&self, y: f32) -> Option<RowId>;

    /// Rectangle of a cell, `None` if it is not currently shown
    fn bounding_box(&self, row: &RowId, column: usize) -> Option<CellBox>;
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard holds no text")]
    Empty,
}

pub trait Clipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.inner.get_text().map_err(|e| match e {
            arboard::Error::ContentNotAvailable => ClipboardError::Empty,
            other => ClipboardError::Unavailable(other.to_string()),
        })
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

/// In-process clipboard for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.contents.clone().ok_or(ClipboardError::Empty)
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
