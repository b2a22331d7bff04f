//! Hierarchical grid engine
//!
//! A two-level tree of rows edited like a spreadsheet:
//! - Group rows own ordered leaf rows; leaves hold one string per data column
//! - Zebra (`even`/`odd`) tags follow leaf position within each group
//! - Per-group column sort with a per-column direction toggle
//! - Tab cycling across the cells of a group
//! - Spreadsheet-style bulk paste of tab/newline delimited text
//!
//! # Architecture
//!
//! Nothing in here renders or reads input devices. Hosts resolve pointer
//! positions into [`CellAddress`]es and feed them in through `update`.
//!
//! ```text
//! GridStore
//! ├── groups: [RowId]              display order
//! └── rows: RowId -> Row
//!         ├── group row (tag = group, children = [leaf ids])
//!         └── leaf row  (tag = even | odd, values = [String])
//!
//! GridCursor ─ advance() ─────────┐
//! EditSession ─ open/confirm/blur ├──> paste::commit_text / paste_text ──> GridStore
//! menu::MenuAction ───────────────┘
//! ```

mod address;
mod error;
pub mod menu;
mod model;
mod navigation;
pub mod paste;
mod session;
mod sort;

pub use address::{CellAddress, ColumnSlot, RowId};
pub use error::{GridError, GridResult};
pub use menu::{MenuAction, MenuEntry, MenuTarget, MENU_ENTRIES};
pub use model::{GridStore, InsertAt, NewRow, Row, RowTag};
pub use navigation::GridCursor;
pub use paste::{PasteBlock, PasteReport};
pub use session::{CommitOutcome, CommitTrigger, EditSession, OverlayEditor};
pub use sort::{SortDirection, SortState};
