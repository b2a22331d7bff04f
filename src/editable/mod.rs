//! Single-line text input used by the overlay cell editor.
//!
//! The overlay is a floating input placed over the cell being edited. It is
//! "single-line" in the sense that Enter confirms rather than inserting a
//! newline, but pasted text keeps its tabs and newlines so a whole block of
//! spreadsheet cells can be committed in one go.
//!
//! - [`StringBuffer`]: char-indexed text storage
//! - [`Selection`]: anchor/head pair of char offsets
//! - [`EditConstraints`]: what the input accepts
//! - [`EditableState`]: buffer + cursor + selection, driven by [`TextEditMsg`]
//!
//! # Example
//!
//! ```
//! use treegrid::editable::{EditConstraints, EditableState, TextEditMsg};
//!
//! let mut state = EditableState::with_text("2010", EditConstraints::overlay());
//! state.select_all();
//! state.apply(TextEditMsg::InsertChar('1'));
//! assert_eq!(state.text(), "1");
//! ```

mod buffer;
mod constraints;
mod messages;
mod selection;
mod state;

pub use buffer::StringBuffer;
pub use constraints::EditConstraints;
pub use messages::{MoveTarget, TextEditMsg};
pub use selection::Selection;
pub use state::EditableState;
