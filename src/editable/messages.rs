//! Messages understood by [`EditableState::apply`](super::EditableState::apply).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    Left,
    Right,
    WordLeft,
    WordRight,
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TextEditMsg {
    /// Move the cursor, collapsing any selection
    Move(MoveTarget),
    /// Move the cursor, extending the selection (Shift+key)
    MoveWithSelection(MoveTarget),
    InsertChar(char),
    /// Insert (pasted) text, replacing the selection
    InsertText(String),
    DeleteBackward,
    DeleteForward,
    DeleteWordBackward,
    SelectAll,
}
