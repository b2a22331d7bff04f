//! EditableState - buffer, cursor and selection for the overlay input.

use super::buffer::StringBuffer;
use super::constraints::EditConstraints;
use super::messages::{MoveTarget, TextEditMsg};
use super::selection::Selection;

/// Word-movement classes for cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Blank,
    /// Tab or newline: a cell or row boundary inside a pasted block
    Separator,
    Word,
    Symbol,
}

impl CharClass {
    fn of(ch: char) -> Self {
        match ch {
            '\t' | '\n' | '\r' => CharClass::Separator,
            c if c.is_whitespace() => CharClass::Blank,
            c if c.is_alphanumeric() => CharClass::Word,
            _ => CharClass::Symbol,
        }
    }
}

/// Single-line editable text with one cursor and one selection.
///
/// The cursor is a char offset into the buffer and always equals
/// `selection.head`.
#[derive(Debug, Clone, Default)]
pub struct EditableState {
    pub buffer: StringBuffer,
    pub cursor: usize,
    pub selection: Selection,
    pub constraints: EditConstraints,
}

impl EditableState {
    pub fn new(constraints: EditConstraints) -> Self {
        Self {
            buffer: StringBuffer::new(),
            cursor: 0,
            selection: Selection::default(),
            constraints,
        }
    }

    /// Create a state seeded with `text`, cursor at the end
    pub fn with_text(text: &str, constraints: EditConstraints) -> Self {
        let mut state = Self::new(constraints);
        state.set_content(text);
        state
    }

    pub fn text(&self) -> String {
        self.buffer.as_str().to_string()
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        if self.selection.is_empty() {
            return String::new();
        }
        self.buffer.slice(self.selection.start()..self.selection.end())
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Replace the whole content, cursor at the end
    pub fn set_content(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.cursor = self.buffer.len_chars();
        self.selection = Selection::collapsed(self.cursor);
    }

    pub fn clear(&mut self) {
        self.set_content("");
    }

    fn place_cursor(&mut self, offset: usize, extend_selection: bool) {
        self.cursor = offset.min(self.buffer.len_chars());
        if extend_selection {
            self.selection.head = self.cursor;
        } else {
            self.selection = Selection::collapsed(self.cursor);
        }
    }

    /// Dispatch an edit message. Returns true if the text changed.
    pub fn apply(&mut self, msg: TextEditMsg) -> bool {
        match msg {
            TextEditMsg::Move(target) => {
                self.move_to(target, false);
                false
            }
            TextEditMsg::MoveWithSelection(target) => {
                self.move_to(target, true);
                false
            }
            TextEditMsg::InsertChar(ch) => self.insert_char(ch),
            TextEditMsg::InsertText(text) => self.insert_text(&text),
            TextEditMsg::DeleteBackward => self.delete_backward(),
            TextEditMsg::DeleteForward => self.delete_forward(),
            TextEditMsg::DeleteWordBackward => self.delete_word_backward(),
            TextEditMsg::SelectAll => {
                self.select_all();
                false
            }
        }
    }

    fn move_to(&mut self, target: MoveTarget, extend: bool) {
        match target {
            MoveTarget::Left => self.move_left(extend),
            MoveTarget::Right => self.move_right(extend),
            MoveTarget::WordLeft => self.move_word_left(extend),
            MoveTarget::WordRight => self.move_word_right(extend),
            MoveTarget::Start => self.move_home(extend),
            MoveTarget::End => self.move_end(extend),
        }
    }
}

// =============================================================================
// Movement Operations
// =============================================================================

impl EditableState {
    /// Move cursor left by one character
    pub fn move_left(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let start = self.selection.start();
            self.place_cursor(start, false);
            return;
        }
        self.place_cursor(self.cursor.saturating_sub(1), extend_selection);
    }

    /// Move cursor right by one character
    pub fn move_right(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let end = self.selection.end();
            self.place_cursor(end, false);
            return;
        }
        self.place_cursor(self.cursor + 1, extend_selection);
    }

    pub fn move_home(&mut self, extend_selection: bool) {
        self.place_cursor(0, extend_selection);
    }

    pub fn move_end(&mut self, extend_selection: bool) {
        self.place_cursor(self.buffer.len_chars(), extend_selection);
    }

    /// Move cursor by one word to the left
    pub fn move_word_left(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let start = self.selection.start();
            self.place_cursor(start, false);
            return;
        }
        let pos = self.word_start_before(self.cursor);
        self.place_cursor(pos, extend_selection);
    }

    /// Move cursor by one word to the right
    pub fn move_word_right(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let end = self.selection.end();
            self.place_cursor(end, false);
            return;
        }

        let len = self.buffer.len_chars();
        let mut pos = self.cursor;

        if let Some(first) = self.buffer.char_at(pos).map(CharClass::of) {
            while pos < len && self.buffer.char_at(pos).map(CharClass::of) == Some(first) {
                pos += 1;
            }
        }
        while pos < len && self.buffer.char_at(pos).map(CharClass::of) == Some(CharClass::Blank) {
            pos += 1;
        }

        self.place_cursor(pos, extend_selection);
    }

    /// Start of the run before `from`, after stepping back over blanks.
    /// Cell and row separators form their own runs.
    fn word_start_before(&self, from: usize) -> usize {
        let mut pos = from.min(self.buffer.len_chars());
        let class_before = |pos: usize| self.buffer.char_at(pos - 1).map(CharClass::of);

        while pos > 0 && class_before(pos) == Some(CharClass::Blank) {
            pos -= 1;
        }
        if pos > 0 {
            let run = class_before(pos);
            while pos > 0 && class_before(pos) == run {
                pos -= 1;
            }
        }
        pos
    }

    /// Select all text, cursor at the end
    pub fn select_all(&mut self) {
        let len = self.buffer.len_chars();
        self.selection = Selection::new(0, len);
        self.cursor = len;
    }
}

// =============================================================================
// Editing Operations
// =============================================================================

impl EditableState {
    /// Remove the selected range, if any. Returns true if something was removed.
    fn delete_selection(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        let start = self.selection.start();
        self.buffer.remove(start..self.selection.end());
        self.place_cursor(start, false);
        true
    }

    /// Insert a character at the cursor, replacing the selection
    pub fn insert_char(&mut self, ch: char) -> bool {
        let replaced = self.selection.len();
        if self
            .constraints
            .would_exceed_max_length(self.buffer.len_chars() - replaced, 1)
        {
            return false;
        }

        self.delete_selection();
        let mut utf8 = [0u8; 4];
        self.buffer.insert(self.cursor, ch.encode_utf8(&mut utf8));
        self.place_cursor(self.cursor + 1, false);
        true
    }

    /// Insert (pasted) text at the cursor, replacing the selection.
    ///
    /// Text past the max length is cut.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let had_selection = self.delete_selection();
        let fitted = self.constraints.fit(self.buffer.len_chars(), text);
        if fitted.is_empty() {
            return had_selection;
        }

        let inserted = fitted.chars().count();
        self.buffer.insert(self.cursor, &fitted);
        self.place_cursor(self.cursor + inserted, false);
        true
    }

    /// Delete the selection or the character before the cursor
    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        self.buffer.remove(self.cursor - 1..self.cursor);
        self.place_cursor(self.cursor - 1, false);
        true
    }

    /// Delete the selection or the character after the cursor
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor >= self.buffer.len_chars() {
            return false;
        }
        self.buffer.remove(self.cursor..self.cursor + 1);
        true
    }

    pub fn delete_word_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let start = self.word_start_before(self.cursor);
        if start == self.cursor {
            return false;
        }
        self.buffer.remove(start..self.cursor);
        self.place_cursor(start, false);
        true
    }
}
