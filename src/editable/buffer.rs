//! Char-indexed string storage for the overlay input.
//!
//! All offsets are in characters, not bytes.

use std::ops::Range;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.text.chars().nth(offset)
    }

    /// Text in a char range (clamped to the buffer)
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        self.text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    pub fn insert(&mut self, offset: usize, text: &str) {
        let byte = self.char_to_byte(offset);
        self.text.insert_str(byte, text);
    }

    pub fn remove(&mut self, range: Range<usize>) {
        let start = self.char_to_byte(range.start);
        let end = self.char_to_byte(range.end);
        if start < end {
            self.text.replace_range(start..end, "");
        }
    }

    pub fn set_content(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove_multibyte() {
        let mut buf = StringBuffer::from_text("Größe");
        buf.insert(3, "X");
        assert_eq!(buf.as_str(), "GröXße");
        buf.remove(2..4);
        assert_eq!(buf.as_str(), "Grße");
        assert_eq!(buf.len_chars(), 4);
    }

    #[test]
    fn test_slice_clamps() {
        let buf = StringBuffer::from_text("Silver");
        assert_eq!(buf.slice(1..3), "il");
        assert_eq!(buf.slice(4..99), "er");
        assert_eq!(buf.slice(9..12), "");
    }
}
