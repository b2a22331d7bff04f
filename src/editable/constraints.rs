//! Input constraints for the overlay editor.

/// The overlay takes pasted blocks verbatim, tabs and newlines included; the
/// only limit is an optional length cap.
#[derive(Debug, Clone, Default)]
pub struct EditConstraints {
    /// Maximum length in characters (None = unlimited)
    pub max_length: Option<usize>,
}

impl EditConstraints {
    pub fn overlay() -> Self {
        Self::default()
    }

    pub fn with_max_length(mut self, max: Option<usize>) -> Self {
        self.max_length = max;
        self
    }

    pub fn would_exceed_max_length(&self, current_len: usize, insert_len: usize) -> bool {
        self.max_length
            .is_some_and(|max| current_len + insert_len > max)
    }

    /// Characters of `text` that still fit after `current_len`
    pub fn fit(&self, current_len: usize, text: &str) -> String {
        match self.max_length {
            Some(max) => text.chars().take(max.saturating_sub(current_len)).collect(),
            None => text.to_string(),
        }
    }
}
