//! Search input.
//!
//! Holds the text typed into the search box. The query is only handed to
//! the list controller on an explicit submit, never per keystroke.

/// Search input state.
#[derive(Debug)]
pub struct SearchInput {
    is_active: bool,
    buffer: String,
}

impl SearchInput {
    /// Create a new, empty search input.
    pub fn new() -> Self {
        Self {
            is_active: false,
            buffer: String::new(),
        }
    }

    /// Check if the input is focused for editing.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Focus the input. The previous text is kept for editing.
    pub fn start(&mut self) {
        self.is_active = true;
    }

    /// Add a character to the buffer.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character from the buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Submit the buffer.
    ///
    /// Returns the raw, untrimmed buffer when it holds something other than
    /// whitespace. Blank submissions return `None` and keep the input focused.
    pub fn submit(&mut self) -> Option<String> {
        if self.buffer.trim().is_empty() {
            return None;
        }
        self.is_active = false;
        Some(self.buffer.clone())
    }

    /// Stop editing without submitting.
    pub fn cancel(&mut self) {
        self.is_active = false;
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Get the search buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> SearchInput {
        let mut input = SearchInput::new();
        input.start();
        text.chars().for_each(|c| input.input(c));
        input
    }

    #[test]
    fn blank_submissions_are_suppressed() {
        assert_eq!(typed("").submit(), None);

        let mut spaces = typed("   \t");
        assert_eq!(spaces.submit(), None);
        assert!(spaces.is_active());
    }

    #[test]
    fn submit_passes_raw_buffer() {
        let mut input = typed("  math ");
        assert_eq!(input.submit().as_deref(), Some("  math "));
        assert!(!input.is_active());
        assert_eq!(input.buffer(), "  math ");
    }

    #[test]
    fn backspace_and_restart_keep_text() {
        let mut input = typed("cis1011");
        input.backspace();
        input.cancel();
        input.start();
        assert_eq!(input.buffer(), "cis101");
    }
}
