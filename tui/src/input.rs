//! Line editing for inline field drafts.
//!
//! Provides an `InputLine` struct that manages a text buffer with cursor
//! movement and editing operations. The editor seeds the buffer from a
//! field's committed value and edits it as a draft; committing or
//! discarding the draft is the job of [`crate::editor::FieldEditor`].

/// A line editor with cursor movement.
///
/// The buffer is maintained as a `Vec<char>` so that cursor-based
/// operations work correctly with multi-byte characters.
pub struct InputLine {
    buffer: Vec<char>,
    cursor: usize,
}


impl InputLine {
    /// Create a new empty input line.
    pub fn new() -> Self {
        InputLine {
            buffer: Vec::new(),
            cursor: 0,
        }
    }

    /// Create an input line seeded with `text`, cursor at the end.
    pub fn seeded(text: &str) -> Self {
        let buffer: Vec<char> = text.chars().collect();
        let cursor = buffer.len();
        InputLine { buffer, cursor }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
    }

    /// Delete the character at the cursor position (forward delete).
    pub fn delete_forward(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Move the cursor one position to the left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor one position to the right.
    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the beginning of the line.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the line.
    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Delete the word before the cursor (Ctrl-W).
    ///
    /// A word boundary is the transition from a non-alphanumeric character
    /// to an alphanumeric character, scanning leftward.
    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        while pos > 0 && !self.buffer[pos - 1].is_alphanumeric() {
            pos -= 1;
        }
        while pos > 0 && self.buffer[pos - 1].is_alphanumeric() {
            pos -= 1;
        }
        self.buffer.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Clear the buffer and reset the cursor.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// The current buffer contents as a `String`.
    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// The cursor position in characters.
    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}


impl Default for InputLine {
    fn default() -> Self {
        Self::new()
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Construction and seeding ---

    #[test]
    fn new_is_empty() {
        let line = InputLine::new();
        assert!(line.is_empty());
        assert_eq!(line.cursor_pos(), 0);
    }

    #[test]
    fn seeded_sets_text_and_cursor() {
        let line = InputLine::seeded("hello");
        assert_eq!(line.text(), "hello");
        assert_eq!(line.cursor_pos(), 5);
    }

    #[test]
    fn seeded_empty_is_empty() {
        assert!(InputLine::seeded("").is_empty());
    }

    #[test]
    fn seeded_handles_multibyte() {
        let line = InputLine::seeded("héllo");
        assert_eq!(line.cursor_pos(), 5);
        assert_eq!(line.text(), "héllo");
    }

    // --- Insertion and deletion ---

    #[test]
    fn insert_appends_at_cursor() {
        let mut line = InputLine::new();
        line.insert('a');
        line.insert('b');
        assert_eq!(line.text(), "ab");
        assert_eq!(line.cursor_pos(), 2);
    }

    #[test]
    fn insert_mid_buffer() {
        let mut line = InputLine::seeded("ac");
        line.move_left();
        line.insert('b');
        assert_eq!(line.text(), "abc");
    }

    #[test]
    fn delete_back_removes_before_cursor() {
        let mut line = InputLine::seeded("abc");
        line.delete_back();
        assert_eq!(line.text(), "ab");
        assert_eq!(line.cursor_pos(), 2);
    }

    #[test]
    fn delete_back_at_start_is_noop() {
        let mut line = InputLine::seeded("abc");
        line.move_home();
        line.delete_back();
        assert_eq!(line.text(), "abc");
    }

    #[test]
    fn delete_forward_removes_at_cursor() {
        let mut line = InputLine::seeded("abc");
        line.move_home();
        line.delete_forward();
        assert_eq!(line.text(), "bc");
        assert_eq!(line.cursor_pos(), 0);
    }

    #[test]
    fn delete_forward_at_end_is_noop() {
        let mut line = InputLine::seeded("abc");
        line.delete_forward();
        assert_eq!(line.text(), "abc");
    }

    // --- Cursor movement ---

    #[test]
    fn move_left_and_right_clamp() {
        let mut line = InputLine::seeded("ab");
        line.move_right();
        assert_eq!(line.cursor_pos(), 2);
        line.move_left();
        line.move_left();
        line.move_left();
        assert_eq!(line.cursor_pos(), 0);
    }

    #[test]
    fn home_and_end() {
        let mut line = InputLine::seeded("abcdef");
        line.move_home();
        assert_eq!(line.cursor_pos(), 0);
        line.move_end();
        assert_eq!(line.cursor_pos(), 6);
    }

    // --- Word deletion ---

    #[test]
    fn delete_word_back_removes_word() {
        let mut line = InputLine::seeded("hello world");
        line.delete_word_back();
        assert_eq!(line.text(), "hello ");
    }

    #[test]
    fn delete_word_back_eats_trailing_spaces() {
        let mut line = InputLine::seeded("hello   ");
        line.delete_word_back();
        assert_eq!(line.text(), "");
    }

    #[test]
    fn delete_word_back_at_start_is_noop() {
        let mut line = InputLine::seeded("abc");
        line.move_home();
        line.delete_word_back();
        assert_eq!(line.text(), "abc");
    }

    // --- Clear ---

    #[test]
    fn clear_resets_everything() {
        let mut line = InputLine::seeded("abc");
        line.clear();
        assert!(line.is_empty());
        assert_eq!(line.cursor_pos(), 0);
    }
}
