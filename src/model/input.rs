//! FilterInput: the free-text filter field model.
//!
//! Holds the authoritative text value for one table instance. Supports
//! cursor-based editing so simulated typing behaves like a real text field.

/// The free-text filter field whose value drives both user-typed filtering
/// and tag-button state.
///
/// The cursor position is tracked as a byte offset into the value string.
/// All cursor operations are char-boundary safe.
///
/// # Examples
///
/// ```
/// use tagsync::model::FilterInput;
///
/// let mut input = FilterInput::new().with_value("rust");
/// input.insert_char('!');
/// assert_eq!(input.value(), "rust!");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterInput {
    value: String,
    cursor_position: usize,
}

impl FilterInput {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor_position: 0,
        }
    }

    /// Set the initial value (builder pattern).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor_position = self.value.len();
        self
    }

    /// Return the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value, moving the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_position = self.value.len();
    }

    /// Clear the value and reset the cursor.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_position = 0;
    }

    /// Insert a character at the current cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor_position, ch);
        self.cursor_position += ch.len_utf8();
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let prev = self.prev_char_boundary();
        self.value.drain(prev..self.cursor_position);
        self.cursor_position = prev;
    }

    /// Move the cursor left by one character.
    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = self.prev_char_boundary();
        }
    }

    /// Move the cursor right by one character.
    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.value.len() {
            self.cursor_position = self.next_char_boundary();
        }
    }

    /// Move the cursor to the start of the value.
    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    /// Move the cursor to the end of the value.
    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.value.len();
    }

    /// Return the cursor position (byte offset).
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Find the byte offset of the previous character boundary.
    fn prev_char_boundary(&self) -> usize {
        let mut pos = self.cursor_position.saturating_sub(1);
        while pos > 0 && !self.value.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    /// Find the byte offset of the next character boundary.
    fn next_char_boundary(&self) -> usize {
        let mut pos = self.cursor_position + 1;
        while pos < self.value.len() && !self.value.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_value_sets_cursor_to_end() {
        let i = FilterInput::new().with_value("hello");
        assert_eq!(i.value(), "hello");
        assert_eq!(i.cursor_position(), 5);
    }

    #[test]
    fn set_value_moves_cursor() {
        let mut i = FilterInput::new().with_value("old");
        i.set_value("new value");
        assert_eq!(i.value(), "new value");
        assert_eq!(i.cursor_position(), 9);
    }

    #[test]
    fn clear() {
        let mut i = FilterInput::new().with_value("abc");
        i.clear();
        assert_eq!(i.value(), "");
        assert_eq!(i.cursor_position(), 0);
    }

    #[test]
    fn insert_char_at_end() {
        let mut i = FilterInput::new().with_value("ab");
        i.insert_char('c');
        assert_eq!(i.value(), "abc");
        assert_eq!(i.cursor_position(), 3);
    }

    #[test]
    fn insert_char_in_middle() {
        let mut i = FilterInput::new().with_value("ac");
        i.move_cursor_home();
        i.move_cursor_right();
        i.insert_char('b');
        assert_eq!(i.value(), "abc");
        assert_eq!(i.cursor_position(), 2);
    }

    #[test]
    fn delete_char_backspace() {
        let mut i = FilterInput::new().with_value("abc");
        i.delete_char();
        assert_eq!(i.value(), "ab");
        assert_eq!(i.cursor_position(), 2);
    }

    #[test]
    fn delete_char_at_start_does_nothing() {
        let mut i = FilterInput::new().with_value("abc");
        i.move_cursor_home();
        i.delete_char();
        assert_eq!(i.value(), "abc");
        assert_eq!(i.cursor_position(), 0);
    }

    #[test]
    fn cursor_movement_clamps() {
        let mut i = FilterInput::new().with_value("ab");
        i.move_cursor_right(); // already at end
        assert_eq!(i.cursor_position(), 2);
        i.move_cursor_home();
        i.move_cursor_left(); // already at start
        assert_eq!(i.cursor_position(), 0);
    }

    #[test]
    fn unicode_insert_and_delete() {
        let mut i = FilterInput::new();
        i.insert_char('a');
        i.insert_char('\u{00e9}'); // e-acute, 2 bytes
        i.insert_char('b');
        assert_eq!(i.value(), "a\u{00e9}b");
        i.delete_char();
        assert_eq!(i.value(), "a\u{00e9}");
        i.delete_char();
        assert_eq!(i.value(), "a");
    }

    #[test]
    fn unicode_cursor_movement() {
        let mut i = FilterInput::new().with_value("a\u{00e9}b"); // 4 bytes
        assert_eq!(i.cursor_position(), 4);
        i.move_cursor_left();
        assert_eq!(i.cursor_position(), 3);
        i.move_cursor_left();
        assert_eq!(i.cursor_position(), 1);
        i.move_cursor_left();
        assert_eq!(i.cursor_position(), 0);
    }

    #[test]
    fn default_is_empty() {
        let i = FilterInput::default();
        assert_eq!(i.value(), "");
        assert_eq!(i.cursor_position(), 0);
    }
}
