//! Input field handling for the terminal user interface.

/// A text input field with cursor position and active state management.
///
/// Masked fields render as asterisks (passwords) while keeping the real
/// value for submission.
#[derive(Clone)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
    pub active: bool,
    pub masked: bool,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            active: false,
            masked: false,
        }
    }

    /// Create an empty field whose contents render masked.
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::new()
        }
    }

    /// Create an input field with initial text value.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.len(),
            active: false,
            masked: false,
        }
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let prev = prev_boundary(&self.value, self.cursor);
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    /// Move cursor one character to the left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = prev_boundary(&self.value, self.cursor);
        }
    }

    /// Move cursor one character to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = next_boundary(&self.value, self.cursor);
        }
    }

    /// The text to render: asterisks for masked fields.
    pub fn display(&self) -> String {
        if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Cursor column in characters, for terminal cursor placement.
    pub fn cursor_chars(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_boundary(s: &str, from: usize) -> usize {
    let mut i = from - 1;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_boundary(s: &str, from: usize) -> usize {
    let mut i = from + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_backspace() {
        let mut f = InputField::new();
        for c in "milk".chars() {
            f.handle_char(c);
        }
        assert_eq!(f.value, "milk");
        f.handle_backspace();
        assert_eq!(f.value, "mil");
    }

    #[test]
    fn insertion_follows_the_cursor() {
        let mut f = InputField::with_value("mlk");
        f.move_cursor_left();
        f.move_cursor_left();
        f.handle_char('i');
        assert_eq!(f.value, "milk");
    }

    #[test]
    fn masked_fields_display_asterisks_but_keep_the_value() {
        let mut f = InputField::masked();
        for c in "pw1".chars() {
            f.handle_char(c);
        }
        assert_eq!(f.display(), "***");
        assert_eq!(f.value, "pw1");
    }

    #[test]
    fn multibyte_input_moves_by_whole_characters() {
        let mut f = InputField::new();
        f.handle_char('é');
        f.handle_char('x');
        f.move_cursor_left();
        f.move_cursor_left();
        f.move_cursor_right();
        f.handle_backspace();
        assert_eq!(f.value, "x");
    }
}
