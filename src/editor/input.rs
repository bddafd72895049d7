use unicode_width::UnicodeWidthStr;

/// Bounded text buffer used while in input mode.
///
/// Characters can only be appended or removed from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    max_len: usize,
}

impl InputBuffer {
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::new(),
            max_len,
        }
    }

    /// Append a character; returns false when the buffer is full
    pub fn push(&mut self, c: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.text.push(c);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.max_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Cursor column in terminal cells, measured from the start of the text
    pub fn cursor_offset(&self) -> usize {
        self.text.width()
    }
}
