use crate::util::unicode;

/// Single-line text buffer with a grapheme-aware cursor (byte offset)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    buffer: String,
    cursor: usize,
}

impl TextField {
    /// A field holding `text` with the cursor at the end
    pub fn with_text(text: &str) -> Self {
        TextField {
            buffer: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor
    pub fn cursor_col(&self) -> usize {
        unicode::byte_offset_to_display_col(&self.buffer, self.cursor)
    }

    /// The slice of text to show in a field `max_cells` wide, scrolled so the
    /// cursor stays visible, and the cursor's column within that slice.
    pub fn visible_window(&self, max_cells: usize) -> (&str, usize) {
        if max_cells == 0 {
            return ("", 0);
        }
        let mut start = 0;
        while unicode::display_width(&self.buffer[start..self.cursor]) >= max_cells {
            match unicode::next_grapheme_boundary(&self.buffer, start) {
                Some(next) => start = next,
                None => break,
            }
        }
        let cursor_col = unicode::display_width(&self.buffer[start..self.cursor]);
        (unicode::fit_to_width(&self.buffer[start..], max_cells), cursor_col)
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the whole contents, moving the cursor to the end
    pub fn set(&mut self, text: &str) {
        self.buffer.clear();
        self.buffer.push_str(text);
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text; line breaks become spaces
    pub fn insert_str(&mut self, text: &str) {
        let clean = text.replace(['\r', '\n'], " ");
        self.buffer.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }
}
