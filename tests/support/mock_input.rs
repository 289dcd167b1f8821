#![allow(dead_code)]

use comment_mini::{LineBlock, Selection, TextInput};

/// String-backed text input with a recorded notification count.
pub struct MockInput {
    text: String,
    sel: Selection,
    plain_text: bool,
    pub notifications: usize,
}

impl MockInput {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            sel: Selection::caret(0),
            plain_text: true,
            notifications: 0,
        }
    }

    pub fn with_selection(text: &str, start: usize, end: usize) -> Self {
        let mut input = Self::new(text);
        input.sel = Selection { start, end };
        input
    }

    /// A focused widget that is not a plain-text surface.
    pub fn non_text(text: &str) -> Self {
        let mut input = Self::new(text);
        input.plain_text = false;
        input
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sel(&self) -> Selection {
        self.sel
    }

    fn byte_at(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map_or(self.text.len(), |(byte, _)| byte)
    }
}

impl TextInput for MockInput {
    fn is_plain_text(&self) -> bool {
        self.plain_text
    }

    fn value(&self) -> String {
        self.text.clone()
    }

    fn selection(&self) -> Selection {
        self.sel
    }

    fn replace(&mut self, block: LineBlock, text: &str) {
        let start = self.byte_at(block.start);
        let end = self.byte_at(block.end);
        self.text.replace_range(start..end, text);
    }

    fn set_selection(&mut self, sel: Selection) {
        self.sel = sel;
    }

    fn notify_changed(&mut self) {
        self.notifications += 1;
    }
}
