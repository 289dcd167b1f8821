#![allow(dead_code)]

use comment_mini::{LineBlock, Selection, TextInput};
use ropey::Rope;

/// Rope-backed text input. Ropey addresses by char index, so the trait's
/// char offsets apply directly with no conversion.
pub struct RopeInput {
    rope: Rope,
    sel: Selection,
    pub notifications: usize,
}

impl RopeInput {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            sel: Selection::caret(0),
            notifications: 0,
        }
    }

    pub fn with_selection(text: &str, start: usize, end: usize) -> Self {
        let mut input = Self::new(text);
        input.sel = Selection { start, end };
        input
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn sel(&self) -> Selection {
        self.sel
    }
}

impl TextInput for RopeInput {
    fn value(&self) -> String {
        self.rope.to_string()
    }

    fn selection(&self) -> Selection {
        self.sel
    }

    fn replace(&mut self, block: LineBlock, text: &str) {
        self.rope.remove(block.start..block.end);
        self.rope.insert(block.start, text);
    }

    fn set_selection(&mut self, sel: Selection) {
        self.sel = sel;
    }

    fn notify_changed(&mut self) {
        self.notifications += 1;
    }
}
