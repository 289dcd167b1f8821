//! GUI example using egui.
//!
//! This example demonstrates how to host comment_mini in a GUI
//! application: a `TextEdit` owns the text, and an adapter over its
//! backing string and char-cursor state implements `TextInput`. The
//! platform "command" modifier (ctrl, or cmd on macOS) plus `/` drives
//! the toggle.
//! Run with: cargo run --example egui_app

use comment_mini::{
    KeyCode, KeyEvent, LineBlock, Modifiers, Selection, TextInput, handle_key,
};
use eframe::egui;
use egui::text::{CCursor, CCursorRange};

const SAMPLE: &str = "fn area(radius: f64) -> f64 {\n    let pi = std::f64::consts::PI;\n    // let rough = 3.14;\n    pi * radius * radius\n}\n";

/// Adapter over the `TextEdit`'s backing string and selection.
struct TextEditSurface<'a> {
    text: &'a mut String,
    sel: Selection,
    changed: bool,
}

impl TextEditSurface<'_> {
    fn byte_at(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map_or(self.text.len(), |(byte, _)| byte)
    }
}

impl TextInput for TextEditSurface<'_> {
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
        self.changed = true;
    }
}

struct EditorApp {
    code: String,
    toggles: u32,
}

impl Default for EditorApp {
    fn default() -> Self {
        Self {
            code: SAMPLE.to_string(),
            toggles: 0,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Claim the shortcut before the TextEdit sees the event.
        let toggle_pressed =
            ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Slash));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("comment_mini GUI Demo");
            ui.label("Select some lines and press Ctrl+/ (Cmd+/ on macOS).");
            ui.add_space(8.0);

            let id = egui::Id::new("editor");
            ui.add(
                egui::TextEdit::multiline(&mut self.code)
                    .id(id)
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .desired_rows(16),
            );

            // The TextEdit is the event target; only toggle while it has
            // focus, mirroring a listener that checks the focused widget.
            let focused = ui.memory(|m| m.has_focus(id));

            if toggle_pressed
                && focused
                && let Some(mut state) = egui::TextEdit::load_state(ui.ctx(), id)
                && let Some(range) = state.cursor.char_range()
            {
                let (a, b) = (range.primary.index, range.secondary.index);
                let mut surface = TextEditSurface {
                    text: &mut self.code,
                    sel: Selection {
                        start: a.min(b),
                        end: a.max(b),
                    },
                    changed: false,
                };

                let event = KeyEvent {
                    code: KeyCode::Char('/'),
                    mods: Modifiers::CTRL,
                };
                if !handle_key(&mut surface, event).pass_through() {
                    let new_sel = surface.sel;
                    if surface.changed {
                        self.toggles += 1;
                    }
                    state.cursor.set_char_range(Some(CCursorRange::two(
                        CCursor::new(new_sel.start),
                        CCursor::new(new_sel.end),
                    )));
                    state.store(ui.ctx(), id);
                }
            }

            ui.add_space(8.0);
            ui.label(format!("toggle edits: {}", self.toggles));
        });
    }
}

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([700.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "comment_mini GUI Demo",
        options,
        Box::new(|_cc| Box::<EditorApp>::default()),
    )
}
