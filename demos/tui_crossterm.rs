//! Terminal UI example using crossterm and ratatui.
//!
//! This example demonstrates how to host comment_mini in a terminal
//! application: the app owns a text buffer and selection, implements
//! `TextInput` over them, and routes key presses through `handle_key`
//! before falling back to its own editing keys.
//! Run with: cargo run --example tui_crossterm

use comment_mini::{
    KeyCode, KeyEvent, LineBlock, Modifiers, Selection, TextInput, handle_key,
};
use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const SAMPLE: &str = "fn main() {\n    let greeting = \"hello\";\n    // println!(\"{greeting}\");\n    println!(\"{greeting}!\");\n}\n";

/// A textarea-style widget state: text plus an anchor/cursor pair.
struct TextArea {
    text: String,
    anchor: usize,
    cursor: usize,
    toggles: u32,
}

impl TextArea {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            anchor: 0,
            cursor: 0,
            toggles: 0,
        }
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_at(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map_or(self.text.len(), |(byte, _)| byte)
    }

    fn normalized(&self) -> Selection {
        Selection {
            start: self.anchor.min(self.cursor),
            end: self.anchor.max(self.cursor),
        }
    }

    fn insert(&mut self, s: &str) {
        let sel = self.normalized();
        let start = self.byte_at(sel.start);
        let end = self.byte_at(sel.end);
        self.text.replace_range(start..end, s);
        let caret = sel.start + s.chars().count();
        self.anchor = caret;
        self.cursor = caret;
    }

    fn backspace(&mut self) {
        let sel = self.normalized();
        if !sel.is_empty() {
            self.insert("");
        } else if sel.start > 0 {
            self.anchor = sel.start - 1;
            self.cursor = sel.end;
            self.insert("");
        }
    }

    fn move_horizontal(&mut self, delta: isize, extend: bool) {
        let next = self.cursor.saturating_add_signed(delta).min(self.len_chars());
        self.cursor = next;
        if !extend {
            self.anchor = next;
        }
    }

    fn line_col(&self, offset: usize) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for (i, ch) in self.text.chars().enumerate() {
            if i == offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    fn offset_of(&self, line: usize, col: usize) -> usize {
        let mut cur_line = 0;
        let mut cur_col = 0;
        for (i, ch) in self.text.chars().enumerate() {
            if cur_line == line && (cur_col == col || ch == '\n') {
                return i;
            }
            if ch == '\n' {
                cur_line += 1;
                cur_col = 0;
            } else {
                cur_col += 1;
            }
        }
        self.len_chars()
    }

    fn move_vertical(&mut self, down: bool, extend: bool) {
        let (line, col) = self.line_col(self.cursor);
        let next = if down {
            self.offset_of(line + 1, col)
        } else if line > 0 {
            self.offset_of(line - 1, col)
        } else {
            0
        };
        self.cursor = next;
        if !extend {
            self.anchor = next;
        }
    }
}

impl TextInput for TextArea {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn selection(&self) -> Selection {
        self.normalized()
    }

    fn replace(&mut self, block: LineBlock, text: &str) {
        let start = self.byte_at(block.start);
        let end = self.byte_at(block.end);
        self.text.replace_range(start..end, text);
    }

    fn set_selection(&mut self, sel: Selection) {
        self.anchor = sel.start;
        self.cursor = sel.end;
    }

    fn notify_changed(&mut self) {
        self.toggles += 1;
    }
}

/// Map a crossterm key event to the engine's representation. Legacy
/// terminals report ctrl+/ as ctrl+_, so that combination maps to the
/// slash as well.
fn to_engine_event(key: &CKeyEvent) -> Option<KeyEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let code = match key.code {
        CKeyCode::Char('_') if ctrl => KeyCode::Char('/'),
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Backspace => KeyCode::Backspace,
        _ => return None,
    };

    let mut mods = Modifiers::empty();
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if ctrl {
        mods |= Modifiers::CTRL;
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        mods |= Modifiers::ALT;
    }
    if key.modifiers.contains(KeyModifiers::SUPER) {
        mods |= Modifiers::META;
    }
    Some(KeyEvent { code, mods })
}

fn handle_host_key(app: &mut TextArea, key: &CKeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        CKeyCode::Char(c) if !ctrl => app.insert(&c.to_string()),
        CKeyCode::Enter => app.insert("\n"),
        CKeyCode::Backspace => app.backspace(),
        CKeyCode::Left => app.move_horizontal(-1, shift),
        CKeyCode::Right => app.move_horizontal(1, shift),
        CKeyCode::Up => app.move_vertical(false, shift),
        CKeyCode::Down => app.move_vertical(true, shift),
        CKeyCode::Esc => app.anchor = app.cursor,
        _ => {}
    }
}

fn render(f: &mut Frame, app: &TextArea) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.size());

    let sel = app.normalized();
    let selected = Style::default().add_modifier(Modifier::REVERSED);

    let mut lines: Vec<Line> = Vec::new();
    let mut offset = 0usize;
    for raw in app.text.split('\n') {
        let len = raw.chars().count();
        let line_start = offset;
        let line_end = offset + len;

        // Clamp the selection (or caret) to this line and split into spans.
        let hi_start = sel.start.clamp(line_start, line_end) - line_start;
        let hi_end = sel.end.clamp(line_start, line_end) - line_start;
        let caret_here = sel.is_empty() && sel.start >= line_start && sel.start <= line_end;

        let before: String = raw.chars().take(hi_start).collect();
        let within: String = raw.chars().skip(hi_start).take(hi_end - hi_start).collect();
        let after: String = raw.chars().skip(hi_end).collect();

        let mut spans = vec![Span::raw(before)];
        if caret_here {
            let mut rest = within + &after;
            if rest.is_empty() {
                rest.push(' ');
            }
            let caret_char: String = rest.chars().take(1).collect();
            let tail: String = rest.chars().skip(1).collect();
            spans.push(Span::styled(caret_char, selected));
            spans.push(Span::raw(tail));
        } else {
            spans.push(Span::styled(within, selected));
            spans.push(Span::raw(after));
        }
        lines.push(Line::from(spans));

        offset = line_end + 1;
    }

    let editor = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" comment_mini — Ctrl+/ toggles comments, Ctrl+Q quits "),
    );
    f.render_widget(editor, chunks[0]);

    let status = Paragraph::new(format!(
        " toggle edits: {} · shift+arrows to select",
        app.toggles
    ));
    f.render_widget(status, chunks[1]);
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut TextArea,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == CKeyCode::Char('q') {
                return Ok(());
            }

            // Offer the event to the toggle handler first; anything it
            // declines falls back to the host's own editing keys.
            if let Some(event) = to_engine_event(&key)
                && !handle_key(app, event).pass_through()
            {
                continue;
            }
            handle_host_key(app, &key);
        }
    }
}

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = TextArea::new(SAMPLE);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}
