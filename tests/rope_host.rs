//! The trait seam is not tied to contiguous string storage: the same
//! handler drives a rope-backed host unchanged.

use comment_mini::{Dispatch, KeyCode, KeyEvent, Modifiers, Selection, handle_key};

mod support;
use support::rope_input::RopeInput;

fn toggle_key() -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char('/'),
        mods: Modifiers::META,
    }
}

#[test]
fn rope_host_comments_a_selection() {
    let mut input = RopeInput::with_selection("let a = 1;\nlet b = 2;\n", 0, 22);
    assert_eq!(handle_key(&mut input, toggle_key()), Dispatch::Consumed);
    assert_eq!(input.text(), "//let a = 1;\n//let b = 2;\n");
    assert_eq!(input.sel(), Selection { start: 0, end: 25 });
    assert_eq!(input.notifications, 1);
}

#[test]
fn rope_host_round_trips() {
    let source = "    indented\nplain\n";
    let mut input = RopeInput::with_selection(source, 0, source.chars().count());
    assert_eq!(handle_key(&mut input, toggle_key()), Dispatch::Consumed);
    assert_eq!(input.text(), "    //indented\n//plain\n");

    assert_eq!(handle_key(&mut input, toggle_key()), Dispatch::Consumed);
    assert_eq!(input.text(), source);
}

#[test]
fn rope_host_declines_non_toggle_keys() {
    let mut input = RopeInput::new("text");
    let event = KeyEvent {
        code: KeyCode::Char('k'),
        mods: Modifiers::META,
    };
    assert_eq!(handle_key(&mut input, event), Dispatch::Pass);
    assert_eq!(input.text(), "text");
    assert_eq!(input.notifications, 0);
}
