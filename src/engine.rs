use crate::key::{KeyCode, KeyEvent};
use crate::toggle;
use crate::traits::TextInput;
use crate::types::{Dispatch, Selection};

/// Handle a comment-toggle shortcut against a text input surface.
///
/// Reacts only to primary-modifier + `/`; any other event is declined with
/// [`Dispatch::Pass`] and the surface is left untouched, as is any event
/// whose target is not a plain-text input. On a hit, the lines overlapping
/// the selection are commented — or uncommented, when every non-blank one
/// already is — the transformed block is reselected, and the surface is
/// notified once. The host suppresses its default handling exactly when
/// this returns [`Dispatch::Consumed`].
pub fn handle_key<S: TextInput>(input: &mut S, event: KeyEvent) -> Dispatch {
    if !event.mods.has_primary() {
        return Dispatch::Pass;
    }
    if event.code != KeyCode::Char('/') {
        return Dispatch::Pass;
    }
    if !input.is_plain_text() {
        return Dispatch::Pass;
    }

    let text = input.value();
    let sel = toggle::clip_selection(&text, input.selection());
    let block = toggle::line_block(&text, sel);
    let updated = toggle::toggle_block(toggle::slice_block(&text, block));

    // A no-op toggle (all-blank block) still splices, reselects, and
    // notifies, so observers see one consistent shape per handled event.
    let end = block.start + updated.chars().count();
    input.replace(block, &updated);
    input.set_selection(Selection {
        start: block.start,
        end,
    });
    input.notify_changed();
    Dispatch::Consumed
}
