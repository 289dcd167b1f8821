/// A selection within a text buffer.
///
/// Offsets are zero-based and counted in `char`s, not bytes. A caret with
/// no extent is represented as `start == end`. Callers keep selections
/// normalized: `start <= end`, both within `[0, char-length]` of the
/// buffer they refer to. Offsets outside that contract are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The start offset (inclusive).
    pub start: usize,
    /// The end offset (exclusive).
    pub end: usize,
}

impl Selection {
    /// A collapsed selection (caret) at the given offset.
    pub const fn caret(at: usize) -> Selection {
        Selection { start: at, end: at }
    }

    /// True when the selection has no extent.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The span of full lines overlapping a selection.
///
/// `start` sits immediately after a newline (or at buffer start) and `end`
/// immediately before a newline (or at buffer end), so the span never
/// includes the line terminators that delimit it. Offsets are `char`
/// offsets, like [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBlock {
    /// Offset of the first character of the first touched line.
    pub start: usize,
    /// Offset one past the last character of the last touched line.
    pub end: usize,
}

/// The verdict a key handler hands back to its host.
///
/// Hosts use this to decide whether to run their own default handling for
/// the event. Listener-style hosts that want the conventional boolean
/// (`true` = not handled, run the default) can call [`Dispatch::pass_through`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Dispatch {
    /// The event was handled; the host should suppress default behavior.
    Consumed,
    /// The handler declined the event; the host proceeds as usual.
    Pass,
}

impl Dispatch {
    /// True when the host should run its default handling for the event.
    pub fn pass_through(self) -> bool {
        matches!(self, Dispatch::Pass)
    }
}
