//! Pure functions for classifying and toggling line-comment markers, and
//! for the offset arithmetic that maps a selection to its full-line block.

use crate::types::{LineBlock, Selection};

/// The line-comment marker this engine toggles.
pub const MARKER: &str = "//";

/// Check whether a line carries the marker after its leading whitespace.
pub fn is_commented(line: &str) -> bool {
    line.trim_start().starts_with(MARKER)
}

/// Prefix a line with the marker, preserving leading indentation.
/// Blank lines are returned unchanged.
pub fn comment_line(line: &str) -> String {
    let body = line.trim_start();
    if body.is_empty() {
        return line.to_string();
    }
    let indent = &line[..line.len() - body.len()];
    format!("{indent}{MARKER}{body}")
}

/// Strip the marker, and at most one space following it, from a line,
/// preserving indentation. Lines without the marker are returned unchanged.
pub fn uncomment_line(line: &str) -> String {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];
    match body.strip_prefix(MARKER) {
        Some(rest) => {
            let rest = rest.strip_prefix(' ').unwrap_or(rest);
            format!("{indent}{rest}")
        }
        None => line.to_string(),
    }
}

/// Whether every non-blank line already carries the marker.
/// Blocks with no non-blank lines do not qualify.
pub fn all_commented(lines: &[&str]) -> bool {
    let mut saw_content = false;
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        if !is_commented(line) {
            return false;
        }
        saw_content = true;
    }
    saw_content
}

/// Toggle a whole block: comment every non-blank line, or uncomment them
/// all when each one is already commented. Blank lines pass through.
pub fn toggle_block(block: &str) -> String {
    let lines: Vec<&str> = block.split('\n').collect();
    let uncommenting = all_commented(&lines);
    let updated: Vec<String> = lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                (*line).to_string()
            } else if uncommenting {
                uncomment_line(line)
            } else {
                comment_line(line)
            }
        })
        .collect();
    updated.join("\n")
}

/// Drop a trailing newline from a non-empty selection, so a selection of
/// whole lines that includes the final terminator does not drag an empty
/// trailing line into the block.
pub fn clip_selection(text: &str, sel: Selection) -> Selection {
    if sel.end > sel.start
        && let Some('\n') = text.chars().nth(sel.end - 1)
    {
        return Selection {
            start: sel.start,
            end: sel.end - 1,
        };
    }
    sel
}

/// Locate the full-line block covering a (clipped) selection: from the
/// start of the line containing `sel.start` to the end of the line
/// containing `sel.end`, end-of-buffer when that line has no terminator.
pub fn line_block(text: &str, sel: Selection) -> LineBlock {
    let mut start = 0;
    for (i, ch) in text.chars().enumerate() {
        if ch != '\n' {
            continue;
        }
        if i < sel.start {
            start = i + 1;
        }
        if i >= sel.end {
            return LineBlock { start, end: i };
        }
    }
    LineBlock {
        start,
        end: text.chars().count(),
    }
}

/// The substring a block spans.
pub fn slice_block(text: &str, block: LineBlock) -> &str {
    &text[byte_at(text, block.start)..byte_at(text, block.end)]
}

// Char offset to byte position; end-of-buffer for offsets past the end.
fn byte_at(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(byte, _)| byte)
}
