//! Inline emphasis markup.
//!
//! Each delimiter is honoured once per string: the first occurrence opens,
//! the next one closes, and any later occurrence is left as text.

/// Bold delimiter.
pub const BOLD: char = '*';
/// Underline delimiter.
pub const UNDERLINE: char = '_';
/// Trailing marker that suppresses the line break after a block.
pub const NO_BREAK: char = '/';
/// In-cell line break marker.
pub const CELL_BREAK: char = ';';

/// Apply bold then underline emphasis.
pub fn apply_emphasis(text: &str) -> String {
    let text = replace_pair(text, BOLD, "<b>", "</b>");
    replace_pair(&text, UNDERLINE, "<u>", "</u>")
}

/// Strip a trailing no-break marker, reporting whether one was present.
pub fn split_no_break(content: String) -> (String, bool) {
    match content.strip_suffix(NO_BREAK) {
        Some(stripped) => (stripped.to_string(), true),
        None => (content, false),
    }
}

/// Turn in-cell break markers into line breaks.
pub fn cell_breaks(text: &str) -> String {
    text.replace(CELL_BREAK, "<br>")
}

fn replace_pair(text: &str, delimiter: char, open: &str, close: &str) -> String {
    let text = text.replacen(delimiter, open, 1);
    text.replacen(delimiter, close, 1)
}
