//! Line splitting shared by every list format.
//!
//! Numbering is 1-based and counts every physical line, so blank and
//! comment lines still advance the counter used in error messages.

use dockfmt_common::constants::COMMENT_PREFIX;

/// A line that carries content: neither blank nor a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLine<'a> {
    /// 1-based position in the original text.
    pub number: usize,
    /// The line exactly as written, without its terminator.
    pub text: &'a str,
}

/// Returns `true` if the line is empty after trimming.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Returns `true` if the trimmed line starts with `#`.
#[must_use]
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_PREFIX)
}

/// Iterates over the content lines of `text` with their line numbers.
pub fn content_lines(text: &str) -> impl Iterator<Item = ContentLine<'_>> {
    text.lines()
        .enumerate()
        .map(|(idx, text)| ContentLine {
            number: idx + 1,
            text,
        })
        .filter(|line| !is_blank(line.text) && !is_comment(line.text))
}
