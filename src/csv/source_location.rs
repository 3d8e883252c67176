//! Source Location Utilities
//!
//! Line/column tracking for tokens, error messages and advisory warnings.
//! Lines and columns are 1-based; columns count characters, not bytes.

use serde::Serialize;
use std::fmt;

/// A position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourcePosition {
    /// Byte offset from start of input
    pub offset: usize,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, UTF-8 aware)
    pub column: usize,
}

impl SourcePosition {
    /// Create a new source position
    #[inline]
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Create a position at the start of input
    #[inline]
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Calculate position from an offset in the input
    pub fn from_offset(input: &str, offset: usize) -> Self {
        let offset = offset.min(input.len());
        let mut pos = Self::start();

        for ch in input.chars() {
            if pos.offset >= offset {
                break;
            }
            pos.advance(ch);
        }

        pos
    }

    /// Move past one character
    #[inline]
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += ch.len_utf8();
    }

    /// Move past every character of `text`
    pub fn advance_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.advance(ch);
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

/// Get the line content at a given offset, without its line terminator
pub fn get_line_at_offset(input: &str, offset: usize) -> &str {
    let mut offset = offset.min(input.len());
    while !input.is_char_boundary(offset) {
        offset -= 1;
    }

    let line_start = match input[..offset].rfind('\n') {
        Some(pos) => pos + 1,
        None => 0,
    };

    let line_end = match input[offset..].find('\n') {
        Some(pos) => offset + pos,
        None => input.len(),
    };

    input[line_start..line_end].trim_end_matches('\r')
}

/// Render the line containing `pos` followed by a caret under its column
pub fn format_with_caret(input: &str, pos: SourcePosition) -> String {
    let mut result = String::from(get_line_at_offset(input, pos.offset));
    result.push('\n');
    for _ in 0..pos.column.saturating_sub(1) {
        result.push(' ');
    }
    result.push('^');
    result
}
