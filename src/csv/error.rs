//! Lexical and syntactic errors
//!
//! Both error types carry the [`SourcePosition`] of the offending input and
//! can render themselves against the source text:
//!
//! ```text
//! Parse error at line 2, column 17: unexpected text `hola` after quoted field
//! Cristian,"Dijo: "hola" y se fue"
//!                 ^
//! ```

use super::source_location::{format_with_caret, SourcePosition};
use std::fmt;

/// What went wrong while tokenizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A quoted field was opened but never closed
    UnterminatedQuote,
    /// A character that starts no token
    UnexpectedCharacter(char),
}

/// Error produced by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// The error kind
    pub kind: LexErrorKind,
    /// Where the offending lexeme starts
    pub position: SourcePosition,
}

impl LexError {
    /// Create a new lex error
    pub fn new(kind: LexErrorKind, position: SourcePosition) -> Self {
        Self { kind, position }
    }

    /// Format with the offending source line and a caret
    pub fn format_with_source(&self, input: &str) -> String {
        format!("{}\n{}", self, format_with_caret(input, self.position))
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::UnterminatedQuote => {
                write!(f, "Lex error at {}: unterminated quoted field", self.position)
            }
            LexErrorKind::UnexpectedCharacter(ch) => {
                write!(
                    f,
                    "Lex error at {}: unexpected character {:?}",
                    self.position, ch
                )
            }
        }
    }
}

impl std::error::Error for LexError {}

/// What went wrong while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A token that cannot follow the previous field
    UnexpectedToken {
        /// Human-readable token description (e.g. "quoted field")
        found: &'static str,
        /// The raw token text
        text: String,
    },
    /// A carriage return that is not followed by a line feed
    BareCarriageReturn,
    /// Input exceeds the configured maximum size
    InputTooLarge {
        /// Size of the input in bytes
        input_size: usize,
        /// Maximum allowed size
        max_size: usize,
    },
}

/// Error produced by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The error kind
    pub kind: ParseErrorKind,
    /// Where the offending token starts
    pub position: SourcePosition,
}

impl ParseError {
    /// Create a new parse error
    pub fn new(kind: ParseErrorKind, position: SourcePosition) -> Self {
        Self { kind, position }
    }

    /// Format with the offending source line and a caret
    pub fn format_with_source(&self, input: &str) -> String {
        match self.kind {
            ParseErrorKind::InputTooLarge { .. } => self.to_string(),
            _ => format!("{}\n{}", self, format_with_caret(input, self.position)),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { found, text } => {
                write!(
                    f,
                    "Parse error at {}: unexpected {} `{}`, expected ',' or end of row",
                    self.position, found, text
                )
            }
            ParseErrorKind::BareCarriageReturn => {
                write!(
                    f,
                    "Parse error at {}: carriage return not followed by a line feed",
                    self.position
                )
            }
            ParseErrorKind::InputTooLarge {
                input_size,
                max_size,
            } => {
                write!(
                    f,
                    "Input too large: {} bytes exceeds limit of {} bytes",
                    input_size, max_size
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
