//! Crate-wide error type

use crate::csv::error::{LexError, ParseError};
use crate::grades::MissingColumnsError;
use std::fmt;

/// Any failure of the analysis pipeline
///
/// Every variant is terminal for the operation that produced it: no
/// partial document or report accompanies an error.
#[derive(Debug)]
pub enum SheetError {
    /// Tokenizer failure
    Lex(LexError),
    /// Grammar failure
    Parse(ParseError),
    /// Grade evaluation requested without the required columns
    MissingColumns(MissingColumnsError),
    /// Input rejected by the structure pre-check
    InvalidStructure {
        /// Why the input was rejected
        reason: String,
    },
    /// Invalid configuration
    Config {
        /// Error message describing the problem
        message: String,
    },
    /// File system failure
    Io(std::io::Error),
}

impl SheetError {
    /// Format with source context where a position is known
    pub fn format_with_source(&self, input: &str) -> String {
        match self {
            SheetError::Lex(e) => e.format_with_source(input),
            SheetError::Parse(e) => e.format_with_source(input),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::Lex(e) => write!(f, "{}", e),
            SheetError::Parse(e) => write!(f, "{}", e),
            SheetError::MissingColumns(e) => write!(f, "{}", e),
            SheetError::InvalidStructure { reason } => {
                write!(f, "Invalid CSV structure: {}", reason)
            }
            SheetError::Config { message } => write!(f, "Invalid configuration: {}", message),
            SheetError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SheetError::Lex(e) => Some(e),
            SheetError::Parse(e) => Some(e),
            SheetError::MissingColumns(e) => Some(e),
            SheetError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for SheetError {
    fn from(e: LexError) -> Self {
        SheetError::Lex(e)
    }
}

impl From<ParseError> for SheetError {
    fn from(e: ParseError) -> Self {
        SheetError::Parse(e)
    }
}

impl From<MissingColumnsError> for SheetError {
    fn from(e: MissingColumnsError) -> Self {
        SheetError::MissingColumns(e)
    }
}

impl From<std::io::Error> for SheetError {
    fn from(e: std::io::Error) -> Self {
        SheetError::Io(e)
    }
}

impl From<serde_json::Error> for SheetError {
    fn from(e: serde_json::Error) -> Self {
        SheetError::Config {
            message: e.to_string(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SheetError>;
