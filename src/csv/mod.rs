//! CSV front end: tokenizer, parser, extractor and writer
//!
//! # Module Organization
//!
//! - [`lexer`] - Character-dispatch tokenizer
//! - [`parser`] - Recursive-descent parser producing a [`CsvTree`]
//! - [`ast`] - Parse tree types
//! - [`extract`] - Tree to [`Document`] with advisory grade warnings
//! - [`document`] - Decoded document, summary and structure pre-check
//! - [`writer`] - CSV output with configurable quoting
//! - [`error`] - Lexical and syntactic errors
//! - [`source_location`] - Line/column tracking

pub mod ast;
pub mod document;
pub mod error;
pub mod extract;
pub mod lexer;
pub mod parser;
pub mod source_location;
pub mod writer;

// ============================================================================
// Core Types
// ============================================================================

pub use ast::{CsvTree, Field, FieldNode, RowNode};
pub use document::{validate_structure, Document, Summary};
pub use lexer::{tokenize, LineEnding, Lexer, Token, TokenKind};
pub use parser::{parse, parse_with_config, CsvParser, ParserConfig};

// ============================================================================
// Extraction
// ============================================================================

pub use extract::{extract, parse_number, AdvisoryConfig, AdvisoryWarning};

// ============================================================================
// Error Handling
// ============================================================================

pub use error::{LexError, LexErrorKind, ParseError, ParseErrorKind};

// ============================================================================
// Output
// ============================================================================

pub use writer::{write_csv, CsvWriter, QuoteStyle};

// ============================================================================
// Source Location
// ============================================================================

pub use source_location::{get_line_at_offset, SourcePosition};
