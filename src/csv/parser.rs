//! Recursive-descent CSV parser
//!
//! Grammar (one token of lookahead, no backtracking):
//!
//! ```text
//! csvFile := row (ROW_SEP row)* ROW_SEP? END_OF_INPUT
//! row     := field (FIELD_SEP field)*
//! field   := TEXT | QUOTED_STRING | ε
//! ```
//!
//! The three field alternatives are told apart by the lookahead token alone;
//! ε is taken when the lookahead is a separator or end of input. A row
//! separator directly before end of input is a trailing line break, not an
//! extra empty row.

use super::ast::{CsvTree, Field, FieldNode, RowNode};
use super::error::{ParseError, ParseErrorKind};
use super::lexer::{Lexer, LineEnding, Token, TokenKind};
use super::source_location::SourcePosition;
use crate::error::{Result, SheetError};
use serde::Deserialize;

/// Default maximum input size: 100 MB
pub const DEFAULT_MAX_INPUT_SIZE: usize = 100 * 1024 * 1024;

/// Parser limits
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum allowed input size in bytes
    pub max_input_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

impl ParserConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum input size
    pub fn with_max_input_size(mut self, size: usize) -> Self {
        self.max_input_size = size;
        self
    }
}

/// Parser state for a single input
///
/// All state lives in this value; nothing is shared between parses.
pub struct CsvParser<'a> {
    lexer: Lexer<'a>,
    lookahead: Token<'a>,
}

impl<'a> CsvParser<'a> {
    /// Create a parser over `input`, reading the first token
    pub fn new(input: &'a str, config: &ParserConfig) -> Result<Self> {
        if input.len() > config.max_input_size {
            return Err(ParseError::new(
                ParseErrorKind::InputTooLarge {
                    input_size: input.len(),
                    max_size: config.max_input_size,
                },
                SourcePosition::start(),
            )
            .into());
        }

        let mut lexer = Lexer::new(input);
        let lookahead = lexer.next_token()?;
        Ok(Self { lexer, lookahead })
    }

    /// Consume the lookahead token and read the next one
    fn bump(&mut self) -> Result<Token<'a>> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    fn unexpected(&self) -> SheetError {
        let kind = match self.lookahead.kind {
            TokenKind::RowSep(LineEnding::Cr) => ParseErrorKind::BareCarriageReturn,
            other => ParseErrorKind::UnexpectedToken {
                found: other.describe(),
                text: self.lookahead.text.to_string(),
            },
        };
        ParseError::new(kind, self.lookahead.position).into()
    }

    /// Parse the whole input
    pub fn parse_file(mut self) -> Result<CsvTree<'a>> {
        let mut rows = vec![self.parse_row()?];

        loop {
            match self.lookahead.kind {
                TokenKind::EndOfInput => break,
                TokenKind::RowSep(LineEnding::Lf | LineEnding::CrLf) => {
                    self.bump()?;
                    if self.lookahead.kind == TokenKind::EndOfInput {
                        break;
                    }
                    rows.push(self.parse_row()?);
                }
                _ => return Err(self.unexpected()),
            }
        }

        log_debug!(
            "parsed {} rows ({} bytes)",
            rows.len(),
            self.lexer.input().len()
        );

        Ok(CsvTree { rows })
    }

    fn parse_row(&mut self) -> Result<RowNode<'a>> {
        let position = self.lookahead.position;
        let mut fields = vec![self.parse_field()?];

        while self.lookahead.kind == TokenKind::FieldSep {
            self.bump()?;
            fields.push(self.parse_field()?);
        }

        Ok(RowNode { fields, position })
    }

    fn parse_field(&mut self) -> Result<FieldNode<'a>> {
        let position = self.lookahead.position;
        let field = match self.lookahead.kind {
            TokenKind::Text => Field::Text(self.bump()?.text),
            TokenKind::QuotedString => Field::Quoted(self.bump()?.text),
            TokenKind::FieldSep | TokenKind::RowSep(_) | TokenKind::EndOfInput => Field::Empty,
        };
        Ok(FieldNode { field, position })
    }
}

/// Parse `input` with default limits
pub fn parse(input: &str) -> Result<CsvTree<'_>> {
    parse_with_config(input, &ParserConfig::default())
}

/// Parse `input` with the given limits
pub fn parse_with_config<'a>(input: &'a str, config: &ParserConfig) -> Result<CsvTree<'a>> {
    CsvParser::new(input, config)?.parse_file()
}
