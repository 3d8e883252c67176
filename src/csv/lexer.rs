//! CSV Tokenizer
//!
//! Splits raw text into field separators, row separators, quoted strings and
//! plain text. Uses character-first dispatch: the byte at the current
//! position decides which single pattern is tried, so every token is found
//! in one pass without backtracking.
//!
//! Token rules:
//! - `,` is a field separator
//! - `\n` and `\r\n` are row separators; a lone `\r` is reported as its own
//!   row separator kind and rejected by the parser
//! - `"..."` is a quoted string, `""` inside it is an escaped quote
//! - any run of characters other than `,`, `\r`, `\n`, `"` is text
//! - spaces/tabs not followed by text are skipped

use super::error::{LexError, LexErrorKind};
use super::source_location::SourcePosition;
use memchr::memchr;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Plain text: everything up to the next separator or quote
static TEXT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\A[^,\r\n"]+"#).expect("text pattern is a valid regex")
});

/// Insignificant whitespace between tokens
static WS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A[ \t]+").expect("whitespace pattern is a valid regex"));

/// Line terminator of a row separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r` not followed by `\n`
    Cr,
}

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// `,`
    FieldSep,
    /// Line break between rows
    RowSep(LineEnding),
    /// Unquoted field text (untrimmed)
    Text,
    /// Quoted field, including its outer quotes
    QuotedString,
    /// End of input; emitted exactly once
    EndOfInput,
}

impl TokenKind {
    /// Human-readable name used in error messages
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::FieldSep => "field separator",
            TokenKind::RowSep(LineEnding::Cr) => "carriage return",
            TokenKind::RowSep(_) => "row separator",
            TokenKind::Text => "text",
            TokenKind::QuotedString => "quoted field",
            TokenKind::EndOfInput => "end of input",
        }
    }
}

/// A classified lexeme borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// Token kind
    pub kind: TokenKind,
    /// Raw text span (empty for end of input)
    pub text: &'a str,
    /// Where the token starts
    pub position: SourcePosition,
}

/// What the current byte can start
enum Dispatch {
    FieldSep,
    LineFeed,
    CarriageReturn,
    Quote,
    Whitespace,
    Text,
}

#[inline]
fn dispatch(byte: u8) -> Dispatch {
    match byte {
        b',' => Dispatch::FieldSep,
        b'\n' => Dispatch::LineFeed,
        b'\r' => Dispatch::CarriageReturn,
        b'"' => Dispatch::Quote,
        b' ' | b'\t' => Dispatch::Whitespace,
        _ => Dispatch::Text,
    }
}

/// Length of the quoted string at the start of `rest`, closing quote included
///
/// `rest[0]` must be the opening quote. Returns `None` when unterminated.
fn scan_quoted(rest: &[u8]) -> Option<usize> {
    let mut i = 1;
    loop {
        let close = i + memchr(b'"', &rest[i..])?;
        if rest.get(close + 1) == Some(&b'"') {
            i = close + 2;
        } else {
            return Some(close + 1);
        }
    }
}

/// Streaming tokenizer over an in-memory buffer
///
/// Yields `Ok(token)` until (and including) a single
/// [`TokenKind::EndOfInput`], or one `Err` after which it stops.
///
/// # Example
///
/// ```rust
/// use gradecsv::csv::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("a,\"b\"")
///     .map(|t| t.unwrap().kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Text, TokenKind::FieldSep, TokenKind::QuotedString, TokenKind::EndOfInput]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: SourcePosition,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the start of `input`
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: SourcePosition::start(),
            finished: false,
        }
    }

    /// Restart tokenization from the beginning of the input
    pub fn reset(&mut self) {
        self.pos = SourcePosition::start();
        self.finished = false;
    }

    /// Current position in the input
    pub fn position(&self) -> SourcePosition {
        self.pos
    }

    /// The input being tokenized
    pub fn input(&self) -> &'a str {
        self.input
    }

    fn emit(&mut self, kind: TokenKind, len: usize) -> Token<'a> {
        let input = self.input;
        let start = self.pos;
        let text = &input[start.offset..start.offset + len];
        self.pos.advance_str(text);
        Token {
            kind,
            text,
            position: start,
        }
    }

    /// Produce the next token
    ///
    /// Calling this again after end of input keeps returning
    /// [`TokenKind::EndOfInput`]; the iterator interface is the one that
    /// guarantees a single terminator.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        let input = self.input;
        loop {
            let rest = &input[self.pos.offset..];
            let bytes = rest.as_bytes();

            let Some(&first) = bytes.first() else {
                return Ok(Token {
                    kind: TokenKind::EndOfInput,
                    text: "",
                    position: self.pos,
                });
            };

            let token = match dispatch(first) {
                Dispatch::FieldSep => self.emit(TokenKind::FieldSep, 1),
                Dispatch::LineFeed => self.emit(TokenKind::RowSep(LineEnding::Lf), 1),
                Dispatch::CarriageReturn => {
                    if bytes.get(1) == Some(&b'\n') {
                        self.emit(TokenKind::RowSep(LineEnding::CrLf), 2)
                    } else {
                        self.emit(TokenKind::RowSep(LineEnding::Cr), 1)
                    }
                }
                Dispatch::Quote => match scan_quoted(bytes) {
                    Some(len) => self.emit(TokenKind::QuotedString, len),
                    None => {
                        return Err(LexError::new(LexErrorKind::UnterminatedQuote, self.pos));
                    }
                },
                Dispatch::Whitespace => {
                    let ws_len = WS_PATTERN.find(rest).map_or(0, |m| m.end());
                    match bytes.get(ws_len) {
                        None | Some(b',' | b'\r' | b'\n' | b'"') => {
                            // Not contiguous with text: skip it
                            let skipped = &rest[..ws_len];
                            self.pos.advance_str(skipped);
                            continue;
                        }
                        Some(_) => self.text_token(rest)?,
                    }
                }
                Dispatch::Text => self.text_token(rest)?,
            };

            return Ok(token);
        }
    }

    fn text_token(&mut self, rest: &'a str) -> Result<Token<'a>, LexError> {
        match TEXT_PATTERN.find(rest) {
            Some(m) => Ok(self.emit(TokenKind::Text, m.end())),
            None => {
                let ch = rest.chars().next().unwrap_or('\0');
                Err(LexError::new(
                    LexErrorKind::UnexpectedCharacter(ch),
                    self.pos,
                ))
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) if token.kind == TokenKind::EndOfInput => self.finished = true,
            Err(_) => self.finished = true,
            Ok(_) => {}
        }
        Some(result)
    }
}

/// Tokenize the whole input, end-of-input token included
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_simple_row() {
        let tokens = tokenize("a,b").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].text, "a");
        assert_eq!(tokens[1].kind, TokenKind::FieldSep);
        assert_eq!(tokens[2].text, "b");
        assert_eq!(tokens[3].kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(
            kinds("a\r\nb\nc\rd"),
            vec![
                TokenKind::Text,
                TokenKind::RowSep(LineEnding::CrLf),
                TokenKind::Text,
                TokenKind::RowSep(LineEnding::Lf),
                TokenKind::Text,
                TokenKind::RowSep(LineEnding::Cr),
                TokenKind::Text,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_quoted_with_escapes_and_newline() {
        let tokens = tokenize("\"say \"\"hi\"\"\nnow\",x").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::QuotedString);
        assert_eq!(tokens[0].text, "\"say \"\"hi\"\"\nnow\"");
        assert_eq!(tokens[1].kind, TokenKind::FieldSep);
        assert_eq!(tokens[1].position.line, 2);
        assert_eq!(tokens[1].position.column, 5);
    }

    #[test]
    fn test_empty_quoted() {
        let tokens = tokenize("\"\"").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::QuotedString);
        assert_eq!(tokens[0].text, "\"\"");
    }

    #[test]
    fn test_unterminated_quote() {
        let err = tokenize("a,\"open").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedQuote);
        assert_eq!(err.position.offset, 2);
        assert_eq!(err.position.column, 3);
    }

    #[test]
    fn test_whitespace_before_quote_is_skipped() {
        let tokens = tokenize("a,  \"b\"  ,c").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["a", ",", "\"b\"", ",", "c", ""]);
    }

    #[test]
    fn test_whitespace_contiguous_with_text_is_kept() {
        let tokens = tokenize("  x y  ,z").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].text, "  x y  ");
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(kinds(" \t "), vec![TokenKind::EndOfInput]);
    }

    #[test]
    fn test_single_end_of_input() {
        let mut lexer = Lexer::new("a");
        assert!(lexer.next().is_some());
        assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::EndOfInput);
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_reset_restarts() {
        let mut lexer = Lexer::new("a,b");
        let first: Vec<_> = lexer.by_ref().collect();
        lexer.reset();
        let second: Vec<_> = lexer.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_error_stops_iteration() {
        let mut lexer = Lexer::new("\"x");
        assert!(lexer.next().unwrap().is_err());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_unicode_text() {
        let tokens = tokenize("ARIAS HERNÁNDEZ MARIO DE JESÚS,10").unwrap();
        assert_eq!(tokens[0].text, "ARIAS HERNÁNDEZ MARIO DE JESÚS");
        assert_eq!(tokens[1].position.column, 31);
    }
}
