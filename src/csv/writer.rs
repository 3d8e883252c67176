//! CSV output
//!
//! Fields are joined with `,` and rows with `\n`. With
//! [`QuoteStyle::Necessary`] (the default) a field containing a comma, a
//! quote or a line break is wrapped in quotes with inner quotes doubled, so
//! the output parses back to the same values. [`QuoteStyle::Never`] writes
//! fields verbatim, which corrupts such fields on re-read.

use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// When to quote a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Quote only fields that would not re-parse unchanged
    #[default]
    Necessary,
    /// Never quote; fields are joined raw
    Never,
}

/// Row-to-line encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWriter {
    quote_style: QuoteStyle,
}

impl CsvWriter {
    /// Create a writer with [`QuoteStyle::Necessary`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quoting policy (builder pattern)
    pub fn quote_style(mut self, style: QuoteStyle) -> Self {
        self.quote_style = style;
        self
    }

    /// Append one encoded row (without line terminator) to `buffer`
    pub fn encode_row<S: AsRef<str>>(&self, fields: &[S], buffer: &mut String) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                buffer.push(',');
            }
            self.encode_field(field.as_ref(), buffer);
        }
    }

    fn encode_field(&self, field: &str, buffer: &mut String) {
        if self.quote_style == QuoteStyle::Necessary && needs_quoting(field) {
            buffer.push('"');
            for ch in field.chars() {
                if ch == '"' {
                    buffer.push('"');
                }
                buffer.push(ch);
            }
            buffer.push('"');
        } else {
            buffer.push_str(field);
        }
    }

    /// Encode a header and data rows, one line each, `\n`-terminated
    pub fn encode_document<S, R>(&self, header: &[S], rows: &[R]) -> String
    where
        S: AsRef<str>,
        R: AsRef<[S]>,
    {
        let mut out = String::new();
        self.encode_row(header, &mut out);
        out.push('\n');
        for row in rows {
            self.encode_row(row.as_ref(), &mut out);
            out.push('\n');
        }
        out
    }

    /// Write a header and data rows to `path`
    pub fn save<P, S, R>(&self, path: P, header: &[S], rows: &[R]) -> Result<()>
    where
        P: AsRef<Path>,
        S: AsRef<str>,
        R: AsRef<[S]>,
    {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        writer.write_all(self.encode_document(header, rows).as_bytes())?;
        writer.flush()?;
        log_debug!(
            "wrote {} rows to {}",
            rows.len() + 1,
            path.as_ref().display()
        );
        Ok(())
    }
}

/// Whether a field would change meaning if written unquoted
///
/// Leading/trailing whitespace counts too: unquoted text is trimmed on read.
fn needs_quoting(field: &str) -> bool {
    field.bytes().any(|b| matches!(b, b',' | b'"' | b'\r' | b'\n'))
        || field.trim() != field
}

/// Encode with the default writer
pub fn write_csv<S: AsRef<str>, R: AsRef<[S]>>(header: &[S], rows: &[R]) -> String {
    CsvWriter::new().encode_document(header, rows)
}
