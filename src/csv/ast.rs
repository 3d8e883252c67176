//! Parse tree for CSV input
//!
//! A tagged-variant tree borrowed from the source text. Field values are
//! decoded on demand with [`Field::value`].

use super::source_location::SourcePosition;
use std::borrow::Cow;

/// A single field as it appeared in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    /// Unquoted text, raw (untrimmed)
    Text(&'a str),
    /// Quoted text, raw (outer quotes and `""` escapes included)
    Quoted(&'a str),
    /// Nothing between two separators
    Empty,
}

impl<'a> Field<'a> {
    /// Decoded field value
    ///
    /// - text is trimmed
    /// - quoted text loses its outer quotes and `""` becomes `"`; it is not trimmed
    /// - empty fields decode to `""`
    pub fn value(&self) -> Cow<'a, str> {
        match *self {
            Field::Text(raw) => Cow::Borrowed(raw.trim()),
            Field::Quoted(raw) => {
                let inner = raw
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or(raw);
                if inner.contains("\"\"") {
                    Cow::Owned(inner.replace("\"\"", "\""))
                } else {
                    Cow::Borrowed(inner)
                }
            }
            Field::Empty => Cow::Borrowed(""),
        }
    }

    /// Name of the lexical alternative that produced this field
    pub fn kind_name(&self) -> &'static str {
        match self {
            Field::Text(_) => "text",
            Field::Quoted(_) => "quoted",
            Field::Empty => "empty",
        }
    }
}

/// A field with its source position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldNode<'a> {
    /// The field
    pub field: Field<'a>,
    /// Where the field starts (for empty fields: where it would start)
    pub position: SourcePosition,
}

/// One row of fields, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowNode<'a> {
    /// Fields, left to right; never empty
    pub fields: Vec<FieldNode<'a>>,
    /// Where the row starts
    pub position: SourcePosition,
}

/// The whole parsed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTree<'a> {
    /// Rows, top to bottom; never empty
    pub rows: Vec<RowNode<'a>>,
}

impl<'a> CsvTree<'a> {
    /// Total number of fields across all rows
    pub fn field_count(&self) -> usize {
        self.rows.iter().map(|r| r.fields.len()).sum()
    }
}
