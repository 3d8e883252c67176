//! Extracted CSV content
//!
//! A [`Document`] is the decoded form of a parse tree: the first row is the
//! header, the rest are data rows, and every field is a plain string.

use super::extract::AdvisoryWarning;
use crate::error::{Result, SheetError};
use serde::Serialize;

/// Header plus data rows, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    total_fields: usize,
    warnings: Vec<AdvisoryWarning>,
}

impl Document {
    /// Build a document from a header and data rows
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self::with_warnings(header, rows, Vec::new())
    }

    pub(crate) fn with_warnings(
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        warnings: Vec<AdvisoryWarning>,
    ) -> Self {
        let total_fields = header.len() + rows.iter().map(Vec::len).sum::<usize>();
        Self {
            header,
            rows,
            total_fields,
            warnings,
        }
    }

    /// Column names (first row of the input)
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows (every row after the header)
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Sum of field counts over every row, header included
    pub fn total_fields(&self) -> usize {
        self.total_fields
    }

    /// Advisory warnings raised during extraction
    pub fn warnings(&self) -> &[AdvisoryWarning] {
        &self.warnings
    }

    /// Number of rows, header included
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    /// Summary statistics
    pub fn summary(&self) -> Summary {
        let empty_fields = self
            .header
            .iter()
            .chain(self.rows.iter().flatten())
            .filter(|f| f.is_empty())
            .count();

        Summary {
            total_rows: self.row_count(),
            total_columns: self.header.len(),
            total_fields: self.total_fields,
            empty_fields,
        }
    }

    /// Serialize as `{"header": .., "rows": .., "total_fields": .., "warnings": ..}`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty-printed variant of [`Document::to_json`]
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Counts describing a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Rows including the header
    pub total_rows: usize,
    /// Number of header columns
    pub total_columns: usize,
    /// Fields across all rows
    pub total_fields: usize,
    /// Fields whose value is the empty string
    pub empty_fields: usize,
}

/// Cheap check run before parsing
///
/// Rejects input that has no content besides whitespace and commas.
pub fn validate_structure(input: &str) -> Result<()> {
    if input.is_empty() {
        return Err(SheetError::InvalidStructure {
            reason: "empty file".to_string(),
        });
    }

    if input.chars().all(|c| c.is_whitespace() || c == ',') {
        return Err(SheetError::InvalidStructure {
            reason: "no content besides whitespace and commas".to_string(),
        });
    }

    Ok(())
}
