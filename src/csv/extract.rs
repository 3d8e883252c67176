//! Semantic extraction: parse tree to [`Document`]
//!
//! Visits rows and fields in source order, decodes every field, and raises
//! advisory warnings for numeric-looking fields outside the expected grade
//! range. Warnings never abort extraction.

use super::ast::CsvTree;
use super::document::Document;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parse a field as a finite real number
///
/// Surrounding whitespace is ignored. `inf`/`NaN` are not numbers here.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Which fields are checked for out-of-range values
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    /// Whether to check at all
    pub enabled: bool,
    /// First column index (0-based) that holds grades
    pub first_column: usize,
    /// Smallest acceptable value (inclusive)
    pub min: f64,
    /// Largest acceptable value (inclusive)
    pub max: f64,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            first_column: 2,
            min: 0.0,
            max: 10.0,
        }
    }
}

impl AdvisoryConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable range checks
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Set the first checked column (0-based)
    pub fn with_first_column(mut self, column: usize) -> Self {
        self.first_column = column;
        self
    }

    /// Set the inclusive acceptable range
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    fn check(&self, row: usize, column: usize, value: &str) -> Option<AdvisoryWarning> {
        if !self.enabled || column < self.first_column || value.is_empty() {
            return None;
        }

        let grade = parse_number(value)?;
        if (self.min..=self.max).contains(&grade) {
            return None;
        }

        Some(AdvisoryWarning {
            row,
            column,
            value: value.to_string(),
        })
    }
}

/// A numeric field outside the acceptable range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryWarning {
    /// Row index (0-based, header is row 0)
    pub row: usize,
    /// Column index (0-based)
    pub column: usize,
    /// The decoded field value
    pub value: String,
}

impl fmt::Display for AdvisoryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid grade '{}' in row {}, column {}",
            self.value,
            self.row + 1,
            self.column + 1
        )
    }
}

/// Walk `tree` into a [`Document`]
pub fn extract(tree: &CsvTree<'_>, advisory: &AdvisoryConfig) -> Document {
    let mut rows = Vec::with_capacity(tree.rows.len());
    let mut warnings = Vec::new();

    for (row_index, row) in tree.rows.iter().enumerate() {
        let mut values = Vec::with_capacity(row.fields.len());

        for (column, node) in row.fields.iter().enumerate() {
            let value = node.field.value().into_owned();
            if let Some(warning) = advisory.check(row_index, column, &value) {
                log_warn!("{} ({})", warning, node.position);
                warnings.push(warning);
            }
            values.push(value);
        }

        rows.push(values);
    }

    let mut rows = rows.into_iter();
    let header = rows.next().unwrap_or_default();
    Document::with_warnings(header, rows.collect(), warnings)
}
