//! Prelude module for convenient imports
//!
//! ```
//! use gradecsv::prelude::*;
//!
//! let analysis = analyze("a,b\n1,2", &Config::default()).unwrap();
//! assert_eq!(analysis.summary.total_rows, 2);
//! ```
//!
//! # Re-exported Items
//!
//! ## Pipeline
//! - [`analyze()`] - Pre-check, parse and extract in one call
//! - [`Analysis`] - Document plus summary
//! - [`Config`] - Parser, advisory and grade settings
//!
//! ## CSV
//! - [`parse()`] - Parse text into a [`CsvTree`]
//! - [`extract()`] - Decode a tree into a [`Document`]
//! - [`CsvWriter`] - CSV output
//!
//! ## Grades
//! - [`GradeEvaluator`] - Computes CAL and RED
//! - [`GradeReport`] - Evaluated rows
//!
//! ## Error Handling
//! - [`SheetError`] - Crate-wide error
//! - [`Result`] - Result alias

// ============================================================================
// Pipeline
// ============================================================================

pub use crate::analyze::{analyze, Analysis};
pub use crate::config::Config;

// ============================================================================
// CSV
// ============================================================================

pub use crate::csv::{
    extract, parse, AdvisoryConfig, CsvTree, CsvWriter, Document, ParserConfig, QuoteStyle,
    Summary,
};

// ============================================================================
// Grades
// ============================================================================

pub use crate::grades::{GradeConfig, GradeEvaluator, GradeReport, StudentGrade};

// ============================================================================
// Error Handling
// ============================================================================

pub use crate::error::{Result, SheetError};
