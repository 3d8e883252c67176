//! gradecsv - CSV grammar parser with grade-sheet evaluation
//!
//! It provides:
//! - A character-dispatch tokenizer tolerant of `\n`, `\r\n` line endings
//! - A recursive-descent parser for the row/field grammar
//! - Extraction into a [`Document`] with out-of-range grade warnings
//! - Grade evaluation (weighted averages and the rounding rule)
//! - A CSV writer that re-quotes fields when needed
//!
//! ## Quick Start
//!
//! ```rust
//! use gradecsv::{analyze, Config};
//!
//! let input = "nombre,edad\nCristian,24\nOscar,";
//! let analysis = analyze(input, &Config::default()).unwrap();
//!
//! assert_eq!(analysis.document.rows()[1], vec!["Oscar", ""]);
//! assert_eq!(
//!     analysis.document.to_json().unwrap(),
//!     r#"{"header":["nombre","edad"],"rows":[["Cristian","24"],["Oscar",""]],"total_fields":6,"warnings":[]}"#
//! );
//! ```
//!
//! ## Grade Sheets
//!
//! ```rust
//! use gradecsv::{analyze, Config, GradeConfig};
//!
//! let input = "PA,Q1,Q2,LAB,EXA,CAL,RED\n10,3,5.3,10,7.24,,";
//! let analysis = analyze(input, &Config::default()).unwrap();
//! let report = analysis.grades(&GradeConfig::default()).unwrap();
//!
//! assert_eq!(report.rows[0][5], "8.00");
//! assert_eq!(report.rows[0][6], "8.0");
//! ```
//!
//! ## Feature Flags
//!
//! - `logging` (default) - Debug and warning output through the `log` crate

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

#[macro_use]
mod macros;

// Prelude module for convenient imports
pub mod prelude;

pub mod analyze;
pub mod config;
pub mod csv;
pub mod error;
pub mod grades;

/// Re-export commonly used types for convenience
pub use analyze::{analyze, Analysis};
pub use config::Config;
pub use csv::{
    extract, parse, parse_with_config, tokenize, validate_structure, write_csv, AdvisoryConfig,
    AdvisoryWarning, CsvTree, CsvWriter, Document, Field, LexError, ParseError, ParserConfig,
    QuoteStyle, SourcePosition, Summary,
};
pub use error::{Result, SheetError};
pub use grades::{
    evaluate, round_grade, GradeConfig, GradeEvaluator, GradeReport, MissingColumnsError,
    StudentGrade,
};
