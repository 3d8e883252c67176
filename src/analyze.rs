//! One-call pipeline: pre-check, parse, extract, summarize

use crate::config::Config;
use crate::csv::document::{validate_structure, Document, Summary};
use crate::csv::extract::extract;
use crate::csv::parser::parse_with_config;
use crate::error::Result;
use crate::grades::{GradeConfig, GradeEvaluator, GradeReport};
use serde::Serialize;

/// Result of [`analyze`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// The decoded document
    pub document: Document,
    /// Counts over the document
    pub summary: Summary,
}

impl Analysis {
    /// Run the grade evaluator over the analyzed document
    pub fn grades(&self, config: &GradeConfig) -> Result<GradeReport> {
        Ok(GradeEvaluator::new(config.clone()).evaluate(&self.document)?)
    }
}

/// Analyze CSV text
///
/// # Errors
///
/// - [`SheetError::InvalidStructure`](crate::SheetError::InvalidStructure)
///   when the input has no content besides whitespace and commas
/// - [`SheetError::Parse`](crate::SheetError::Parse) or
///   [`SheetError::Lex`](crate::SheetError::Lex) for malformed input
///
/// # Example
///
/// ```
/// use gradecsv::{analyze, Config};
///
/// let analysis = analyze("nombre,edad\nCristian,24\nOscar,", &Config::default()).unwrap();
/// assert_eq!(analysis.document.header(), &["nombre", "edad"]);
/// assert_eq!(analysis.summary.total_fields, 6);
/// assert_eq!(analysis.summary.empty_fields, 1);
/// ```
pub fn analyze(input: &str, config: &Config) -> Result<Analysis> {
    validate_structure(input)?;

    let tree = parse_with_config(input, &config.parser)?;
    let document = extract(&tree, &config.advisory);
    let summary = document.summary();

    log_debug!(
        "analyzed {} rows, {} fields, {} warnings",
        summary.total_rows,
        summary.total_fields,
        document.warnings().len()
    );

    Ok(Analysis { document, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SheetError;

    #[test]
    fn test_rejects_blank_input() {
        for input in ["", "   ", ",,,\n,,"] {
            let err = analyze(input, &Config::default()).unwrap_err();
            assert!(matches!(err, SheetError::InvalidStructure { .. }), "{:?}", input);
        }
    }

    #[test]
    fn test_parse_error_propagates() {
        let err = analyze("\"a\"b", &Config::default()).unwrap_err();
        assert!(matches!(err, SheetError::Parse(_)));
    }

    #[test]
    fn test_lex_error_propagates() {
        let err = analyze("a,\"open", &Config::default()).unwrap_err();
        assert!(matches!(err, SheetError::Lex(_)));
    }

    #[test]
    fn test_grades_from_analysis() {
        let input = "PA,Q1,Q2,LAB,EXA,CAL,RED\n10,10,10,10,10,,";
        let analysis = analyze(input, &Config::default()).unwrap();
        let report = analysis.grades(&GradeConfig::default()).unwrap();
        assert_eq!(report.rows[0][5], "10.00");
        assert_eq!(report.rows[0][6], "10.0");
    }

    #[test]
    fn test_grades_missing_columns() {
        let analysis = analyze("nombre,edad\nCristian,24", &Config::default()).unwrap();
        let err = analysis.grades(&GradeConfig::default()).unwrap_err();
        assert!(matches!(err, SheetError::MissingColumns(_)));
    }
}
