//! Grade evaluation over an extracted [`Document`]
//!
//! Per data row:
//!
//! ```text
//! pa   = mean of the PA columns that hold numbers (0 if none)
//! q    = (Q1 + Q2) / 2
//! cal  = pa*0.10 + q*0.20 + LAB*0.40 + EXA*0.30
//! red  = 0                      if cal < 7
//!        floor(cal) + 1         if frac(cal) >= 0.5
//!        floor(cal)             otherwise
//! ```
//!
//! Missing or non-numeric Q1/Q2/LAB/EXA values count as 0. `cal` is written
//! to the CAL column with two decimals and `red` to the RED column with one.

use super::config::{GradeColumns, GradeConfig};
use crate::csv::document::Document;
use crate::csv::extract::parse_number;
use crate::csv::writer::CsvWriter;
use crate::error::Result;
use hashbrown::HashMap;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Grade evaluation requested on a header lacking required columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingColumnsError {
    /// Configured names of the absent columns, in PA/Q1/Q2/LAB/EXA order
    pub missing: Vec<String>,
}

impl fmt::Display for MissingColumnsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Missing required grade columns: {}",
            self.missing.join(", ")
        )
    }
}

impl std::error::Error for MissingColumnsError {}

/// Column indices of the grade components within a header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Every PA column
    pub activities: Vec<usize>,
    /// Q1 column
    pub quiz1: usize,
    /// Q2 column
    pub quiz2: usize,
    /// LAB column
    pub lab: usize,
    /// EXA column
    pub exam: usize,
    /// CAL column, if present
    pub grade: Option<usize>,
    /// RED column, if present
    pub rounded: Option<usize>,
}

impl ColumnLayout {
    /// Locate the configured columns in `header`
    ///
    /// Names match case-insensitively. Single-valued columns use their first
    /// occurrence.
    pub fn resolve(
        header: &[String],
        columns: &GradeColumns,
    ) -> std::result::Result<Self, MissingColumnsError> {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, name) in header.iter().enumerate() {
            index.entry(name.to_uppercase()).or_default().push(i);
        }

        let all = |name: &str| -> Vec<usize> {
            index
                .get(&name.to_uppercase())
                .cloned()
                .unwrap_or_default()
        };
        let first = |name: &str| -> Option<usize> {
            let found = index.get(&name.to_uppercase())?;
            if found.len() > 1 {
                log_debug!(
                    "column {} appears {} times, using index {}",
                    name,
                    found.len(),
                    found[0]
                );
            }
            found.first().copied()
        };

        let activities = all(&columns.activities);
        let quiz1 = first(&columns.quiz1);
        let quiz2 = first(&columns.quiz2);
        let lab = first(&columns.lab);
        let exam = first(&columns.exam);

        let mut missing = Vec::new();
        if activities.is_empty() {
            missing.push(columns.activities.clone());
        }
        for (name, found) in [
            (&columns.quiz1, quiz1),
            (&columns.quiz2, quiz2),
            (&columns.lab, lab),
            (&columns.exam, exam),
        ] {
            if found.is_none() {
                missing.push(name.clone());
            }
        }

        match (quiz1, quiz2, lab, exam) {
            (Some(quiz1), Some(quiz2), Some(lab), Some(exam)) if missing.is_empty() => Ok(Self {
                activities,
                quiz1,
                quiz2,
                lab,
                exam,
                grade: first(&columns.grade),
                rounded: first(&columns.rounded),
            }),
            _ => Err(MissingColumnsError { missing }),
        }
    }
}

/// Values computed for one data row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StudentGrade {
    /// Mean of the numeric PA values
    pub activities_average: f64,
    /// Mean of Q1 and Q2
    pub quiz_average: f64,
    /// LAB value
    pub lab: f64,
    /// EXA value
    pub exam: f64,
    /// Weighted grade (CAL)
    pub grade: f64,
    /// Rounded grade (RED)
    pub rounded: f64,
}

/// Header plus data rows with CAL/RED rewritten
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    /// Column names, unchanged from the document
    pub header: Vec<String>,
    /// Data rows with computed columns filled in
    pub rows: Vec<Vec<String>>,
    /// Computed values, one per data row
    #[serde(skip)]
    pub grades: Vec<StudentGrade>,
}

impl GradeReport {
    /// Serialize as `{"header": .., "rows": ..}`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as CSV text with the given writer
    pub fn to_csv(&self, writer: &CsvWriter) -> String {
        writer.encode_document(&self.header, &self.rows)
    }

    /// Write as a CSV file
    pub fn save<P: AsRef<Path>>(&self, path: P, writer: &CsvWriter) -> Result<()> {
        writer.save(path, &self.header, &self.rows)
    }
}

/// Apply the rounding rule to a computed grade
///
/// Below `pass_mark` the result is 0. Otherwise the fractional part is
/// dropped, adding one when it is at least one half.
pub fn round_grade(grade: f64, pass_mark: f64) -> f64 {
    if grade < pass_mark {
        return 0.0;
    }

    let whole = grade.floor();
    if grade - whole >= 0.5 {
        whole + 1.0
    } else {
        whole
    }
}

/// Computes grade columns for a document
#[derive(Debug, Clone, Default)]
pub struct GradeEvaluator {
    config: GradeConfig,
}

impl GradeEvaluator {
    /// Create an evaluator with the given configuration
    pub fn new(config: GradeConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &GradeConfig {
        &self.config
    }

    /// Compute the grade values for one row
    pub fn grade_row(&self, layout: &ColumnLayout, row: &[String]) -> StudentGrade {
        let number = |idx: usize| row.get(idx).and_then(|v| parse_number(v));
        let weights = &self.config.weights;

        let activities: Vec<f64> = layout.activities.iter().filter_map(|&i| number(i)).collect();
        let activities_average = if activities.is_empty() {
            0.0
        } else {
            activities.iter().sum::<f64>() / activities.len() as f64
        };

        let quiz_average =
            (number(layout.quiz1).unwrap_or(0.0) + number(layout.quiz2).unwrap_or(0.0)) / 2.0;
        let lab = number(layout.lab).unwrap_or(0.0);
        let exam = number(layout.exam).unwrap_or(0.0);

        let grade = activities_average * weights.activities
            + quiz_average * weights.quizzes
            + lab * weights.lab
            + exam * weights.exam;

        StudentGrade {
            activities_average,
            quiz_average,
            lab,
            exam,
            grade,
            rounded: round_grade(grade, self.config.pass_mark),
        }
    }

    /// Evaluate every data row of `document`
    ///
    /// Fails without touching any row when a required column is absent.
    pub fn evaluate(
        &self,
        document: &Document,
    ) -> std::result::Result<GradeReport, MissingColumnsError> {
        let layout = ColumnLayout::resolve(document.header(), &self.config.columns)?;
        log_debug!("grade columns resolved: {:?}", layout);

        let mut rows = Vec::with_capacity(document.rows().len());
        let mut grades = Vec::with_capacity(document.rows().len());

        for row in document.rows() {
            let student = self.grade_row(&layout, row);
            let mut updated = row.clone();

            if let Some(idx) = layout.grade {
                put(&mut updated, idx, format!("{:.2}", student.grade));
            }
            if let Some(idx) = layout.rounded {
                put(&mut updated, idx, format!("{:.1}", student.rounded));
            }

            rows.push(updated);
            grades.push(student);
        }

        Ok(GradeReport {
            header: document.header().to_vec(),
            rows,
            grades,
        })
    }
}

/// Set `row[idx]`, padding with empty fields as needed
fn put(row: &mut Vec<String>, idx: usize, value: String) {
    if row.len() <= idx {
        row.resize(idx + 1, String::new());
    }
    row[idx] = value;
}

/// Evaluate with the default configuration
pub fn evaluate(document: &Document) -> std::result::Result<GradeReport, MissingColumnsError> {
    GradeEvaluator::default().evaluate(document)
}
