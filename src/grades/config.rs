//! Grade sheet configuration

use crate::error::{Result, SheetError};
use serde::Deserialize;

/// Header names of the grade columns (matched case-insensitively)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GradeColumns {
    /// Partial activities; may appear in several columns
    pub activities: String,
    /// First quiz
    pub quiz1: String,
    /// Second quiz
    pub quiz2: String,
    /// Lab
    pub lab: String,
    /// Exam
    pub exam: String,
    /// Computed grade, written with 2 decimals
    pub grade: String,
    /// Rounded grade, written with 1 decimal
    pub rounded: String,
}

impl Default for GradeColumns {
    fn default() -> Self {
        Self {
            activities: "PA".to_string(),
            quiz1: "Q1".to_string(),
            quiz2: "Q2".to_string(),
            lab: "LAB".to_string(),
            exam: "EXA".to_string(),
            grade: "CAL".to_string(),
            rounded: "RED".to_string(),
        }
    }
}

/// Weight of each component in the final grade
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GradeWeights {
    /// Mean of the partial activities
    pub activities: f64,
    /// Mean of the two quizzes
    pub quizzes: f64,
    /// Lab
    pub lab: f64,
    /// Exam
    pub exam: f64,
}

impl Default for GradeWeights {
    fn default() -> Self {
        Self {
            activities: 0.10,
            quizzes: 0.20,
            lab: 0.40,
            exam: 0.30,
        }
    }
}

/// Everything the grade evaluator needs to know
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GradeConfig {
    /// Column names
    pub columns: GradeColumns,
    /// Component weights
    pub weights: GradeWeights,
    /// Grades below this round to zero
    pub pass_mark: f64,
}

impl Default for GradeConfig {
    fn default() -> Self {
        Self {
            columns: GradeColumns::default(),
            weights: GradeWeights::default(),
            pass_mark: 7.0,
        }
    }
}

impl GradeConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column names
    pub fn with_columns(mut self, columns: GradeColumns) -> Self {
        self.columns = columns;
        self
    }

    /// Set the component weights
    pub fn with_weights(mut self, weights: GradeWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the pass mark
    pub fn with_pass_mark(mut self, pass_mark: f64) -> Self {
        self.pass_mark = pass_mark;
        self
    }

    /// Reject configurations the evaluator cannot use
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        let weights = [
            ("activities", w.activities),
            ("quizzes", w.quizzes),
            ("lab", w.lab),
            ("exam", w.exam),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SheetError::Config {
                    message: format!("weight `{}` must be a non-negative number", name),
                });
            }
        }

        if !self.pass_mark.is_finite() {
            return Err(SheetError::Config {
                message: "pass_mark must be a finite number".to_string(),
            });
        }

        let c = &self.columns;
        for name in [&c.activities, &c.quiz1, &c.quiz2, &c.lab, &c.exam] {
            if name.trim().is_empty() {
                return Err(SheetError::Config {
                    message: "grade column names must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
