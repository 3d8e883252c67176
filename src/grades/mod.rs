//! Grade sheet evaluation
//!
//! Locates the PA/Q1/Q2/LAB/EXA columns of a [`Document`](crate::csv::Document)
//! by name, computes the weighted grade of every data row and writes it
//! back into the CAL and RED columns.

pub mod config;
pub mod evaluator;

pub use config::{GradeColumns, GradeConfig, GradeWeights};
pub use evaluator::{
    evaluate, round_grade, ColumnLayout, GradeEvaluator, GradeReport, MissingColumnsError,
    StudentGrade,
};
