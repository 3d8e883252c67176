//! Top-level configuration
//!
//! Every field has a default, so a partial JSON document is enough:
//!
//! ```
//! use gradecsv::Config;
//!
//! let config = Config::from_json_str(r#"{"grades": {"pass_mark": 6.0}}"#).unwrap();
//! assert_eq!(config.grades.pass_mark, 6.0);
//! assert_eq!(config.advisory.first_column, 2);
//! ```

use crate::csv::extract::AdvisoryConfig;
use crate::csv::parser::ParserConfig;
use crate::error::{Result, SheetError};
use crate::grades::GradeConfig;
use serde::Deserialize;
use std::path::Path;

/// Parser, advisory and grade settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Parser limits
    pub parser: ParserConfig,
    /// Out-of-range grade warnings
    pub advisory: AdvisoryConfig,
    /// Grade column names, weights and pass mark
    pub grades: GradeConfig,
}

impl Config {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parser configuration
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    /// Set the advisory configuration
    pub fn with_advisory(mut self, advisory: AdvisoryConfig) -> Self {
        self.advisory = advisory;
        self
    }

    /// Set the grade configuration
    pub fn with_grades(mut self, grades: GradeConfig) -> Self {
        self.grades = grades;
        self
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log_debug!("loaded configuration from {}", path.as_ref().display());
        Self::from_json_str(&json)
    }

    /// Reject settings that cannot be applied
    pub fn validate(&self) -> Result<()> {
        if self.parser.max_input_size == 0 {
            return Err(SheetError::Config {
                message: "parser.max_input_size must be greater than zero".to_string(),
            });
        }

        let advisory = &self.advisory;
        if !advisory.min.is_finite() || !advisory.max.is_finite() || advisory.min > advisory.max
        {
            return Err(SheetError::Config {
                message: format!(
                    "advisory range [{}, {}] is not a valid interval",
                    advisory.min, advisory.max
                ),
            });
        }

        self.grades.validate()
    }
}
