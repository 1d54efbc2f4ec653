//! CLI argument validation with error accumulation.
//!
//! The scaler itself accepts any factor, so the sample size bounds are
//! enforced here, at the edge where user input arrives. All problems are
//! collected and reported together.

use std::path::Path;

use super::core::SampleConfig;
use crate::errors::Error;

/// A CLI validation error with source context.
#[derive(Debug, Clone, PartialEq)]
pub struct CliValidationError {
    /// The CLI argument that failed validation
    pub argument: String,
    /// Human-readable error message
    pub message: String,
    /// Optional suggestion for fixing
    pub suggestion: Option<String>,
}

impl std::fmt::Display for CliValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[cli:{}] {}", self.argument, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n    suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl From<CliValidationError> for Error {
    fn from(err: CliValidationError) -> Self {
        Error::validation(err.to_string())
    }
}

/// Validate `calculate` arguments, accumulating ALL errors.
pub fn validate_calculate_args(
    ingredient: &str,
    sample_size: f64,
    bounds: &SampleConfig,
    top: Option<usize>,
    data_path: &Path,
) -> Vec<CliValidationError> {
    let mut errors = Vec::new();

    if ingredient.trim().is_empty() {
        errors.push(CliValidationError {
            argument: "INGREDIENT".to_string(),
            message: "ingredient name must not be empty".to_string(),
            suggestion: Some("run `suryacore list` to see available ingredients".to_string()),
        });
    }

    if !sample_size.is_finite() || sample_size < bounds.min || sample_size > bounds.max {
        errors.push(CliValidationError {
            argument: "--sample-size".to_string(),
            message: format!(
                "sample size {} is outside the allowed range {}..={} kg",
                sample_size, bounds.min, bounds.max
            ),
            suggestion: Some("adjust [sample] min/max in .suryacore.toml to widen it".to_string()),
        });
    }

    if top == Some(0) {
        errors.push(CliValidationError {
            argument: "--top".to_string(),
            message: "chart size must be at least 1".to_string(),
            suggestion: Some("use --no-chart to hide the chart".to_string()),
        });
    }

    errors.extend(validate_data_path(data_path));
    errors
}

pub fn validate_data_path(data_path: &Path) -> Option<CliValidationError> {
    if data_path.is_file() {
        return None;
    }
    Some(CliValidationError {
        argument: "--data".to_string(),
        message: format!("dataset file does not exist: {}", data_path.display()),
        suggestion: Some("pass --data or set [data] path in .suryacore.toml".to_string()),
    })
}

/// Render accumulated errors, one per line.
pub fn format_cli_errors(errors: &[CliValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
