//! Shared error types for suryacore.
//!
//! Failing to find an ingredient is not represented here: a lookup miss is a
//! regular outcome (`Lookup::NotFound`), not an error. Everything in this
//! enum is either a fatal startup condition (bad dataset, bad config) or a
//! rejected user input.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for suryacore operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed tabular input
    #[error("Failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is not present in the header row
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    /// The dataset has a header but no usable rows
    #[error("Dataset {} contains no ingredient rows", .path.display())]
    EmptyDataset { path: PathBuf },

    /// A cell that should hold a number holds something else
    #[error("Invalid number '{value}' in column '{column}' on line {line}")]
    InvalidNumber {
        column: String,
        value: String,
        line: u64,
    },

    /// Two rows share a name while duplicates are rejected
    #[error("Duplicate ingredient '{name}' on line {line} (first seen on line {first_line})")]
    DuplicateName {
        name: String,
        line: u64,
        first_line: u64,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rejected user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// TOML configuration parse errors
    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type alias using the shared error type
pub type Result<T> = std::result::Result<T, Error>;
