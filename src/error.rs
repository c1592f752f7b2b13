//! Error types for the movie-dialogue-analysis library.
//!
//! This module provides custom error types using `thiserror` so that every
//! pipeline stage reports which file, line or value caused a run to abort.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while analyzing the dialogue corpus.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// An input file could not be read
    #[error("Failed to read {path}: {source}")]
    Load {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing or writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row does not have the number of fields its table declares
    #[error("{file} line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        /// Source file name
        file: String,
        /// 1-based line number
        line: u64,
        /// Declared column count
        expected: usize,
        /// Fields actually present
        found: usize,
    },

    /// A field could not be converted into its typed column
    #[error("{file} line {line}: {message}")]
    MalformedRow {
        /// Source file name
        file: String,
        /// 1-based line number
        line: u64,
        /// Description of the conversion failure
        message: String,
    },

    /// Release year that is not a four-digit year after stripping the suffix
    #[error("Invalid release year: {0:?}")]
    InvalidYear(String),

    /// The polarity scorer rejected a dialogue text
    #[error("Sentiment scoring failed: {0}")]
    Scoring(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Result with `AnalysisError`
pub type Result<T> = std::result::Result<T, AnalysisError>;
