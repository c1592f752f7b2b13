//! Movie Dialogue Analysis - corpus joins, aggregates and sentiment
//!
//! A Rust library for turning the pipe-delimited movie-dialogue corpus into
//! an enriched line table and its gender and release-year aggregates.
//!
//! # Features
//!
//! - Load the five fixed-schema corpus files (ISO-8859-1, `|`-separated)
//! - Inner-join lines with characters, movies and script URLs
//! - Normalize gender markers and release years
//! - Score the polarity of every line of dialogue
//! - Export CSV extracts and optional SVG bar charts

/// Group-by aggregation by gender and release year
pub mod aggregate;
/// SVG bar chart rendering
pub mod charts;
/// Configuration management
pub mod config;
/// Error types
pub mod error;
/// CSV export
pub mod export;
/// Inner joins across the corpus tables
pub mod join;
/// Corpus file loading
pub mod loader;
/// Logging setup and utilities
pub mod logging;
/// Metrics collection
pub mod metrics;
/// Data models and structures
pub mod models;
/// Gender and year normalization
pub mod normalize;
/// Polarity scoring
pub mod sentiment;
/// End-to-end pipeline
pub mod service;
/// Input validation and sanitization
pub mod validation;

// Re-export key components for easier access
pub use error::{AnalysisError, Result};
pub use models::{JoinedLine, PolarityScores, ScoredLine};
pub use sentiment::{LexiconScorer, PolarityScorer};
pub use service::{AnalysisService, RunSummary};
