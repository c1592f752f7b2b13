//! Loading of the pipe-delimited corpus files.
//!
//! The corpus ships as five headerless, `|`-separated files in ISO-8859-1.
//! Every table is read whole; any malformed row aborts the load.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::error::{AnalysisError, Result};
use crate::logging::OperationTimer;
use crate::models::{Character, Conversation, Line, ScriptUrl, TableRecord, Title};

/// All five input tables as loaded from disk
#[derive(Debug, Clone, Default)]
pub struct CorpusTables {
    pub lines: Vec<Line>,
    pub characters: Vec<Character>,
    pub titles: Vec<Title>,
    pub conversations: Vec<Conversation>,
    pub script_urls: Vec<ScriptUrl>,
}

/// Decode ISO-8859-1 bytes. Each byte maps to the code point of the same value.
#[must_use]
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Parse the raw bytes of one input file into typed rows.
///
/// `source_name` is only used in error messages.
pub fn parse_table<T: TableRecord>(source_name: &str, bytes: &[u8]) -> Result<Vec<T>> {
    let text = decode_latin1(bytes);
    let mut reader = ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let expected = T::COLUMNS.len();
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);

        if record.len() != expected {
            return Err(AnalysisError::FieldCount {
                file: source_name.to_string(),
                line,
                expected,
                found: record.len(),
            });
        }

        let row: T = record.deserialize(None).map_err(|e| AnalysisError::MalformedRow {
            file: source_name.to_string(),
            line,
            message: e.to_string(),
        })?;
        rows.push(row);
    }

    Ok(rows)
}

/// Load one table from the data directory
pub fn load_table<T: TableRecord>(data_dir: &Path) -> Result<Vec<T>> {
    let path = data_dir.join(T::FILE_NAME);
    debug!("Reading {}", path.display());

    let bytes = fs::read(&path).map_err(|source| AnalysisError::Load {
        path: path.clone(),
        source,
    })?;

    let rows = parse_table::<T>(T::FILE_NAME, &bytes)?;
    info!(file = T::FILE_NAME, rows = rows.len(), "Loaded table");
    Ok(rows)
}

/// Load all five corpus tables
pub fn load_corpus(data_dir: &Path) -> Result<CorpusTables> {
    let timer = OperationTimer::new("load_corpus");

    let tables = CorpusTables {
        lines: load_table(data_dir)?,
        characters: load_table(data_dir)?,
        titles: load_table(data_dir)?,
        conversations: load_table(data_dir)?,
        script_urls: load_table(data_dir)?,
    };

    timer.finish();
    Ok(tables)
}
