use anyhow::{anyhow, Result};
use std::path::Path;

use crate::models::{
    CHARACTERS_FILE, CONVERSATIONS_FILE, LINES_FILE, SCRIPT_URLS_FILE, TITLES_FILE,
};

/// Every file the corpus loader reads
pub const INPUT_FILES: [&str; 5] = [
    LINES_FILE,
    CHARACTERS_FILE,
    TITLES_FILE,
    CONVERSATIONS_FILE,
    SCRIPT_URLS_FILE,
];

/// Validation utilities for run inputs and outputs
#[derive(Debug, Copy, Clone)]
pub struct InputValidator;

impl InputValidator {
    /// Validate that the data directory exists and holds every corpus file
    pub fn validate_data_dir(dir: &Path) -> Result<()> {
        if !dir.is_dir() {
            return Err(anyhow!("Data directory not found: {}", dir.display()));
        }

        let missing: Vec<&str> = INPUT_FILES
            .iter()
            .copied()
            .filter(|name| !dir.join(name).is_file())
            .collect();

        if !missing.is_empty() {
            return Err(anyhow!(
                "Data directory {} is missing: {}",
                dir.display(),
                missing.join(", ")
            ));
        }

        Ok(())
    }

    /// Validate an output directory path
    pub fn validate_output_dir(path: &Path) -> Result<()> {
        let path_str = path.to_string_lossy();
        if path_str.is_empty() {
            return Err(anyhow!("Output directory cannot be empty"));
        }

        if path_str.contains('\0') {
            return Err(anyhow!("Output directory contains invalid characters"));
        }

        // Check path length
        if path_str.len() > 4096 {
            return Err(anyhow!("Output directory too long (max 4096 characters)"));
        }

        if path.exists() && !path.is_dir() {
            return Err(anyhow!("Output path is not a directory: {}", path.display()));
        }

        Ok(())
    }
}
