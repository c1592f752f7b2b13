use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::AnalysisError;

/// Application configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub sentiment: SentimentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory holding the five corpus files
    pub data_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the CSV extracts and charts
    pub directory: String,
    /// Render SVG bar charts next to the extracts
    pub charts: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
    pub format: String, // "json" or "text"
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Longest dialogue text the scorer accepts, in characters
    pub max_text_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: InputConfig {
                data_dir: "Data".to_string(),
            },
            output: OutputConfig {
                directory: ".".to_string(),
                charts: false,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                format: "text".to_string(),
            },
            sentiment: SentimentConfig {
                max_text_length: 10000,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence
    ///
    /// Defaults are overridden by `config/default`, `config/local`, the
    /// optional explicit file, then `MOVIE_DIALOGUE__*` environment variables.
    /// The result is not validated; callers apply their own overrides first
    /// and then call [`AppConfig::validate`].
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .map_err(|e| anyhow::anyhow!("Failed to build default configuration: {}", e))?;

        let mut builder = Config::builder()
            // Start with default values
            .add_source(defaults)
            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            // Add environment variables with prefix
            .add_source(
                Environment::with_prefix("MOVIE_DIALOGUE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

        config
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize configuration: {}", e))
    }

    /// Validate configuration values
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.input.data_dir.trim().is_empty() {
            return Err(AnalysisError::InvalidConfig(
                "input.data_dir must not be empty".to_string(),
            ));
        }
        if self.output.directory.trim().is_empty() {
            return Err(AnalysisError::InvalidConfig(
                "output.directory must not be empty".to_string(),
            ));
        }

        // Validate logging config
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(AnalysisError::InvalidConfig(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.logging.level, valid_levels
            )));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(AnalysisError::InvalidConfig(format!(
                "Invalid log format: {}. Must be one of: {:?}",
                self.logging.format, valid_formats
            )));
        }

        if self.sentiment.max_text_length == 0 {
            return Err(AnalysisError::InvalidConfig(
                "max_text_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Directory holding the corpus files
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.input.data_dir)
    }

    /// Directory receiving the outputs
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.output.directory)
    }
}
