use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use movie_dialogue_analysis::config::AppConfig;
use movie_dialogue_analysis::logging::init_logging;
use movie_dialogue_analysis::validation::InputValidator;
use movie_dialogue_analysis::{AnalysisService, LexiconScorer};

/// Analyze the movie-dialogue corpus and write CSV extracts.
///
/// With no arguments the corpus is read from `Data/` and the extracts are
/// written to the current directory.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file layered over the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the five corpus files
    #[arg(short, long)]
    data_dir: Option<String>,

    /// Directory receiving the outputs
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Also render SVG bar charts
    #[arg(long)]
    charts: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.input.data_dir = data_dir;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output.directory = output_dir;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.output.charts |= cli.charts;
    config.validate()?;

    // Initialize logging
    let _log_guard = init_logging(&config.logging)?;

    info!("Starting movie dialogue analysis");

    InputValidator::validate_data_dir(&config.data_dir())?;
    InputValidator::validate_output_dir(&config.output_dir())?;

    let scorer = LexiconScorer::new(config.sentiment.max_text_length)
        .context("Failed to create sentiment scorer")?;
    let service = AnalysisService::new(config, Box::new(scorer));

    match service.run() {
        Ok(summary) => {
            info!(
                lines = summary.join.lines,
                joined = summary.join.with_script_urls,
                scoring_failures = summary.metrics.scoring_failures,
                files = summary.files.len(),
                "Run finished"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Run aborted");
            Err(e.into())
        }
    }
}
