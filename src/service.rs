use crate::aggregate::{by_gender, by_year, yearly_gender_counts};
use crate::charts::write_charts;
use crate::config::AppConfig;
use crate::error::Result;
use crate::export::{export_all, ExportTables};
use crate::join::{join_lines, JoinReport};
use crate::loader::load_corpus;
use crate::logging::OperationTimer;
use crate::metrics::PipelineMetrics;
use crate::normalize::{normalize_characters, normalize_titles};
use crate::sentiment::{score_lines, PolarityScorer};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub join: JoinReport,
    pub metrics: PipelineMetrics,
    /// CSV extracts followed by any charts
    pub files: Vec<PathBuf>,
}

pub struct AnalysisService {
    config: AppConfig,
    scorer: Box<dyn PolarityScorer>,
}

impl AnalysisService {
    pub fn new(config: AppConfig, scorer: Box<dyn PolarityScorer>) -> Self {
        Self { config, scorer }
    }

    /// Run the whole pipeline: load, normalize, join, score, aggregate, export.
    ///
    /// Nothing is written unless every earlier stage succeeded. Charts are
    /// rendered after the extracts are in place; a chart that cannot be
    /// written is logged and counted without failing the run.
    pub fn run(&self) -> Result<RunSummary> {
        let timer = OperationTimer::new("analysis");
        let mut metrics = PipelineMetrics::default();

        let tables = load_corpus(&self.config.data_dir())?;
        metrics.record_table_loaded("lines", tables.lines.len());
        metrics.record_table_loaded("characters", tables.characters.len());
        metrics.record_table_loaded("titles", tables.titles.len());
        metrics.record_table_loaded("conversations", tables.conversations.len());
        metrics.record_table_loaded("script_urls", tables.script_urls.len());

        let characters = normalize_characters(tables.characters);
        let movies = normalize_titles(tables.titles)?;

        let (joined, join) = join_lines(&tables.lines, &characters, &movies, &tables.script_urls);
        metrics.record_join_stage("characters", join.with_characters);
        metrics.record_join_stage("movies", join.with_movies);
        metrics.record_join_stage("script_urls", join.with_script_urls);
        info!(
            lines = join.lines,
            joined = join.with_script_urls,
            dropped = join.dropped(),
            "Joined dialogue lines"
        );

        let scored = score_lines(self.scorer.as_ref(), joined);
        metrics.record_scoring(scored.rows.len(), scored.failures);

        let year_stats = by_year(scored.rows.iter().map(|s| &s.line));
        let gender_stats = by_gender(scored.rows.iter().map(|s| &s.line));
        let counts = yearly_gender_counts(scored.rows.iter().map(|s| &s.line));
        let fractions = counts.fractions();

        let export_started = Instant::now();
        let output_dir = self.config.output_dir();
        let export = ExportTables {
            lines: &scored.rows,
            by_gender: &gender_stats,
            by_year: &year_stats,
            yearly_gender_counts: &counts,
            yearly_gender_fractions: &fractions,
            conversations: &tables.conversations,
        };
        let mut files = export_all(&export, &output_dir)?;

        if self.config.output.charts {
            match write_charts(&year_stats, &gender_stats, &output_dir) {
                Ok(charts) => files.extend(charts),
                Err(e) => {
                    warn!(error = %e, "Failed to write charts, keeping CSV extracts");
                    metrics.record_chart_failure();
                }
            }
        }
        metrics.record_export(files.len(), export_started.elapsed());

        info!(files = files.len(), output = %output_dir.display(), "Analysis complete");
        timer.finish();

        Ok(RunSummary {
            join,
            metrics,
            files,
        })
    }
}
