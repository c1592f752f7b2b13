use metrics::{counter, gauge, histogram};
use std::time::Duration;

/// Metric names emitted through the `metrics` facade
pub const ROWS_LOADED: &str = "movie_dialogue_rows_loaded_total";
pub const JOIN_ROWS: &str = "movie_dialogue_join_rows";
pub const LINES_SCORED: &str = "movie_dialogue_lines_scored_total";
pub const SCORING_FAILURES: &str = "movie_dialogue_scoring_failures_total";
pub const FILES_EXPORTED: &str = "movie_dialogue_files_exported_total";
pub const EXPORT_DURATION: &str = "movie_dialogue_export_duration_seconds";
pub const CHART_FAILURES: &str = "movie_dialogue_chart_failures_total";

/// Metrics collection for one pipeline run
///
/// Every record call is forwarded to the installed `metrics` recorder (a
/// no-op when none is installed) and tallied locally for the run summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineMetrics {
    pub rows_loaded: u64,
    pub rows_joined: u64,
    pub lines_scored: u64,
    pub scoring_failures: u64,
    pub files_exported: u64,
    pub chart_failures: u64,
}

impl PipelineMetrics {
    /// Record the row count of a loaded table
    pub fn record_table_loaded(&mut self, table: &'static str, rows: usize) {
        counter!(ROWS_LOADED, "table" => table).increment(rows as u64);
        self.rows_loaded += rows as u64;
    }

    /// Record the row count surviving a join stage
    pub fn record_join_stage(&mut self, stage: &'static str, rows: usize) {
        gauge!(JOIN_ROWS, "stage" => stage).set(rows as f64);
        self.rows_joined = rows as u64;
    }

    /// Record scoring results
    pub fn record_scoring(&mut self, scored: usize, failures: usize) {
        counter!(LINES_SCORED).increment(scored as u64);
        counter!(SCORING_FAILURES).increment(failures as u64);
        self.lines_scored += scored as u64;
        self.scoring_failures += failures as u64;
    }

    /// Record an export pass
    pub fn record_export(&mut self, files: usize, duration: Duration) {
        counter!(FILES_EXPORTED).increment(files as u64);
        histogram!(EXPORT_DURATION).record(duration.as_secs_f64());
        self.files_exported += files as u64;
    }

    /// Record a chart pass that could not be written
    pub fn record_chart_failure(&mut self) {
        counter!(CHART_FAILURES).increment(1);
        self.chart_failures += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_tally() {
        let mut metrics = PipelineMetrics::default();
        metrics.record_table_loaded("lines", 3);
        metrics.record_table_loaded("characters", 2);
        metrics.record_join_stage("characters", 2);
        metrics.record_join_stage("script_urls", 1);
        metrics.record_scoring(1, 1);
        metrics.record_export(6, Duration::from_millis(5));
        metrics.record_chart_failure();

        assert_eq!(metrics.rows_loaded, 5);
        assert_eq!(metrics.rows_joined, 1);
        assert_eq!(metrics.lines_scored, 1);
        assert_eq!(metrics.scoring_failures, 1);
        assert_eq!(metrics.files_exported, 6);
        assert_eq!(metrics.chart_failures, 1);
    }
}
