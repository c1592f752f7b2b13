//! SVG bar charts of the aggregates.
//!
//! Presentation only: nothing downstream reads these files.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{GenderStats, YearStats};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const MARGIN: f64 = 50.0;

/// A titled set of labelled bars
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<(String, f64)>,
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl BarChart {
    pub fn new(title: &str, bars: Vec<(String, f64)>) -> Self {
        Self {
            title: title.to_string(),
            bars,
        }
    }

    /// Render the chart as a standalone SVG document
    #[must_use]
    pub fn render_svg(&self) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
        );
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="16">{}</text>"#,
            WIDTH / 2.0,
            MARGIN / 2.0,
            escape(&self.title)
        );

        let max = self.bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        let plot_width = WIDTH - 2.0 * MARGIN;
        let plot_height = HEIGHT - 2.0 * MARGIN;
        let slot = plot_width / self.bars.len().max(1) as f64;

        for (i, (label, value)) in self.bars.iter().enumerate() {
            let height = if max > 0.0 { value / max * plot_height } else { 0.0 };
            let x = MARGIN + i as f64 * slot + slot * 0.1;
            let y = HEIGHT - MARGIN - height;
            let _ = writeln!(
                svg,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{:.1}" height="{height:.1}" fill="steelblue"><title>{}: {value}</title></rect>"#,
                slot * 0.8,
                escape(label)
            );
            let _ = writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="10">{}</text>"#,
                x + slot * 0.4,
                HEIGHT - MARGIN + 14.0,
                escape(label)
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Build the standard set of charts from the aggregates
#[must_use]
pub fn standard_charts(years: &[YearStats], genders: &[GenderStats]) -> Vec<(&'static str, BarChart)> {
    let per_year = |f: fn(&YearStats) -> f64| -> Vec<(String, f64)> {
        years.iter().map(|y| (y.year.to_string(), f(y))).collect()
    };
    let per_gender = |f: fn(&GenderStats) -> f64| -> Vec<(String, f64)> {
        genders.iter().map(|g| (g.gender.clone(), f(g))).collect()
    };

    vec![
        (
            "OUTchartLinesPerYear.svg",
            BarChart::new("Lines per year", per_year(|y| y.lines as f64)),
        ),
        (
            "OUTchartMoviesPerYear.svg",
            BarChart::new("Movies per year", per_year(|y| y.movies as f64)),
        ),
        (
            "OUTchartDialogueLengthSum.svg",
            BarChart::new("Dialogue length by gender (sum)", per_gender(|g| g.length_sum as f64)),
        ),
        (
            "OUTchartDialogueLengthMean.svg",
            BarChart::new("Dialogue length by gender (mean)", per_gender(|g| g.length_mean)),
        ),
        (
            "OUTchartWordCountSum.svg",
            BarChart::new("Word count by gender (sum)", per_gender(|g| g.word_count_sum as f64)),
        ),
        (
            "OUTchartWordCountMean.svg",
            BarChart::new("Word count by gender (mean)", per_gender(|g| g.word_count_mean)),
        ),
    ]
}

/// Render the standard charts into `output_dir`
pub fn write_charts(
    years: &[YearStats],
    genders: &[GenderStats],
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    standard_charts(years, genders)
        .into_iter()
        .map(|(name, chart)| {
            let path = output_dir.join(name);
            fs::write(&path, chart.render_svg())?;
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_rect_per_bar() {
        let chart = BarChart::new(
            "Lines <per> year",
            vec![("1999".to_string(), 3.0), ("2001".to_string(), 1.0)],
        );
        let svg = chart.render_svg();

        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("Lines &lt;per&gt; year"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_empty_chart_renders() {
        let svg = BarChart::new("empty", Vec::new()).render_svg();
        assert_eq!(svg.matches("<rect").count(), 0);
    }
}
