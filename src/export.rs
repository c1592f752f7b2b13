//! CSV export of the joined table and its aggregates.
//!
//! Every extract is comma-separated UTF-8 with a header row. Files are first
//! written next to their destination with a `.tmp` suffix and only renamed
//! into place once all of them were written, so a failed export leaves no
//! partial outputs behind.

use crate::error::Result;
use crate::models::{
    Conversation, GenderStats, ScoredLine, TableRecord, YearStats, YearlyGenderCounts,
    YearlyGenderFractions,
};
use csv::Writer;
use std::fs::{self, create_dir_all, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Joined and scored lines
pub const LINES_FULL_FILE: &str = "OUTtabMovieLinesFull.csv";
/// Statistics per gender
pub const GENDER_GROUPS_FILE: &str = "OUTtabGenderGroups.csv";
/// Line counts per year and gender
pub const YEARLY_GENDER_COUNT_FILE: &str = "OUTtabYearlyGenderCount.csv";
/// Gender shares per year
pub const YEARLY_GENDER_PERCENTAGES_FILE: &str = "OUTtabYearlyGenderPercentages.csv";
/// Raw conversations table
pub const CONVERSATIONS_FILE: &str = "OUTtabMovieConversations.csv";
/// Lines and movies per year
pub const YEARLY_COUNTS_FILE: &str = "OUTtabYearlyCounts.csv";

const LINES_FULL_HEADER: [&str; 19] = [
    "Line ID",
    "Character ID",
    "Movie ID",
    "Dialogue",
    "Character Name",
    "Gender",
    "Position",
    "Movie Title",
    "Year",
    "IMDb Rating",
    "IMDb Votes",
    "Genres",
    "Raw Script URL",
    "Dialogue Length",
    "Word Count",
    "neg",
    "neu",
    "pos",
    "compound",
];

/// Everything the exporter writes for one run
#[derive(Debug, Clone, Copy)]
pub struct ExportTables<'a> {
    pub lines: &'a [ScoredLine],
    pub by_gender: &'a [GenderStats],
    pub by_year: &'a [YearStats],
    pub yearly_gender_counts: &'a YearlyGenderCounts,
    pub yearly_gender_fractions: &'a YearlyGenderFractions,
    pub conversations: &'a [Conversation],
}

fn csv_writer(file_path: &Path) -> Result<Writer<BufWriter<File>>> {
    let file = File::create(file_path)?;
    Ok(Writer::from_writer(BufWriter::new(file)))
}

/// Write the joined and scored lines.
pub fn write_lines_full(lines: &[ScoredLine], file_path: &Path) -> Result<()> {
    let mut writer = csv_writer(file_path)?;
    writer.write_record(LINES_FULL_HEADER)?;

    for scored in lines {
        let line = &scored.line;
        let sentiment = &scored.sentiment;
        let record: [&str; 19] = [
            &line.line_id,
            &line.character_id,
            &line.movie_id,
            &line.dialogue,
            &line.character_name,
            &line.gender,
            &line.position,
            &line.movie_title,
            &line.release_year.to_string(),
            &line.imdb_rating.to_string(),
            &line.imdb_votes.to_string(),
            &line.genres,
            &line.script_url,
            &line.stats.length.to_string(),
            &line.stats.word_count.to_string(),
            &sentiment.negative.to_string(),
            &sentiment.neutral.to_string(),
            &sentiment.positive.to_string(),
            &sentiment.compound.to_string(),
        ];
        writer.write_record(record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write per-gender statistics.
pub fn write_gender_groups(groups: &[GenderStats], file_path: &Path) -> Result<()> {
    let mut writer = csv_writer(file_path)?;
    writer.write_record([
        "Gender",
        "Characters",
        "Lines",
        "Dialogue Length Sum",
        "Dialogue Length Mean",
        "Word Count Sum",
        "Word Count Mean",
    ])?;

    for group in groups {
        writer.write_record([
            group.gender.clone(),
            group.characters.to_string(),
            group.lines.to_string(),
            group.length_sum.to_string(),
            group.length_mean.to_string(),
            group.word_count_sum.to_string(),
            group.word_count_mean.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write per-year line and movie counts.
pub fn write_yearly_counts(years: &[YearStats], file_path: &Path) -> Result<()> {
    let mut writer = csv_writer(file_path)?;
    writer.write_record(["Year", "Lines", "Movies"])?;

    for year in years {
        writer.write_record([
            year.year.to_string(),
            year.lines.to_string(),
            year.movies.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn year_gender_header(genders: &[String]) -> Vec<&str> {
    std::iter::once("Year")
        .chain(genders.iter().map(String::as_str))
        .collect()
}

/// Write line counts per year with one column per gender.
pub fn write_yearly_gender_counts(counts: &YearlyGenderCounts, file_path: &Path) -> Result<()> {
    let mut writer = csv_writer(file_path)?;
    writer.write_record(year_gender_header(&counts.genders))?;

    for (year, row) in &counts.rows {
        let record: Vec<String> = std::iter::once(year.to_string())
            .chain(row.iter().map(ToString::to_string))
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write gender shares per year. Undefined shares become empty cells.
pub fn write_yearly_gender_fractions(
    fractions: &YearlyGenderFractions,
    file_path: &Path,
) -> Result<()> {
    let mut writer = csv_writer(file_path)?;
    writer.write_record(year_gender_header(&fractions.genders))?;

    for (year, row) in &fractions.rows {
        let record: Vec<String> = std::iter::once(year.to_string())
            .chain(row.iter().map(|f| f.map(|v| v.to_string()).unwrap_or_default()))
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the conversations table as loaded.
pub fn write_conversations(conversations: &[Conversation], file_path: &Path) -> Result<()> {
    let mut writer = csv_writer(file_path)?;
    writer.write_record(Conversation::COLUMNS)?;

    for conversation in conversations {
        writer.write_record([
            &conversation.first_character_id,
            &conversation.second_character_id,
            &conversation.movie_id,
            &conversation.line_ids,
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write every extract into `output_dir`.
///
/// # Returns
///
/// Paths of the files written, in a fixed order.
pub fn export_all(tables: &ExportTables<'_>, output_dir: &Path) -> Result<Vec<PathBuf>> {
    create_dir_all(output_dir)?;

    let targets: Vec<PathBuf> = [
        LINES_FULL_FILE,
        GENDER_GROUPS_FILE,
        YEARLY_COUNTS_FILE,
        YEARLY_GENDER_COUNT_FILE,
        YEARLY_GENDER_PERCENTAGES_FILE,
        CONVERSATIONS_FILE,
    ]
    .iter()
    .map(|name| output_dir.join(name))
    .collect();
    let staged: Vec<PathBuf> = targets.iter().map(|p| staging_path(p)).collect();

    let written = write_lines_full(tables.lines, &staged[0])
        .and_then(|()| write_gender_groups(tables.by_gender, &staged[1]))
        .and_then(|()| write_yearly_counts(tables.by_year, &staged[2]))
        .and_then(|()| write_yearly_gender_counts(tables.yearly_gender_counts, &staged[3]))
        .and_then(|()| write_yearly_gender_fractions(tables.yearly_gender_fractions, &staged[4]))
        .and_then(|()| write_conversations(tables.conversations, &staged[5]));

    if let Err(e) = written {
        for path in &staged {
            let _ = fs::remove_file(path);
        }
        return Err(e);
    }

    // Targets renamed before a failure stay replaced; staged files never survive
    for (i, (from, to)) in staged.iter().zip(&targets).enumerate() {
        if let Err(e) = fs::rename(from, to) {
            for path in &staged[i..] {
                let _ = fs::remove_file(path);
            }
            return Err(e.into());
        }
    }

    Ok(targets)
}
