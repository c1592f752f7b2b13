//! Data models for the dialogue corpus
//!
//! This module contains the typed rows of every input table, the joined and
//! scored line records that flow through the pipeline, and the aggregate
//! rows written by the exporter.

use serde::Deserialize;

/// Input file holding one row per line of dialogue
pub const LINES_FILE: &str = "MovieLines.csv";
/// Input file holding one row per character
pub const CHARACTERS_FILE: &str = "MovieCharacters.csv";
/// Input file holding one row per movie title
pub const TITLES_FILE: &str = "MovieTitles.csv";
/// Input file holding one row per conversation
pub const CONVERSATIONS_FILE: &str = "MovieConversations.csv";
/// Input file holding raw script URLs per movie
pub const SCRIPT_URLS_FILE: &str = "MovieRawScriptURLs.csv";

/// Gender value of characters whose gender is unresolved
pub const UNKNOWN_GENDER: &str = "?";

/// A row type loaded from one of the fixed-schema input files.
///
/// Fields are read positionally, so the struct field order must follow
/// `COLUMNS`.
pub trait TableRecord: for<'de> Deserialize<'de> {
    /// File name inside the data directory
    const FILE_NAME: &'static str;
    /// Column names in file order
    const COLUMNS: &'static [&'static str];
}

/// One utterance of dialogue attributed to a character in a movie
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Line {
    /// Unique line identifier
    pub line_id: String,
    /// Speaking character
    pub character_id: String,
    /// Movie the line belongs to
    pub movie_id: String,
    /// Character name as written in the lines file
    pub character_name: String,
    /// Dialogue text, absent when the field is empty
    pub dialogue: Option<String>,
}

impl Line {
    /// Dialogue coerced to text, empty when missing
    #[must_use]
    pub fn dialogue_text(&self) -> &str {
        self.dialogue.as_deref().unwrap_or("")
    }
}

impl TableRecord for Line {
    const FILE_NAME: &'static str = LINES_FILE;
    const COLUMNS: &'static [&'static str] =
        &["Line ID", "Character ID", "Movie ID", "Character Name", "Dialogue"];
}

/// A character appearing in a movie
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Character {
    /// Unique character identifier
    pub character_id: String,
    /// Canonical character name
    pub character_name: String,
    /// Movie the character appears in
    pub movie_id: String,
    /// Movie title as written in the characters file
    pub movie_title: String,
    /// Gender marker: "m", "f" or "?" (raw data also carries "M" and "F")
    pub gender: String,
    /// Position in the credits, "?" when unknown
    pub position: String,
}

impl TableRecord for Character {
    const FILE_NAME: &'static str = CHARACTERS_FILE;
    const COLUMNS: &'static [&'static str] = &[
        "Character ID",
        "Character Name",
        "Movie ID",
        "Movie Title",
        "Gender",
        "Position",
    ];
}

/// A movie title row with its raw release year
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Title {
    /// Unique movie identifier
    pub movie_id: String,
    /// Canonical movie title
    pub movie_title: String,
    /// Raw year, possibly suffixed with "/I" style markers
    pub year: String,
    /// IMDb rating
    pub imdb_rating: f64,
    /// Number of IMDb votes
    pub imdb_votes: u64,
    /// Genre list as written in the file
    pub genres: String,
}

impl TableRecord for Title {
    const FILE_NAME: &'static str = TITLES_FILE;
    const COLUMNS: &'static [&'static str] = &[
        "Movie ID",
        "Movie Title",
        "Year",
        "IMDb Rating",
        "IMDb Votes",
        "Genres",
    ];
}

/// A movie whose release year has been normalized
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Unique movie identifier
    pub movie_id: String,
    /// Canonical movie title
    pub movie_title: String,
    /// Four-digit release year
    pub release_year: i32,
    /// IMDb rating
    pub imdb_rating: f64,
    /// Number of IMDb votes
    pub imdb_votes: u64,
    /// Genre list as written in the file
    pub genres: String,
}

/// An ordered exchange of lines between two characters
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Conversation {
    /// First participant
    pub first_character_id: String,
    /// Second participant
    pub second_character_id: String,
    /// Movie the conversation belongs to
    pub movie_id: String,
    /// Line identifiers in utterance order, as written in the file
    pub line_ids: String,
}

impl TableRecord for Conversation {
    const FILE_NAME: &'static str = CONVERSATIONS_FILE;
    const COLUMNS: &'static [&'static str] = &["ID First", "ID Second", "Movie ID", "Conversation"];
}

/// Location of the raw script for a movie
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptUrl {
    /// Movie identifier
    pub movie_id: String,
    /// Movie title as written in the script URL file
    pub movie_title: String,
    /// Raw script URL
    pub url: String,
}

impl TableRecord for ScriptUrl {
    const FILE_NAME: &'static str = SCRIPT_URLS_FILE;
    const COLUMNS: &'static [&'static str] = &["Movie ID", "Movie Title", "Raw Script URL"];
}

/// Length statistics of a dialogue text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    /// Number of characters (Unicode scalar values)
    pub length: usize,
    /// Number of whitespace-separated words
    pub word_count: usize,
}

impl TextStats {
    /// Compute the statistics of a text
    #[must_use]
    pub fn of(text: &str) -> Self {
        Self {
            length: text.chars().count(),
            word_count: text.split_whitespace().count(),
        }
    }
}

/// A line enriched with its character, movie and script URL
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedLine {
    pub line_id: String,
    pub character_id: String,
    pub movie_id: String,
    /// Name taken from the characters table
    pub character_name: String,
    /// Dialogue coerced to text
    pub dialogue: String,
    /// Normalized gender
    pub gender: String,
    pub position: String,
    /// Title taken from the titles table
    pub movie_title: String,
    pub release_year: i32,
    pub imdb_rating: f64,
    pub imdb_votes: u64,
    pub genres: String,
    pub script_url: String,
    pub stats: TextStats,
}

/// Four-component polarity score of a text
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarityScores {
    /// Proportion of negative sentiment
    pub negative: f64,
    /// Proportion of neutral sentiment
    pub neutral: f64,
    /// Proportion of positive sentiment
    pub positive: f64,
    /// Normalized overall score in [-1, 1]
    pub compound: f64,
}

/// A joined line with its sentiment scores attached
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredLine {
    pub line: JoinedLine,
    pub sentiment: PolarityScores,
}

/// Dialogue volume for one release year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearStats {
    pub year: i32,
    /// Number of dialogue rows
    pub lines: u64,
    /// Number of distinct movies
    pub movies: u64,
}

/// Dialogue statistics for one gender
#[derive(Debug, Clone, PartialEq)]
pub struct GenderStats {
    pub gender: String,
    /// Number of distinct characters
    pub characters: u64,
    pub lines: u64,
    pub length_sum: u64,
    pub length_mean: f64,
    pub word_count_sum: u64,
    pub word_count_mean: f64,
}

/// Line counts per (year, gender), one column per gender
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct YearlyGenderCounts {
    /// Gender columns in ascending order
    pub genders: Vec<String>,
    /// Years in ascending order with counts aligned to `genders`
    pub rows: Vec<(i32, Vec<u64>)>,
}

/// Share of each gender among a year's lines, `None` where the year has no lines
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YearlyGenderFractions {
    /// Gender columns in ascending order
    pub genders: Vec<String>,
    /// Years in ascending order with fractions aligned to `genders`
    pub rows: Vec<(i32, Vec<Option<f64>>)>,
}
