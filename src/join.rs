//! Inner joins linking lines to characters, movies and script URLs.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::logging::OperationTimer;
use crate::models::{Character, JoinedLine, Line, Movie, ScriptUrl, TextStats};

/// Row counts observed at each join stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoinReport {
    /// Lines entering the first join
    pub lines: usize,
    /// Rows after joining characters on character id
    pub with_characters: usize,
    /// Rows after joining movies on movie id
    pub with_movies: usize,
    /// Rows after joining script URLs on movie id
    pub with_script_urls: usize,
}

impl JoinReport {
    /// Lines that did not survive all three joins
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.lines.saturating_sub(self.with_script_urls)
    }

    /// First stage that received rows but produced none
    #[must_use]
    pub const fn emptied_stage(&self) -> Option<&'static str> {
        if self.lines > 0 && self.with_characters == 0 {
            Some("characters")
        } else if self.with_characters > 0 && self.with_movies == 0 {
            Some("movies")
        } else if self.with_movies > 0 && self.with_script_urls == 0 {
            Some("script_urls")
        } else {
            None
        }
    }
}

/// Equality join keeping only left rows with at least one right match.
///
/// A left row matching several right rows yields one output per match, and
/// output order follows left order.
fn inner_join<'l, 'r, L, R, O>(
    left: &'l [L],
    right: &'r [R],
    left_key: impl Fn(&'l L) -> &'l str,
    right_key: impl Fn(&'r R) -> &'r str,
    combine: impl Fn(&'l L, &'r R) -> O,
) -> Vec<O> {
    let mut index: HashMap<&'r str, Vec<&'r R>> = HashMap::with_capacity(right.len());
    for row in right {
        index.entry(right_key(row)).or_default().push(row);
    }

    let mut joined = Vec::with_capacity(left.len());
    for row in left {
        if let Some(matches) = index.get(left_key(row)) {
            joined.extend(matches.iter().map(|m| combine(row, m)));
        }
    }
    joined
}

fn log_stage(stage: &str, before: usize, after: usize) {
    if before > 0 && after == 0 {
        warn!(stage, before, "Join produced no rows");
    } else if after < before {
        info!(stage, before, after, dropped = before - after, "Join dropped unmatched rows");
    } else {
        info!(stage, rows = after, "Join complete");
    }
}

/// Join lines with their character, movie and script URL.
///
/// The character name comes from the characters table and the movie title
/// from the movies table; the duplicates carried by lines and script URLs
/// are dropped.
#[must_use]
pub fn join_lines(
    lines: &[Line],
    characters: &[Character],
    movies: &[Movie],
    script_urls: &[ScriptUrl],
) -> (Vec<JoinedLine>, JoinReport) {
    let timer = OperationTimer::new("join_lines");

    let with_characters = inner_join(
        lines,
        characters,
        |line| line.character_id.as_str(),
        |character| character.character_id.as_str(),
        |line, character| (line, character),
    );
    log_stage("characters", lines.len(), with_characters.len());

    let with_movies = inner_join(
        &with_characters,
        movies,
        |(line, _)| line.movie_id.as_str(),
        |movie| movie.movie_id.as_str(),
        |&(line, character), movie| (line, character, movie),
    );
    log_stage("movies", with_characters.len(), with_movies.len());

    let joined = inner_join(
        &with_movies,
        script_urls,
        |(line, _, _)| line.movie_id.as_str(),
        |url| url.movie_id.as_str(),
        |&(line, character, movie), url| build_row(line, character, movie, url),
    );
    log_stage("script_urls", with_movies.len(), joined.len());

    let report = JoinReport {
        lines: lines.len(),
        with_characters: with_characters.len(),
        with_movies: with_movies.len(),
        with_script_urls: joined.len(),
    };

    if let Some(stage) = report.emptied_stage() {
        warn!(stage, lines = report.lines, "No dialogue line survived the joins");
    }

    timer.finish();
    (joined, report)
}

fn build_row(line: &Line, character: &Character, movie: &Movie, url: &ScriptUrl) -> JoinedLine {
    let dialogue = line.dialogue_text().to_string();
    let stats = TextStats::of(&dialogue);

    JoinedLine {
        line_id: line.line_id.clone(),
        character_id: line.character_id.clone(),
        movie_id: line.movie_id.clone(),
        character_name: character.character_name.clone(),
        dialogue,
        gender: character.gender.clone(),
        position: character.position.clone(),
        movie_title: movie.movie_title.clone(),
        release_year: movie.release_year,
        imdb_rating: movie.imdb_rating,
        imdb_votes: movie.imdb_votes,
        genres: movie.genres.clone(),
        script_url: url.url.clone(),
        stats,
    }
}
