//! Normalization of categorical and year fields.

use crate::error::{AnalysisError, Result};
use crate::models::{Character, Movie, Title};

/// Map a raw gender marker to its lowercase canonical form.
///
/// Only "M" and "F" are rewritten; every other value, including the
/// unresolved "?", passes through unchanged.
#[must_use]
pub fn normalize_gender(raw: &str) -> String {
    match raw {
        "M" => "m".to_string(),
        "F" => "f".to_string(),
        other => other.to_string(),
    }
}

/// Return the characters with their gender markers normalized
#[must_use]
pub fn normalize_characters(characters: Vec<Character>) -> Vec<Character> {
    characters
        .into_iter()
        .map(|c| Character {
            gender: normalize_gender(&c.gender),
            ..c
        })
        .collect()
}

/// Parse a raw release year such as `"1989/I"` into a four-digit year.
///
/// The trailing run of `/` and `I` characters marks titles that include TV
/// episodes and is stripped first. Whatever remains must be exactly four
/// ASCII digits.
pub fn normalize_year(raw: &str) -> Result<i32> {
    let cleaned = raw.trim().trim_end_matches(|c: char| c == '/' || c == 'I');

    if cleaned.len() != 4 || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AnalysisError::InvalidYear(raw.to_string()));
    }

    cleaned
        .parse()
        .map_err(|_| AnalysisError::InvalidYear(raw.to_string()))
}

/// Convert titles into movies with numeric release years.
///
/// Fails on the first title whose year cannot be parsed.
pub fn normalize_titles(titles: Vec<Title>) -> Result<Vec<Movie>> {
    titles
        .into_iter()
        .map(|t| {
            Ok(Movie {
                release_year: normalize_year(&t.year)?,
                movie_id: t.movie_id,
                movie_title: t.movie_title,
                imdb_rating: t.imdb_rating,
                imdb_votes: t.imdb_votes,
                genres: t.genres,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_mapping() {
        let input = ["M", "F", "?", "m"];
        let output: Vec<String> = input.iter().map(|g| normalize_gender(g)).collect();
        assert_eq!(output, vec!["m", "f", "?", "m"]);
    }

    #[test]
    fn test_year_with_marker() {
        assert_eq!(normalize_year("1989/I").unwrap(), 1989);
        assert_eq!(normalize_year("1989/II").unwrap(), 1989);
        assert_eq!(normalize_year("2001").unwrap(), 2001);
    }

    #[test]
    fn test_year_marker_mid_string_fails() {
        assert!(matches!(
            normalize_year("19/I89"),
            Err(AnalysisError::InvalidYear(_))
        ));
    }

    #[test]
    fn test_year_wrong_width_fails() {
        assert!(normalize_year("89").is_err());
        assert!(normalize_year("19890").is_err());
        assert!(normalize_year("").is_err());
        assert!(normalize_year("/I").is_err());
    }
}
