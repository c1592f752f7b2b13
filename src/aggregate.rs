//! Group-by aggregation over joined lines.
//!
//! Groups are keyed by exact value equality and emitted in ascending key
//! order, so the result does not depend on input order. Lines whose gender is
//! unresolved ("?") never enter a gender group.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::models::{
    GenderStats, JoinedLine, UNKNOWN_GENDER, YearStats, YearlyGenderCounts, YearlyGenderFractions,
};

fn has_known_gender(line: &JoinedLine) -> bool {
    line.gender != UNKNOWN_GENDER
}

/// Dialogue rows and distinct movies per release year
pub fn by_year<'a>(rows: impl IntoIterator<Item = &'a JoinedLine>) -> Vec<YearStats> {
    let mut groups: BTreeMap<i32, (u64, HashSet<&'a str>)> = BTreeMap::new();

    for row in rows {
        let (lines, movies) = groups.entry(row.release_year).or_default();
        *lines += 1;
        movies.insert(row.movie_id.as_str());
    }

    groups
        .into_iter()
        .map(|(year, (lines, movies))| YearStats {
            year,
            lines,
            movies: movies.len() as u64,
        })
        .collect()
}

#[derive(Default)]
struct GenderAccumulator<'a> {
    characters: HashSet<&'a str>,
    lines: u64,
    length_sum: u64,
    word_count_sum: u64,
}

fn mean(sum: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Character counts and dialogue length statistics per known gender
pub fn by_gender<'a>(rows: impl IntoIterator<Item = &'a JoinedLine>) -> Vec<GenderStats> {
    let mut groups: BTreeMap<&'a str, GenderAccumulator<'a>> = BTreeMap::new();

    for row in rows.into_iter().filter(|r| has_known_gender(r)) {
        let acc = groups.entry(row.gender.as_str()).or_default();
        acc.characters.insert(row.character_id.as_str());
        acc.lines += 1;
        acc.length_sum += row.stats.length as u64;
        acc.word_count_sum += row.stats.word_count as u64;
    }

    groups
        .into_iter()
        .map(|(gender, acc)| GenderStats {
            gender: gender.to_string(),
            characters: acc.characters.len() as u64,
            lines: acc.lines,
            length_sum: acc.length_sum,
            length_mean: mean(acc.length_sum, acc.lines),
            word_count_sum: acc.word_count_sum,
            word_count_mean: mean(acc.word_count_sum, acc.lines),
        })
        .collect()
}

/// Line counts per (year, known gender).
///
/// Every year present in the input gets a row, even when all of its lines
/// have an unresolved gender.
pub fn yearly_gender_counts<'a>(rows: impl IntoIterator<Item = &'a JoinedLine>) -> YearlyGenderCounts {
    let mut genders: BTreeSet<&'a str> = BTreeSet::new();
    let mut counts: BTreeMap<i32, BTreeMap<&'a str, u64>> = BTreeMap::new();

    for row in rows {
        let year = counts.entry(row.release_year).or_default();
        if has_known_gender(row) {
            genders.insert(row.gender.as_str());
            *year.entry(row.gender.as_str()).or_default() += 1;
        }
    }

    let rows = counts
        .into_iter()
        .map(|(year, by_gender)| {
            let aligned = genders
                .iter()
                .map(|g| by_gender.get(g).copied().unwrap_or(0))
                .collect();
            (year, aligned)
        })
        .collect();

    YearlyGenderCounts {
        genders: genders.into_iter().map(str::to_string).collect(),
        rows,
    }
}

impl YearlyGenderCounts {
    /// Share of each gender among the year's lines.
    ///
    /// A year without any counted line has no defined share; its fractions
    /// are `None` rather than a division by zero.
    #[must_use]
    pub fn fractions(&self) -> YearlyGenderFractions {
        let rows = self
            .rows
            .iter()
            .map(|(year, counts)| {
                let total: u64 = counts.iter().sum();
                let shares = counts
                    .iter()
                    .map(|&c| (total > 0).then(|| c as f64 / total as f64))
                    .collect();
                (*year, shares)
            })
            .collect();

        YearlyGenderFractions {
            genders: self.genders.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TextStats;

    fn line(id: &str, character: &str, movie: &str, gender: &str, year: i32, dialogue: &str) -> JoinedLine {
        JoinedLine {
            line_id: id.to_string(),
            character_id: character.to_string(),
            movie_id: movie.to_string(),
            character_name: character.to_uppercase(),
            dialogue: dialogue.to_string(),
            gender: gender.to_string(),
            position: "1".to_string(),
            movie_title: "title".to_string(),
            release_year: year,
            imdb_rating: 7.0,
            imdb_votes: 100,
            genres: "['drama']".to_string(),
            script_url: "http://example.com".to_string(),
            stats: TextStats::of(dialogue),
        }
    }

    #[test]
    fn test_by_year_counts_distinct_movies() {
        let rows = vec![
            line("L1", "u1", "m1", "m", 1999, "a"),
            line("L2", "u2", "m2", "f", 1999, "b"),
            line("L3", "u1", "m1", "m", 1999, "c"),
            line("L4", "u3", "m3", "?", 1985, "d"),
        ];
        let stats = by_year(&rows);

        assert_eq!(
            stats,
            vec![
                YearStats { year: 1985, lines: 1, movies: 1 },
                YearStats { year: 1999, lines: 3, movies: 2 },
            ]
        );
    }

    #[test]
    fn test_by_gender_excludes_unknown() {
        let rows = vec![
            line("L1", "u1", "m1", "m", 1999, "hello"),
            line("L2", "u2", "m1", "?", 1999, "who am i"),
        ];
        let stats = by_gender(&rows);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].gender, "m");
        assert_eq!(stats[0].characters, 1);
    }

    #[test]
    fn test_fraction_of_year_without_known_gender_is_missing() {
        let rows = vec![
            line("L1", "u1", "m1", "m", 1999, "a"),
            line("L2", "u2", "m2", "?", 2001, "b"),
        ];
        let fractions = yearly_gender_counts(&rows).fractions();

        assert_eq!(fractions.genders, vec!["m"]);
        assert_eq!(fractions.rows, vec![(1999, vec![Some(1.0)]), (2001, vec![None])]);
    }
}
