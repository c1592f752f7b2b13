use movie_dialogue_analysis::error::AnalysisError;
use movie_dialogue_analysis::models::{Character, Title};
use movie_dialogue_analysis::normalize::{
    normalize_characters, normalize_gender, normalize_titles, normalize_year,
};
use proptest::prelude::*;

fn character(id: &str, gender: &str) -> Character {
    Character {
        character_id: id.to_string(),
        character_name: id.to_uppercase(),
        movie_id: "m0".to_string(),
        movie_title: "movie".to_string(),
        gender: gender.to_string(),
        position: "?".to_string(),
    }
}

fn title(id: &str, year: &str) -> Title {
    Title {
        movie_id: id.to_string(),
        movie_title: format!("movie {id}"),
        year: year.to_string(),
        imdb_rating: 7.0,
        imdb_votes: 10,
        genres: "['drama']".to_string(),
    }
}

#[test]
fn test_gender_values() {
    let characters = vec![
        character("u0", "M"),
        character("u1", "F"),
        character("u2", "?"),
        character("u3", "m"),
    ];
    let genders: Vec<String> = normalize_characters(characters)
        .into_iter()
        .map(|c| c.gender)
        .collect();
    assert_eq!(genders, vec!["m", "f", "?", "m"]);
}

#[test]
fn test_normalize_characters_keeps_other_fields() {
    let normalized = normalize_characters(vec![character("u7", "F")]);
    assert_eq!(normalized[0].character_id, "u7");
    assert_eq!(normalized[0].character_name, "U7");
    assert_eq!(normalized[0].position, "?");
}

#[test]
fn test_year_examples() {
    assert_eq!(normalize_year("1989/I").unwrap(), 1989);
    assert_eq!(normalize_year("2001").unwrap(), 2001);
    assert!(matches!(
        normalize_year("19/I89"),
        Err(AnalysisError::InvalidYear(raw)) if raw == "19/I89"
    ));
}

#[test]
fn test_titles_become_movies() {
    let movies = normalize_titles(vec![title("m0", "1999"), title("m1", "1989/I")])
        .expect("Failed to normalize titles");
    assert_eq!(movies[0].release_year, 1999);
    assert_eq!(movies[1].release_year, 1989);
    assert_eq!(movies[1].movie_title, "movie m1");
}

#[test]
fn test_one_bad_year_fails_the_batch() {
    let result = normalize_titles(vec![title("m0", "1999"), title("m1", "19/I89")]);
    assert!(result.is_err());
}

proptest! {
    #[test]
    fn prop_only_upper_markers_change(raw in "\\PC{0,3}") {
        let normalized = normalize_gender(&raw);
        if raw == "M" || raw == "F" {
            prop_assert_eq!(normalized, raw.to_lowercase());
        } else {
            prop_assert_eq!(normalized, raw);
        }
    }

    #[test]
    fn prop_gender_is_idempotent(raw in "[MFmf?]") {
        let once = normalize_gender(&raw);
        prop_assert_eq!(normalize_gender(&once), once.clone());
    }

    #[test]
    fn prop_suffixed_years_parse(year in 1000i32..=9999, marks in "(/I{1,3})?") {
        let raw = format!("{year}{marks}");
        prop_assert_eq!(normalize_year(&raw).unwrap(), year);
    }
}
