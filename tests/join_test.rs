use movie_dialogue_analysis::join::join_lines;
use movie_dialogue_analysis::models::{Character, Line, Movie, ScriptUrl};

fn line(id: &str, character: &str, movie: &str, dialogue: Option<&str>) -> Line {
    Line {
        line_id: id.to_string(),
        character_id: character.to_string(),
        movie_id: movie.to_string(),
        character_name: "FROM LINES".to_string(),
        dialogue: dialogue.map(str::to_string),
    }
}

fn character(id: &str, name: &str, gender: &str) -> Character {
    Character {
        character_id: id.to_string(),
        character_name: name.to_string(),
        movie_id: "m0".to_string(),
        movie_title: "title from characters".to_string(),
        gender: gender.to_string(),
        position: "2".to_string(),
    }
}

fn movie(id: &str, year: i32) -> Movie {
    Movie {
        movie_id: id.to_string(),
        movie_title: "canonical title".to_string(),
        release_year: year,
        imdb_rating: 6.9,
        imdb_votes: 62847,
        genres: "['comedy']".to_string(),
    }
}

fn url(movie: &str, url: &str) -> ScriptUrl {
    ScriptUrl {
        movie_id: movie.to_string(),
        movie_title: "title from urls".to_string(),
        url: url.to_string(),
    }
}

#[test]
fn test_unmatched_character_is_dropped() {
    let lines = vec![
        line("L1", "u0", "m0", Some("They do not!")),
        line("L2", "u1", "m0", Some("They do to!")),
        line("L3", "u9", "m0", Some("I am nobody")),
    ];
    let characters = vec![character("u0", "BIANCA", "f"), character("u1", "CAMERON", "m")];
    let movies = vec![movie("m0", 1999)];
    let urls = vec![url("m0", "http://example.com/m0.html")];

    let (rows, report) = join_lines(&lines, &characters, &movies, &urls);

    assert_eq!(rows.len(), 2);
    assert_eq!(report.lines, 3);
    assert_eq!(report.with_characters, 2);
    assert_eq!(report.with_movies, 2);
    assert_eq!(report.with_script_urls, 2);
    assert_eq!(report.dropped(), 1);
    assert_eq!(rows[0].line_id, "L1");
    assert_eq!(rows[1].line_id, "L2");
}

#[test]
fn test_canonical_columns_win() {
    let lines = vec![line("L1", "u0", "m0", Some("They do not!"))];
    let characters = vec![character("u0", "BIANCA", "f")];
    let movies = vec![movie("m0", 1999)];
    let urls = vec![url("m0", "http://example.com/m0.html")];

    let (rows, _) = join_lines(&lines, &characters, &movies, &urls);
    let row = &rows[0];

    assert_eq!(row.character_name, "BIANCA");
    assert_eq!(row.movie_title, "canonical title");
    assert_eq!(row.gender, "f");
    assert_eq!(row.position, "2");
    assert_eq!(row.release_year, 1999);
    assert_eq!(row.script_url, "http://example.com/m0.html");
    assert_eq!(row.stats.length, 12);
    assert_eq!(row.stats.word_count, 3);
}

#[test]
fn test_missing_movie_or_url_drops_rows() {
    let lines = vec![
        line("L1", "u0", "m0", Some("a")),
        line("L2", "u0", "m1", Some("b")),
        line("L3", "u0", "m2", Some("c")),
    ];
    let characters = vec![character("u0", "BIANCA", "f")];
    let movies = vec![movie("m0", 1999), movie("m1", 2001)];
    let urls = vec![url("m0", "http://example.com/m0.html")];

    let (rows, report) = join_lines(&lines, &characters, &movies, &urls);

    assert_eq!(report.with_characters, 3);
    assert_eq!(report.with_movies, 2);
    assert_eq!(report.with_script_urls, 1);
    assert_eq!(rows[0].line_id, "L1");
}

#[test]
fn test_duplicate_right_keys_multiply_rows() {
    let lines = vec![line("L1", "u0", "m0", Some("a"))];
    let characters = vec![character("u0", "BIANCA", "f")];
    let movies = vec![movie("m0", 1999)];
    let urls = vec![url("m0", "http://a.example"), url("m0", "http://b.example")];

    let (rows, _) = join_lines(&lines, &characters, &movies, &urls);

    let urls: Vec<&str> = rows.iter().map(|r| r.script_url.as_str()).collect();
    assert_eq!(urls, vec!["http://a.example", "http://b.example"]);
}

#[test]
fn test_missing_dialogue_becomes_empty_text() {
    let lines = vec![line("L1", "u0", "m0", None)];
    let characters = vec![character("u0", "BIANCA", "f")];
    let movies = vec![movie("m0", 1999)];
    let urls = vec![url("m0", "http://example.com/m0.html")];

    let (rows, _) = join_lines(&lines, &characters, &movies, &urls);

    assert_eq!(rows[0].dialogue, "");
    assert_eq!(rows[0].stats.length, 0);
    assert_eq!(rows[0].stats.word_count, 0);
}

#[test]
fn test_empty_join_yields_no_rows() {
    let lines = vec![line("L1", "u0", "m0", Some("a"))];
    let (rows, report) = join_lines(&lines, &[], &[movie("m0", 1999)], &[]);

    assert!(rows.is_empty());
    assert_eq!(report.with_characters, 0);
    assert_eq!(report.dropped(), 1);
    assert_eq!(report.emptied_stage(), Some("characters"));
}

#[test]
fn test_emptied_stage_names_the_failing_join() {
    let lines = vec![line("L1", "u0", "m0", Some("a"))];
    let characters = vec![character("u0", "BIANCA", "f")];
    let movies = vec![movie("m0", 1999)];

    let (_, no_urls) = join_lines(&lines, &characters, &movies, &[]);
    assert_eq!(no_urls.emptied_stage(), Some("script_urls"));

    let (_, no_movies) = join_lines(&lines, &characters, &[], &[]);
    assert_eq!(no_movies.emptied_stage(), Some("movies"));

    let urls = vec![url("m0", "http://example.com/m0.html")];
    let (_, complete) = join_lines(&lines, &characters, &movies, &urls);
    assert_eq!(complete.emptied_stage(), None);

    let (_, empty_input) = join_lines(&[], &characters, &movies, &urls);
    assert_eq!(empty_input.emptied_stage(), None);
}
