//! Shared corpus fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use movie_dialogue_analysis::models::{JoinedLine, TextStats};

/// Write a small corpus into `dir`.
///
/// Line L3 references a character that does not exist, and the dialogue of
/// L5 is Latin-1 encoded.
pub fn write_corpus(dir: &Path) {
    let mut lines: Vec<u8> = b"L1|u0|m0|BIANCA|I love this wonderful day!\n\
L2|u1|m0|CAMERON|This is terrible.\n\
L3|u9|m0|GHOST|Nobody hears me.\n\
L4|u2|m1|ALEX|\n"
        .to_vec();
    lines.extend_from_slice(b"L5|u0|m0|BIANCA|Un caf\xe9 noir\n");
    fs::write(dir.join("MovieLines.csv"), lines).expect("Failed to write lines");

    fs::write(
        dir.join("MovieCharacters.csv"),
        "u0|BIANCA|m0|10 things i hate about you|F|4\n\
u1|CAMERON|m0|10 things i hate about you|M|3\n\
u2|ALEX|m1|another movie|?|?\n",
    )
    .expect("Failed to write characters");

    fs::write(
        dir.join("MovieTitles.csv"),
        "m0|10 things i hate about you|1999|6.90|62847|['comedy', 'romance']\n\
m1|another movie|1989/I|7.10|1000|['drama']\n",
    )
    .expect("Failed to write titles");

    fs::write(
        dir.join("MovieConversations.csv"),
        "u0|u1|m0|['L1', 'L2']\nu0|u1|m0|['L5']\n",
    )
    .expect("Failed to write conversations");

    fs::write(
        dir.join("MovieRawScriptURLs.csv"),
        "m0|10 things i hate about you|http://www.dailyscript.com/scripts/10Things.html\n\
m1|another movie|http://example.com/another.html\n",
    )
    .expect("Failed to write script urls");
}

/// Build a joined line for aggregation tests
pub fn joined_line(
    id: &str,
    character: &str,
    movie: &str,
    gender: &str,
    year: i32,
    dialogue: &str,
) -> JoinedLine {
    JoinedLine {
        line_id: id.to_string(),
        character_id: character.to_string(),
        movie_id: movie.to_string(),
        character_name: character.to_uppercase(),
        dialogue: dialogue.to_string(),
        gender: gender.to_string(),
        position: "1".to_string(),
        movie_title: format!("movie {movie}"),
        release_year: year,
        imdb_rating: 7.5,
        imdb_votes: 1000,
        genres: "['drama']".to_string(),
        script_url: format!("http://example.com/{movie}.html"),
        stats: TextStats::of(dialogue),
    }
}
