//! Comprehensive unit tests for validation.rs module

mod common;

use movie_dialogue_analysis::validation::InputValidator;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_validate_data_dir_complete() {
    let dir = tempdir().expect("Failed to create temp directory");
    common::write_corpus(dir.path());
    assert!(InputValidator::validate_data_dir(dir.path()).is_ok());
}

#[test]
fn test_validate_data_dir_missing() {
    let dir = tempdir().expect("Failed to create temp directory");
    assert!(InputValidator::validate_data_dir(&dir.path().join("absent")).is_err());
}

#[test]
fn test_validate_data_dir_names_missing_files() {
    let dir = tempdir().expect("Failed to create temp directory");
    common::write_corpus(dir.path());
    fs::remove_file(dir.path().join("MovieRawScriptURLs.csv")).expect("Failed to remove file");

    let err = InputValidator::validate_data_dir(dir.path()).unwrap_err();
    assert!(err.to_string().contains("MovieRawScriptURLs.csv"));
}

#[test]
fn test_validate_data_dir_is_file() {
    let dir = tempdir().expect("Failed to create temp directory");
    let file = dir.path().join("file.txt");
    fs::write(&file, "not a directory").expect("Failed to write file");
    assert!(InputValidator::validate_data_dir(&file).is_err());
}

#[test]
fn test_validate_output_dir_valid() {
    assert!(InputValidator::validate_output_dir(Path::new("./output")).is_ok());
}

#[test]
fn test_validate_output_dir_nonexistent_is_ok() {
    let dir = tempdir().expect("Failed to create temp directory");
    assert!(InputValidator::validate_output_dir(&dir.path().join("new")).is_ok());
}

#[test]
fn test_validate_output_dir_empty() {
    assert!(InputValidator::validate_output_dir(Path::new("")).is_err());
}

#[test]
fn test_validate_output_dir_too_long() {
    let long = "a".repeat(4097);
    assert!(InputValidator::validate_output_dir(Path::new(&long)).is_err());
}

#[test]
fn test_validate_output_dir_is_file() {
    let dir = tempdir().expect("Failed to create temp directory");
    let file = dir.path().join("file.txt");
    fs::write(&file, "not a directory").expect("Failed to write file");
    assert!(InputValidator::validate_output_dir(&file).is_err());
}
