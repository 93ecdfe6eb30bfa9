//! Tests for TOML configuration loading.

use std::fs;
use std::path::PathBuf;

use morpion::{GameConfig, NEW_POINT_POINTS, Scoring};
use tempfile::tempdir;

#[test]
fn test_load_missing_file_uses_defaults() {
    let config = GameConfig::load("no_such_morpion.toml").expect("Load failed");
    assert_eq!(*config.scoring(), Scoring::default());
    assert_eq!(config.nickname(), "player");
    assert_eq!(config.highscores(), &PathBuf::from("morpion_scores.json"));
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("morpion.toml");
    fs::write(&path, "nickname = \"zed\"\n").expect("Write failed");

    let config = GameConfig::load(&path).expect("Load failed");
    assert_eq!(config.nickname(), "zed");
    assert_eq!(*config.scoring(), Scoring::default());
    assert_eq!(config.highscores(), &PathBuf::from("morpion_scores.json"));
}

#[test]
fn test_partial_scoring_table_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("morpion.toml");
    fs::write(&path, "[scoring]\nfull_line = 40\n").expect("Write failed");

    let config = GameConfig::load(&path).expect("Load failed");
    assert_eq!(*config.scoring(), Scoring::new(40, NEW_POINT_POINTS));
}

#[test]
fn test_full_file_parses() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("morpion.toml");
    let raw = r#"
nickname = "ace"
highscores = "scores/top.json"

[scoring]
full_line = 30
new_point = 5
"#;
    fs::write(&path, raw).expect("Write failed");

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.nickname(), "ace");
    assert_eq!(*config.scoring(), Scoring::new(30, 5));
    assert_eq!(config.highscores(), &PathBuf::from("scores/top.json"));
}

#[test]
fn test_malformed_file_errors() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("morpion.toml");
    fs::write(&path, "nickname = [broken\n").expect("Write failed");

    let result = GameConfig::from_file(&path);
    assert!(result.is_err(), "Malformed TOML should fail to parse");
}
