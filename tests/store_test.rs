//! Tests for score table and saved game persistence.

use std::fs;

use morpion::{
    GameSession, HighscoreEntry, HighscoreStore, HighscoreTable, Point, SavedGame, Scoring,
    Segment,
};
use tempfile::tempdir;

fn segment(ax: i32, ay: i32, bx: i32, by: i32) -> Segment {
    Segment::between(Point::new(ax, ay), Point::new(bx, by)).expect("straight segment")
}

#[test]
fn test_load_missing_file_is_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = HighscoreStore::new(dir.path().join("scores.json"));
    let table = store.load().expect("Load failed");
    assert!(table.is_empty());
}

#[test]
fn test_store_then_load_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = HighscoreStore::new(dir.path().join("scores.json"));

    let mut table = HighscoreTable::default();
    table.submit(HighscoreEntry::new(120, "ada"));
    table.submit(HighscoreEntry::new(80, "grace"));
    store.store(&table).expect("Store failed");

    let loaded = store.load().expect("Load failed");
    assert_eq!(loaded, table);
}

#[test]
fn test_store_creates_parent_directories() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = HighscoreStore::new(dir.path().join("nested").join("scores.json"));

    let mut table = HighscoreTable::default();
    table.submit(HighscoreEntry::new(40, "lin"));
    store.store(&table).expect("Store failed");
    assert!(store.path().exists());
}

#[test]
fn test_saved_game_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("game.json");

    let mut session = GameSession::new(Scoring::default());
    session.set_nickname("ada");
    session.play(segment(6, 3, 11, 3)).expect("Play failed");
    session.play(segment(11, 3, 11, 8)).expect("Play failed");

    let saved = SavedGame::capture(&session);
    saved.write_to(&path).expect("Write failed");
    let loaded = SavedGame::from_file(&path).expect("Read failed");
    assert_eq!(loaded, saved);

    let restored = loaded.restore(Scoring::default()).expect("Replay failed");
    assert_eq!(restored.score(), session.score());
    assert_eq!(restored.segments(), session.segments());
    assert_eq!(restored.nickname(), Some("ada"));
}

#[test]
fn test_capture_without_nickname_restores_none() {
    let mut session = GameSession::new(Scoring::default());
    session.play(segment(7, 3, 7, 8)).expect("Play failed");

    let saved = SavedGame::capture(&session);
    let restored = saved.restore(Scoring::default()).expect("Replay failed");
    assert_eq!(restored.nickname(), None);
}

#[test]
fn test_restore_rejects_illegal_history() {
    let saved = SavedGame::new("ada", vec![segment(6, 3, 11, 3), segment(7, 3, 12, 3)]);
    assert!(saved.restore(Scoring::default()).is_err());
}

#[test]
fn test_edited_save_with_bent_segment_fails_to_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("game.json");

    // Six occupied cross points that turn a corner at (7, 7). Every point
    // exists on the fresh grid, so only the shape gives the edit away.
    let raw = r#"{
  "nickname": "ada",
  "segments": [[
    {"x": 7, "y": 3},
    {"x": 7, "y": 4},
    {"x": 7, "y": 5},
    {"x": 7, "y": 6},
    {"x": 7, "y": 7},
    {"x": 3, "y": 7}
  ]],
  "saved_at": "2026-08-21T12:00:00"
}"#;
    fs::write(&path, raw).expect("Write failed");
    assert!(SavedGame::from_file(&path).is_err());
}
