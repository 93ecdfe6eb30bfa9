//! Tests for the bounded score table.

use morpion::{HIGHSCORE_MAX, HighscoreEntry, HighscoreTable, NICKNAME_MAX};

/// Builds a full table with scores 100, 90, ... down to 10.
fn full_table() -> HighscoreTable {
    let mut table = HighscoreTable::default();
    for i in 0..HIGHSCORE_MAX as u32 {
        table.submit(HighscoreEntry::new(100 - 10 * i, "cap"));
    }
    table
}

#[test]
fn test_first_score_takes_rank_one() {
    let mut table = HighscoreTable::default();
    let rank = table.submit(HighscoreEntry::new(100, "AA"));
    assert_eq!(rank, Some(1));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_entries_sorted_by_descending_score() {
    let mut table = HighscoreTable::default();
    table.submit(HighscoreEntry::new(40, "low"));
    table.submit(HighscoreEntry::new(90, "high"));
    table.submit(HighscoreEntry::new(60, "mid"));
    let scores: Vec<u32> = table.entries().iter().map(|e| *e.score()).collect();
    assert_eq!(scores, vec![90, 60, 40]);
}

#[test]
fn test_low_score_bounces_off_a_full_table() {
    let mut table = full_table();
    assert_eq!(table.submit(HighscoreEntry::new(5, "late")), None);
    assert_eq!(table.len(), HIGHSCORE_MAX);
}

#[test]
fn test_equal_lowest_score_does_not_qualify() {
    let mut table = full_table();
    assert_eq!(table.submit(HighscoreEntry::new(10, "tied")), None);
}

#[test]
fn test_qualifying_score_evicts_the_lowest() {
    let mut table = full_table();
    let rank = table.submit(HighscoreEntry::new(55, "new"));
    assert_eq!(rank, Some(6));
    assert_eq!(table.len(), HIGHSCORE_MAX);
    let scores: Vec<u32> = table.entries().iter().map(|e| *e.score()).collect();
    assert_eq!(scores, vec![100, 90, 80, 70, 60, 55, 50, 40, 30, 20]);
}

#[test]
fn test_equal_scores_keep_submission_order() {
    let mut table = HighscoreTable::default();
    table.submit(HighscoreEntry::new(50, "first"));
    let rank = table.submit(HighscoreEntry::new(50, "second"));
    // The earlier equal score keeps the higher rank.
    assert_eq!(rank, Some(2));
    assert_eq!(table.entries()[0].nickname(), "first");
}

#[test]
fn test_nickname_is_truncated() {
    let entry = HighscoreEntry::new(10, "abcdefghijklmnopqrstu");
    assert_eq!(entry.nickname().chars().count(), NICKNAME_MAX);
    assert_eq!(entry.nickname(), "abcdefghijklmnop");
}

#[test]
fn test_from_entries_sorts_and_truncates() {
    let entries: Vec<HighscoreEntry> =
        (0..12).map(|i| HighscoreEntry::new(i * 10, "bulk")).collect();
    let table = HighscoreTable::from_entries(entries);
    assert_eq!(table.len(), HIGHSCORE_MAX);
    assert_eq!(*table.entries()[0].score(), 110);
    assert_eq!(*table.entries()[HIGHSCORE_MAX - 1].score(), 20);
}
