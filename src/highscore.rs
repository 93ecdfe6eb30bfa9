//! Bounded top-ten score table.

use chrono::{NaiveDateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of entries the table keeps.
pub const HIGHSCORE_MAX: usize = 10;

/// Longest nickname recorded with a score.
pub const NICKNAME_MAX: usize = 16;

/// One recorded score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HighscoreEntry {
    /// Final score of the game.
    score: u32,
    /// Player nickname, truncated to [`NICKNAME_MAX`] characters.
    nickname: String,
    /// When the score was recorded.
    recorded_at: NaiveDateTime,
}

impl HighscoreEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(score: u32, nickname: &str) -> Self {
        Self {
            score,
            nickname: nickname.chars().take(NICKNAME_MAX).collect(),
            recorded_at: Utc::now().naive_utc(),
        }
    }

    fn matches(&self, score: u32, nickname: &str) -> bool {
        self.score == score && self.nickname == nickname
    }
}

/// The top scores, sorted by descending score.
///
/// Ties keep submission order, so an earlier score of equal value ranks
/// above a later one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighscoreTable {
    entries: Vec<HighscoreEntry>,
}

impl HighscoreTable {
    /// Builds a table from loose entries, sorting and keeping the top
    /// [`HIGHSCORE_MAX`].
    pub fn from_entries(entries: Vec<HighscoreEntry>) -> Self {
        let mut table = Self { entries };
        table.sort();
        table.entries.truncate(HIGHSCORE_MAX);
        table
    }

    /// Offers a score to the table.
    ///
    /// The entry is accepted while the table is short of capacity, or
    /// when it strictly beats the current lowest score, which it then
    /// evicts. Returns the accepted entry's 1-based rank, or `None` when
    /// the score did not qualify.
    #[instrument(skip(self), fields(score = entry.score))]
    pub fn submit(&mut self, entry: HighscoreEntry) -> Option<usize> {
        self.sort();
        if self.entries.len() >= HIGHSCORE_MAX {
            if self.entries[self.entries.len() - 1].score >= entry.score {
                return None;
            }
            self.entries.pop();
        }
        let score = entry.score;
        let nickname = entry.nickname.clone();
        self.entries.push(entry);
        self.sort();
        self.entries
            .iter()
            .rposition(|e| e.matches(score, &nickname))
            .map(|position| position + 1)
    }

    /// Entries in rank order.
    pub fn entries(&self) -> &[HighscoreEntry] {
        &self.entries
    }

    /// Number of recorded scores.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }
}
