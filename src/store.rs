//! File persistence for score tables and saved games.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, Utc};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::GameError;
use crate::game::{GameSession, Scoring, Segment};
use crate::highscore::{HighscoreEntry, HighscoreTable};

/// Persistence error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<io::Error> for StoreError {
    #[track_caller]
    fn from(err: io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// Reads and writes the score table at a fixed path.
///
/// The file holds a JSON array of entries; a missing file reads as an
/// empty table.
#[derive(Debug, Clone)]
pub struct HighscoreStore {
    path: PathBuf,
}

impl HighscoreStore {
    /// Creates a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the score table.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or parsed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<HighscoreTable, StoreError> {
        if !self.path.exists() {
            debug!("No score file yet");
            return Ok(HighscoreTable::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        let entries: Vec<HighscoreEntry> = serde_json::from_str(&raw)?;
        info!(count = entries.len(), "Scores loaded");
        Ok(HighscoreTable::from_entries(entries))
    }

    /// Writes the score table, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    #[instrument(skip(self, table), fields(path = %self.path.display(), count = table.len()))]
    pub fn store(&self, table: &HighscoreTable) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(table.entries())?;
        fs::write(&self.path, raw)?;
        info!("Scores written");
        Ok(())
    }
}

/// A game on disk: the played segments plus player metadata.
///
/// Grid and score are never stored; loading replays the segments from
/// the starting cross.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct SavedGame {
    /// Player nickname at save time.
    nickname: String,
    /// Played segments in play order.
    segments: Vec<Segment>,
    /// When the game was saved.
    saved_at: NaiveDateTime,
}

impl SavedGame {
    /// Creates a save stamped with the current time.
    pub fn new(nickname: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            nickname: nickname.into(),
            segments,
            saved_at: Utc::now().naive_utc(),
        }
    }

    /// Snapshots a live session.
    pub fn capture(session: &GameSession) -> Self {
        Self::new(session.nickname().unwrap_or_default(), session.segments().to_vec())
    }

    /// Reads a save from a file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or parsed.
    #[instrument]
    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)?;
        let saved: Self = serde_json::from_str(&raw)?;
        info!(segments = saved.segments.len(), "Saved game loaded");
        Ok(saved)
    }

    /// Writes the save, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    #[instrument(skip(self), fields(segments = self.segments.len()))]
    pub fn write_to(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "Saved game written");
        Ok(())
    }

    /// Replays the save into a live session.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] when the recorded history does
    /// not replay legally.
    pub fn restore(&self, scoring: Scoring) -> Result<GameSession, GameError> {
        let mut session = GameSession::from_history(scoring, self.segments.clone())?;
        if !self.nickname.is_empty() {
            session.set_nickname(self.nickname.clone());
        }
        Ok(session)
    }
}
