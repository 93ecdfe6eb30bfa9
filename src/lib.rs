//! Morpion library - the join-five solitaire engine and its terminal front end
//!
//! # Architecture
//!
//! - **Game**: grid and segment rules, session state, scoring, undo
//! - **Highscore**: bounded top-ten score ranking
//! - **Store**: JSON persistence for score tables and saved games
//! - **Config**: TOML settings with defaults for every field
//! - **Tui**: ratatui front end driving a session
//!
//! # Example
//!
//! ```
//! use morpion::{GameSession, Point, Scoring, Segment};
//!
//! let mut session = GameSession::new(Scoring::default());
//! let segment = Segment::between(Point::new(7, 3), Point::new(7, 8)).expect("a straight run");
//! let outcome = session.play(segment).expect("legal against the starting cross");
//! assert_eq!(*outcome.points(), 10);
//! assert_eq!(session.segments().len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod error;
mod game;
mod highscore;
mod store;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Engine errors
pub use error::GameError;

// Crate-level exports - Game engine
pub use game::{
    Direction, DisplayMode, FULL_LINE_POINTS, GRID_SIZE, GameSession, Grid, NEW_POINT_POINTS,
    PlayEvaluation, PlayOutcome, Point, SEGMENT_LEN, SEGMENT_SPAN, Scoring, Segment, is_playable,
    occupied_count, overlaps_history, playable_segments,
};

// Crate-level exports - Highscores
pub use highscore::{HIGHSCORE_MAX, HighscoreEntry, HighscoreTable, NICKNAME_MAX};

// Crate-level exports - Persistence
pub use store::{HighscoreStore, SavedGame, StoreError};

// Crate-level exports - Terminal interface
pub use tui::{GameSummary, run_game};
