//! Session state: grid, played segments, score and metadata.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::evaluation::PlayEvaluation;
use super::grid::Grid;
use super::mode::DisplayMode;
use super::point::Point;
use super::rules::{is_playable, occupied_count, playable_segments};
use super::segment::{SEGMENT_LEN, Segment};
use crate::error::GameError;

/// Points awarded for a segment whose six points were all occupied.
pub const FULL_LINE_POINTS: u32 = 25;

/// Points awarded for a segment that claims one new point.
pub const NEW_POINT_POINTS: u32 = 10;

fn default_full_line() -> u32 {
    FULL_LINE_POINTS
}

fn default_new_point() -> u32 {
    NEW_POINT_POINTS
}

/// Point awards for the two kinds of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Scoring {
    /// Award when all six points were occupied before the play.
    #[serde(default = "default_full_line")]
    full_line: u32,
    /// Award when the play claims a new point.
    #[serde(default = "default_new_point")]
    new_point: u32,
}

impl Default for Scoring {
    fn default() -> Self {
        Self::new(FULL_LINE_POINTS, NEW_POINT_POINTS)
    }
}

/// What a single accepted play produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct PlayOutcome {
    /// Points awarded for the play.
    points: u32,
    /// Whether all six points were occupied before the play.
    full_line: bool,
    /// Rating of the play by its open follow-ups.
    evaluation: PlayEvaluation,
}

/// A single game in progress.
///
/// The grid's occupancy is always the union of the starting cross and
/// the played segments; undo rebuilds it from scratch rather than
/// patching cells out.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    grid: Grid,
    segments: Vec<Segment>,
    score: u32,
    possibilities: Vec<Segment>,
    mode: DisplayMode,
    last_play: Option<Point>,
    last_evaluation: Option<PlayEvaluation>,
    scoring: Scoring,
    nickname: Option<String>,
    save_path: Option<PathBuf>,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl GameSession {
    /// Starts a fresh session on the starting cross.
    ///
    /// The opening possibilities are enumerated once here and kept for
    /// the lifetime of the session; the board view marks them as the
    /// original opportunities of the game.
    #[instrument]
    pub fn new(scoring: Scoring) -> Self {
        let grid = Grid::new();
        let possibilities = playable_segments(&grid, &[]);
        debug!(count = possibilities.len(), "Enumerated opening plays");
        Self {
            grid,
            segments: Vec::new(),
            score: 0,
            possibilities,
            mode: DisplayMode::default(),
            last_play: None,
            last_evaluation: None,
            scoring,
            nickname: None,
            save_path: None,
        }
    }

    /// Rebuilds a session by replaying a recorded history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] on the first segment that is
    /// not legal at its point in the replay.
    #[instrument(skip(scoring, segments), fields(segments = segments.len()))]
    pub fn from_history(scoring: Scoring, segments: Vec<Segment>) -> Result<Self, GameError> {
        let mut session = Self::new(scoring);
        for segment in segments {
            session.play(segment)?;
        }
        Ok(session)
    }
}

// ─────────────────────────────────────────────────────────────
//  Play, undo, recompute
// ─────────────────────────────────────────────────────────────

impl GameSession {
    /// Plays a segment.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] when the segment covers fewer
    /// than five occupied points or overlaps a played segment in more
    /// than one point.
    #[instrument(skip(self), fields(segment = %segment))]
    pub fn play(&mut self, segment: Segment) -> Result<PlayOutcome, GameError> {
        if !is_playable(&self.grid, &self.segments, &segment) {
            return Err(GameError::InvalidMove(segment));
        }
        let outcome = self.consume(segment);
        debug!(points = outcome.points, score = self.score, "Played segment");
        Ok(outcome)
    }

    /// Takes back the most recent play and returns it, or `None` when
    /// nothing has been played.
    ///
    /// The grid and score are rebuilt from the remaining history, which
    /// also recenters the cursor and drops any selection.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Segment> {
        let undone = self.segments.pop()?;
        self.recompute();
        debug!(segment = %undone, score = self.score, "Took back segment");
        Some(undone)
    }

    /// Re-derives grid, score and last-play data from the history.
    #[instrument(skip(self))]
    pub fn recompute(&mut self) {
        let history = std::mem::take(&mut self.segments);
        self.grid = Grid::new();
        self.score = 0;
        self.last_play = None;
        self.last_evaluation = None;
        for segment in history {
            self.consume(segment);
        }
    }

    /// Occupies a segment's points, scores it and records it.
    ///
    /// Callers have already checked legality.
    fn consume(&mut self, segment: Segment) -> PlayOutcome {
        let count = occupied_count(&self.grid, &segment);
        let new_point = segment.points().iter().copied().find(|p| !self.grid.is_occupied(*p));
        for point in segment.points() {
            self.grid.occupy(*point);
        }
        let full_line = count == SEGMENT_LEN;
        let points = if full_line { self.scoring.full_line } else { self.scoring.new_point };
        self.score += points;
        self.segments.push(segment);
        let evaluation = self.evaluate(&segment, new_point);
        self.last_play = new_point;
        self.last_evaluation = Some(evaluation);
        PlayOutcome::new(points, full_line, evaluation)
    }

    /// Rates a play just made by counting the opening possibilities
    /// through its claimed point that are still legal afterward.
    fn evaluate(&self, segment: &Segment, new_point: Option<Point>) -> PlayEvaluation {
        let follow_ups = self
            .possibilities
            .iter()
            .filter(|candidate| match new_point {
                Some(point) => candidate.contains(point),
                None => segment.points().iter().any(|p| candidate.contains(*p)),
            })
            .filter(|candidate| is_playable(&self.grid, &self.segments, candidate))
            .count();
        PlayEvaluation::from_follow_ups(follow_ups)
    }

    /// Cycles the display mode and returns the new one.
    pub fn toggle_mode(&mut self) -> DisplayMode {
        self.mode = self.mode.next();
        self.mode
    }
}

// ─────────────────────────────────────────────────────────────
//  Queries
// ─────────────────────────────────────────────────────────────

impl GameSession {
    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Played segments in play order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The opening possibilities enumerated at session start.
    pub fn possibilities(&self) -> &[Segment] {
        &self.possibilities
    }

    /// Current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// The point claimed by the most recent play, when it claimed one.
    pub fn last_play(&self) -> Option<Point> {
        self.last_play
    }

    /// Rating of the most recent play.
    pub fn last_evaluation(&self) -> Option<PlayEvaluation> {
        self.last_evaluation
    }

    /// Player nickname, when one has been set.
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// Path the session is saved to, when one has been set.
    pub fn save_path(&self) -> Option<&Path> {
        self.save_path.as_deref()
    }

    /// Number of segments playable in the current position.
    ///
    /// Unlike [`possibilities`], this is enumerated against the live
    /// grid and history, so it reaches zero exactly when the game is
    /// over.
    ///
    /// [`possibilities`]: GameSession::possibilities
    pub fn remaining_moves(&self) -> usize {
        playable_segments(&self.grid, &self.segments).len()
    }

    /// Whether no legal play remains.
    pub fn is_finished(&self) -> bool {
        self.remaining_moves() == 0
    }
}

// ─────────────────────────────────────────────────────────────
//  Cursor, selection and metadata
// ─────────────────────────────────────────────────────────────

impl GameSession {
    /// Current cursor position.
    pub fn cursor(&self) -> Point {
        self.grid.cursor()
    }

    /// Moves the cursor, clamping it onto the grid.
    pub fn set_cursor(&mut self, point: Point) {
        self.grid.set_cursor(point);
    }

    /// Currently selected point, if any.
    pub fn select(&self) -> Option<Point> {
        self.grid.select()
    }

    /// Selects a point on the grid.
    pub fn set_select(&mut self, point: Point) {
        self.grid.set_select(point);
    }

    /// Drops the current selection.
    pub fn clear_select(&mut self) {
        self.grid.clear_select();
    }

    /// Sets the player nickname.
    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = Some(nickname.into());
    }

    /// Sets the path the session is saved to.
    pub fn set_save_path(&mut self, path: PathBuf) {
        self.save_path = Some(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::point::GRID_SIZE;

    fn segment(ax: i32, ay: i32, bx: i32, by: i32) -> Segment {
        Segment::between(Point::new(ax, ay), Point::new(bx, by)).unwrap()
    }

    #[test]
    fn test_full_line_bonus() {
        let mut session = GameSession::new(Scoring::default());
        // Fill the column beside the left arm by hand; (6, 7) already
        // sits on the cross. Tracing it claims no new point.
        for y in [3, 4, 5, 6, 8] {
            session.grid.occupy(Point::new(6, y));
        }
        let outcome = session.play(segment(6, 3, 6, 8)).unwrap();
        assert!(*outcome.full_line());
        assert_eq!(*outcome.points(), FULL_LINE_POINTS);
        assert_eq!(session.score(), FULL_LINE_POINTS);
        assert_eq!(session.last_play(), None);
        // Rated through the whole trace: the row through (6, 3) and the
        // two windows through (6, 7) stay open.
        assert_eq!(session.last_evaluation(), Some(PlayEvaluation::Impressive));
    }

    #[test]
    fn test_follow_up_through_claimed_point_rates_ordinary() {
        let mut session = GameSession::new(Scoring::default());
        // Open the column beside the left arm, leaving (6, 3) empty.
        for y in [4, 5, 6, 8] {
            session.grid.occupy(Point::new(6, y));
        }
        session.play(segment(6, 3, 6, 8)).unwrap();
        // Claiming (6, 3) leaves the row through it still playable.
        assert_eq!(session.last_evaluation(), Some(PlayEvaluation::Ordinary));
    }

    #[test]
    fn test_cursor_stays_on_grid() {
        let mut session = GameSession::new(Scoring::default());
        session.set_cursor(Point::new(-3, GRID_SIZE + 4));
        assert_eq!(session.cursor(), Point::new(0, GRID_SIZE - 1));
    }
}
