//! Errors surfaced by the rules engine.

use crate::game::Segment;

/// Ways a play can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The segment covers too few occupied points or overlaps a played
    /// segment in more than one point.
    InvalidMove(Segment),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidMove(segment) => write!(f, "segment {segment} cannot be played"),
        }
    }
}

impl std::error::Error for GameError {}
