//! Rules engine for the join-five solitaire game.
//!
//! A session owns an 18x18 grid seeded with a cross of occupied cells.
//! Each play draws a straight six-point segment covering at least five
//! occupied points and overlapping no earlier segment in more than one
//! point; play continues until no legal segment remains.

// Private module declarations
mod evaluation;
mod grid;
mod mode;
mod point;
mod rules;
mod segment;
mod session;

// Public re-exports
pub use evaluation::PlayEvaluation;
pub use grid::Grid;
pub use mode::DisplayMode;
pub use point::{Direction, GRID_SIZE, Point};
pub use rules::{is_playable, occupied_count, overlaps_history, playable_segments};
pub use segment::{SEGMENT_LEN, SEGMENT_SPAN, Segment};
pub use session::{FULL_LINE_POINTS, GameSession, NEW_POINT_POINTS, PlayOutcome, Scoring};
