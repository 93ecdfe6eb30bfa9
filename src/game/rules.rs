//! Legality rules for playing a segment.

use strum::IntoEnumIterator;
use tracing::instrument;

use super::grid::Grid;
use super::point::{Direction, GRID_SIZE};
use super::segment::{SEGMENT_LEN, Segment};

/// Number of the segment's points already occupied on the grid.
pub fn occupied_count(grid: &Grid, segment: &Segment) -> usize {
    segment.points().iter().filter(|p| grid.is_occupied(**p)).count()
}

/// Whether the segment shares more than one point with any played
/// segment.
pub fn overlaps_history(history: &[Segment], segment: &Segment) -> bool {
    history.iter().any(|played| played.shared_points(segment) > 1)
}

/// Whether the segment may be played in the given position.
///
/// A playable segment covers at least five occupied points and overlaps
/// each played segment in at most one point.
pub fn is_playable(grid: &Grid, history: &[Segment], segment: &Segment) -> bool {
    occupied_count(grid, segment) >= SEGMENT_LEN - 1 && !overlaps_history(history, segment)
}

/// Enumerates every segment playable in the given position.
///
/// The grid is raster-scanned bottom row first, each anchor probing the
/// four directions in turn, so the result is deterministic for a given
/// position.
#[instrument(skip(grid, history))]
pub fn playable_segments(grid: &Grid, history: &[Segment]) -> Vec<Segment> {
    let mut found = Vec::new();
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            for direction in Direction::iter() {
                if let Some((from, to)) = direction.window(x, y)
                    && let Some(segment) = Segment::between(from, to)
                    && is_playable(grid, history, &segment)
                {
                    found.push(segment);
                }
            }
        }
    }
    found
}
