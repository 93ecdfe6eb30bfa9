//! Core geometry for the join-five grid.

use serde::{Deserialize, Serialize};

/// Side length of the square playing grid.
pub const GRID_SIZE: i32 = 18;

/// A grid coordinate pair.
///
/// Coordinates grow rightward in `x` and upward in `y`. Points outside
/// `[0, GRID_SIZE)` can be constructed (cursor arithmetic walks off the
/// edge freely) but never pass [`Point::on_grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Column, 0 at the left edge.
    pub x: i32,
    /// Row, 0 at the bottom edge.
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates lie within the grid.
    pub fn on_grid(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < GRID_SIZE && self.y < GRID_SIZE
    }

    /// The point shifted by the given deltas.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The nearest point with both coordinates clamped onto the grid.
    pub fn clamped(self) -> Self {
        Self::new(self.x.clamp(0, GRID_SIZE - 1), self.y.clamp(0, GRID_SIZE - 1))
    }

    /// Whether two points share a row or a column.
    pub fn same_axis(self, other: Self) -> bool {
        self.x == other.x || self.y == other.y
    }

    /// Whether two points lie on a common diagonal.
    pub fn same_diagonal(self, other: Self) -> bool {
        (self.x - other.x).abs() == (self.y - other.y).abs()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four scan directions used when enumerating segments.
///
/// Every straight six-point run on the grid is the span of exactly one
/// direction; the opposite four directions would enumerate the same runs
/// reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// Step (1, 0) along a row.
    Right,
    /// Step (0, 1) along a column.
    Up,
    /// Step (1, 1) along a rising diagonal.
    UpRight,
    /// Step (1, -1) along a falling diagonal.
    DownRight,
}

impl Direction {
    /// Unit step from a segment's first point toward its last.
    pub fn step(self) -> (i32, i32) {
        match self {
            Self::Right => (1, 0),
            Self::Up => (0, 1),
            Self::UpRight => (1, 1),
            Self::DownRight => (1, -1),
        }
    }

    /// Endpoints of the six-point window in this direction whose scan
    /// anchor is `(x, y)`, or `None` when the window does not fit on the
    /// grid.
    ///
    /// Anchoring each window at its maximal coordinates lets a raster
    /// scan over `(x, y)` visit every window exactly once.
    pub fn window(self, x: i32, y: i32) -> Option<(Point, Point)> {
        let span = super::segment::SEGMENT_SPAN;
        let (dx, dy) = self.step();
        if (dx != 0 && x < span) || (dy != 0 && y < span) {
            return None;
        }
        // The anchor is the top-right corner of the window's bounding
        // box, so a falling diagonal starts at the anchor's row.
        let from = Point::new(x - span * dx, y - span * dy.max(0));
        Some((from, from.offset(span * dx, span * dy)))
    }
}
