//! Straight six-point segments, the only move in the game.

use serde::{Deserialize, Serialize};

use super::point::Point;

/// Number of points a segment covers.
pub const SEGMENT_LEN: usize = 6;

/// Distance between a segment's endpoints along its dominant axis.
pub const SEGMENT_SPAN: i32 = 5;

/// A straight run of six adjacent grid points.
///
/// Segments are stored endpoint to endpoint but compared as point sets,
/// so a segment equals its own reversal. They serialize as the bare
/// point array, and deserialization accepts only arrays that walk a
/// straight run, so an edited save file cannot carry a bent one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "[Point; SEGMENT_LEN]", into = "[Point; SEGMENT_LEN]")]
pub struct Segment {
    points: [Point; SEGMENT_LEN],
}

impl Segment {
    /// Builds the segment joining two endpoints, or `None` when the pair
    /// does not span a straight six-point run on the grid.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        if !Self::valid_endpoints(from, to) {
            return None;
        }
        let dx = (to.x - from.x).signum();
        let dy = (to.y - from.y).signum();
        let mut points = [from; SEGMENT_LEN];
        for (i, point) in points.iter_mut().enumerate() {
            *point = from.offset(dx * i as i32, dy * i as i32);
        }
        Some(Self { points })
    }

    /// Whether two points are the endpoints of some segment.
    ///
    /// Both must sit on the grid, exactly five apart along the dominant
    /// axis, and aligned on a row, column or diagonal.
    pub fn valid_endpoints(from: Point, to: Point) -> bool {
        if !from.on_grid() || !to.on_grid() {
            return false;
        }
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        dx.max(dy) == SEGMENT_SPAN && (from.same_axis(to) || from.same_diagonal(to))
    }

    /// The six points, ordered from one endpoint to the other.
    pub fn points(&self) -> &[Point; SEGMENT_LEN] {
        &self.points
    }

    /// First stored endpoint.
    pub fn first(&self) -> Point {
        self.points[0]
    }

    /// Last stored endpoint.
    pub fn last(&self) -> Point {
        self.points[SEGMENT_LEN - 1]
    }

    /// Whether the segment covers the given point.
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Whether the given point is one of the two endpoints.
    pub fn has_endpoint(&self, point: Point) -> bool {
        self.first() == point || self.last() == point
    }

    /// Number of points this segment shares with another.
    pub fn shared_points(&self, other: &Self) -> usize {
        self.points.iter().filter(|p| other.contains(**p)).count()
    }
}

impl From<Segment> for [Point; SEGMENT_LEN] {
    fn from(segment: Segment) -> Self {
        segment.points
    }
}

impl TryFrom<[Point; SEGMENT_LEN]> for Segment {
    type Error = String;

    fn try_from(points: [Point; SEGMENT_LEN]) -> Result<Self, Self::Error> {
        match Self::between(points[0], points[SEGMENT_LEN - 1]) {
            Some(segment) if segment.points == points => Ok(segment),
            _ => Err(format!(
                "points {} -> {} do not walk a straight six-point run",
                points[0],
                points[SEGMENT_LEN - 1]
            )),
        }
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        // Six distinct points each, so one-way containment is equality.
        self.points.iter().all(|p| other.contains(*p))
    }
}

impl Eq for Segment {}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.first(), self.last())
    }
}
