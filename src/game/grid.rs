//! Grid state: occupied cells plus the player's cursor and selection.

use super::point::{GRID_SIZE, Point};

/// Occupancy of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    /// Nothing played here yet.
    Empty,
    /// Covered by the starting cross or a played segment.
    Occupied,
}

/// The playing field.
///
/// A fresh grid carries the Greek-cross outline of occupied cells that
/// every game starts from, with the cursor resting at the center.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE as usize]; GRID_SIZE as usize],
    cursor: Point,
    select: Option<Point>,
}

impl Grid {
    /// Creates a grid holding only the starting cross.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; GRID_SIZE as usize]; GRID_SIZE as usize];
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                if Self::in_frame(Point::new(x, y)) {
                    cells[y as usize][x as usize] = Cell::Occupied;
                }
            }
        }
        Self {
            cells,
            cursor: Point::new(GRID_SIZE / 2, GRID_SIZE / 2),
            select: None,
        }
    }

    /// Whether a point belongs to the starting cross.
    ///
    /// The cross is the outline of a plus shape of four-cell arms
    /// centered on the grid, 48 cells in all.
    pub fn in_frame(point: Point) -> bool {
        let Point { x, y } = point;
        ((y == 3 || y == 15) && (7..=11).contains(&x))
            || ((y == 7 || y == 11) && ((3..=7).contains(&x) || (11..=15).contains(&x)))
            || ((x == 3 || x == 15) && (7..=11).contains(&y))
            || ((x == 7 || x == 11) && ((3..=7).contains(&y) || (11..=15).contains(&y)))
    }

    /// Whether the cell at `point` is occupied. Off-grid points read as
    /// empty.
    pub fn is_occupied(&self, point: Point) -> bool {
        point.on_grid() && self.cells[point.y as usize][point.x as usize] == Cell::Occupied
    }

    /// Marks the cell at `point` occupied. Off-grid points are ignored.
    pub fn occupy(&mut self, point: Point) {
        if point.on_grid() {
            self.cells[point.y as usize][point.x as usize] = Cell::Occupied;
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Moves the cursor, clamping it onto the grid.
    pub fn set_cursor(&mut self, point: Point) {
        self.cursor = point.clamped();
    }

    /// Currently selected point, if any.
    pub fn select(&self) -> Option<Point> {
        self.select
    }

    /// Selects a point. Off-grid points are ignored.
    pub fn set_select(&mut self, point: Point) {
        if point.on_grid() {
            self.select = Some(point);
        }
    }

    /// Drops the current selection.
    pub fn clear_select(&mut self) {
        self.select = None;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
