//! Grid cell coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One grid position (integer cell indices).
///
/// Cells are pure values; two cells with the same coordinates are the
/// same cell. `(0, 0)` is the south-west corner; x grows eastward and
/// y grows northward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl Cell {
    /// Create a new cell coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another cell.
    ///
    /// Admissible heuristic for 4-connected unit-cost grids: it never
    /// overestimates the true remaining distance.
    #[inline]
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Translate by a delta
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> Cell {
        Cell::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn test_offset() {
        let c = Cell::new(2, 2);
        assert_eq!(c.offset(0, 1), Cell::new(2, 3));
        assert_eq!(c.offset(-1, 0), Cell::new(1, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(4, 7).to_string(), "(4, 7)");
    }
}
