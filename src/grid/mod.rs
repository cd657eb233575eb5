//! Wall grid: the maze data model.
//!
//! A [`WallGrid`] owns the wall data for a `width x height` grid of cells
//! and answers adjacency queries. Walls are undirected: one stored entry
//! always blocks movement in both directions between the two cells it
//! separates, so an asymmetric (one-way) wall cannot be represented.
//!
//! Walls live on the *lines between* cells:
//! - a horizontal entry `(x, line)` separates cell `(x, line-1)` from
//!   `(x, line)` — it is the north wall of the former and the south wall
//!   of the latter;
//! - a vertical entry `(y, line)` separates cell `(line-1, y)` from
//!   `(line, y)` — the east wall of the former, the west wall of the
//!   latter.
//!
//! Every boundary cell additionally has its outward-facing wall
//! implicitly present, independent of the stored internal walls.
//!
//! The grid is mutable only during the construction phase (wall
//! insertion); exploration and search query it read-only, so it can be
//! shared freely across concurrent queries.

use std::collections::HashSet;

use crate::core::{Cell, Orientation};

/// The four compass walls around one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallSides {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl WallSides {
    /// Wall presence on the given compass side
    #[inline]
    pub fn side(&self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::North => self.north,
            Orientation::East => self.east,
            Orientation::South => self.south,
            Orientation::West => self.west,
        }
    }
}

/// Rectangular grid maze with internal walls.
#[derive(Clone, Debug)]
pub struct WallGrid {
    width: i32,
    height: i32,
    /// Entries `(x, line)`: wall below row `line` in column `x`
    horizontal_walls: HashSet<(i32, i32)>,
    /// Entries `(y, line)`: wall left of column `line` in row `y`
    vertical_walls: HashSet<(i32, i32)>,
}

impl WallGrid {
    /// Create an empty grid (no internal walls) of the given dimensions.
    ///
    /// Both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            horizontal_walls: HashSet::new(),
            vertical_walls: HashSet::new(),
        }
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Is the cell inside the grid?
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// North-east corner cell `(width-1, height-1)`, the conventional
    /// exploration and search goal.
    #[inline]
    pub fn default_goal(&self) -> Cell {
        Cell::new(self.width - 1, self.height - 1)
    }

    /// Add an internal horizontal wall between rows `line-1` and `line`
    /// in column `x`. Idempotent.
    pub fn add_horizontal_wall(&mut self, x: i32, line: i32) {
        self.horizontal_walls.insert((x, line));
    }

    /// Add an internal vertical wall between columns `line-1` and `line`
    /// in row `y`. Idempotent.
    pub fn add_vertical_wall(&mut self, y: i32, line: i32) {
        self.vertical_walls.insert((y, line));
    }

    /// Which of the four compass walls bound this cell?
    ///
    /// Starts from the implicit boundary walls and ORs in the matching
    /// internal entries. O(1) amortized; this runs on every exploration
    /// step and every search-frontier expansion.
    pub fn walls(&self, cell: Cell) -> WallSides {
        let Cell { x, y } = cell;

        let mut north = y == self.height - 1;
        let mut south = y == 0;
        let mut west = x == 0;
        let mut east = x == self.width - 1;

        if self.horizontal_walls.contains(&(x, y + 1)) {
            north = true;
        }
        if self.horizontal_walls.contains(&(x, y)) {
            south = true;
        }
        if self.vertical_walls.contains(&(y, x + 1)) {
            east = true;
        }
        if self.vertical_walls.contains(&(y, x)) {
            west = true;
        }

        WallSides {
            north,
            east,
            south,
            west,
        }
    }

    /// Cells reachable from this one in a single step, in N, E, S, W
    /// order.
    ///
    /// For in-range input the boundary-wall invariant alone keeps every
    /// emitted neighbor inside the grid; no separate bound check is
    /// needed.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let w = self.walls(cell);
        let mut out = Vec::with_capacity(4);

        if !w.north {
            out.push(cell.offset(0, 1));
        }
        if !w.east {
            out.push(cell.offset(1, 0));
        }
        if !w.south {
            out.push(cell.offset(0, -1));
        }
        if !w.west {
            out.push(cell.offset(-1, 0));
        }

        out
    }

    /// Render the maze as a bordered ASCII layout (`2w+1 x 2h+1`
    /// characters), the inverse of [`crate::io::parse_maze`].
    ///
    /// Row 0 of the output is the top border; maze y grows upward.
    pub fn to_ascii(&self) -> String {
        let rows = (2 * self.height + 1) as usize;
        let cols = (2 * self.width + 1) as usize;
        let mut canvas = vec![vec!['#'; cols]; rows];

        for y in 0..self.height {
            for x in 0..self.width {
                let ax = (2 * x + 1) as usize;
                let ay = (2 * (self.height - 1 - y) + 1) as usize;
                canvas[ay][ax] = ' ';

                let w = self.walls(Cell::new(x, y));
                if !w.east {
                    canvas[ay][ax + 1] = ' ';
                }
                if !w.north {
                    canvas[ay - 1][ax] = ' ';
                }
            }
        }

        let mut out = String::with_capacity(rows * (cols + 1));
        for row in canvas {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}
