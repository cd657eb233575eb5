//! ASCII maze file reader.
//!
//! A maze of `w x h` cells is laid out as `(2w+1) x (2h+1)` characters:
//! odd/odd positions are cells, the even positions between them carry
//! `#` where a wall is present, and the outermost ring is a solid `#`
//! border. Row 0 of the text is the *top* border; maze y grows upward.
//!
//! ```text
//! #####
//! #   #      a 2x1 maze with no internal walls
//! #####
//! ```

use log::debug;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::grid::WallGrid;

/// Read and parse a maze file.
pub fn read_maze<P: AsRef<Path>>(path: P) -> Result<WallGrid> {
    let text = fs::read_to_string(path.as_ref())?;
    let grid = parse_maze(&text)?;
    debug!(
        "read_maze: {:?} -> {}x{} cells",
        path.as_ref(),
        grid.width(),
        grid.height()
    );
    Ok(grid)
}

/// Parse a bordered ASCII maze layout into a [`WallGrid`].
pub fn parse_maze(text: &str) -> Result<WallGrid> {
    let rows: Vec<&str> = text.lines().collect();

    if rows.is_empty() {
        return Err(Error::Format("maze file is empty".into()));
    }

    let ascii_height = rows.len();
    let ascii_width = rows[0].chars().count();

    if rows.iter().any(|r| r.chars().count() != ascii_width) {
        return Err(Error::Format("maze rows have inconsistent widths".into()));
    }

    if (ascii_height - 1) % 2 != 0 || (ascii_width - 1) % 2 != 0 {
        return Err(Error::Format(
            "maze dimensions must be an odd-sized ASCII layout".into(),
        ));
    }

    let height = ((ascii_height - 1) / 2) as i32;
    let width = ((ascii_width - 1) / 2) as i32;

    if height == 0 || width == 0 {
        return Err(Error::Format("maze must contain at least one cell".into()));
    }

    let cells: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();

    if !cells[0].iter().all(|&c| c == '#') {
        return Err(Error::Format("top border must be all '#'".into()));
    }
    if !cells[ascii_height - 1].iter().all(|&c| c == '#') {
        return Err(Error::Format("bottom border must be all '#'".into()));
    }
    for row in &cells {
        if row[0] != '#' || row[ascii_width - 1] != '#' {
            return Err(Error::Format("side borders must be '#'".into()));
        }
    }

    let mut grid = WallGrid::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let ax = (2 * x + 1) as usize;
            let ay = (2 * (height - 1 - y) + 1) as usize;

            if x < width - 1 && cells[ay][ax + 1] == '#' {
                grid.add_vertical_wall(y, x + 1);
            }
            if y < height - 1 && cells[ay - 1][ax] == '#' {
                grid.add_horizontal_wall(x, y + 1);
            }
        }
    }

    Ok(grid)
}
