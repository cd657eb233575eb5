//! File input/output: ASCII maze reading and result reports.
//!
//! The core model only ever sees already-parsed wall placements and
//! produces step logs and cell sequences; everything in this module is
//! the thin boundary layer that converts between those values and files.

mod ascii;
mod report;

pub use ascii::{parse_maze, read_maze};
pub use report::{write_exploration_log, write_statistics};
