//! Error types for vyuha.

use thiserror::Error;

use crate::core::{Cell, Orientation};

/// Vyuha error type
#[derive(Error, Debug)]
pub enum Error {
    /// A forward step was attempted while a wall blocks the front side.
    ///
    /// This indicates caller misuse: a move issued without (or against)
    /// a preceding `sense`. It is surfaced immediately, never corrected.
    #[error("cannot step forward: wall ahead of ({}, {}) facing {orientation}", position.x, position.y)]
    BlockedMove {
        position: Cell,
        orientation: Orientation,
    },

    /// The explorer found walls on all four sides of the runner.
    ///
    /// A maze built from a spanning structure never produces this; it
    /// means the input contains an isolated cell.
    #[error("runner is boxed in at ({}, {}): walls on all four sides", position.x, position.y)]
    Stuck { position: Cell },

    /// Exploration exceeded the configured step cap before reaching the goal.
    #[error("exploration exceeded the step limit of {limit}")]
    StepLimitExceeded { limit: usize },

    /// A position lies outside the maze.
    #[error("position ({}, {}) is outside a {width}x{height} maze", position.x, position.y)]
    OutOfBounds {
        position: Cell,
        width: i32,
        height: i32,
    },

    /// The ASCII maze text does not describe a valid maze.
    #[error("invalid maze layout: {0}")]
    Format(String),

    /// A coordinate argument could not be parsed.
    #[error("invalid coordinate '{0}' (expected x,y)")]
    Coordinate(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
