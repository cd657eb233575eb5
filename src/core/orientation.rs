//! Compass orientation and turn direction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass facing of the runner, cyclically ordered N -> E -> S -> W -> N.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    North,
    East,
    South,
    West,
}

/// Rotation direction for an in-place turn.
///
/// Being a two-valued enum, there is no unrecognized-direction case to
/// reject at runtime; the type system carries that contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnDirection {
    /// One step backward in the compass cycle (N -> W)
    Left,
    /// One step forward in the compass cycle (N -> E)
    Right,
}

impl Orientation {
    /// Rotate one step left or right in the compass cycle
    #[inline]
    pub fn turned(self, direction: TurnDirection) -> Orientation {
        match direction {
            TurnDirection::Left => match self {
                Orientation::North => Orientation::West,
                Orientation::West => Orientation::South,
                Orientation::South => Orientation::East,
                Orientation::East => Orientation::North,
            },
            TurnDirection::Right => match self {
                Orientation::North => Orientation::East,
                Orientation::East => Orientation::South,
                Orientation::South => Orientation::West,
                Orientation::West => Orientation::North,
            },
        }
    }

    /// Opposite compass value (two turns in either direction)
    #[inline]
    pub fn opposite(self) -> Orientation {
        match self {
            Orientation::North => Orientation::South,
            Orientation::South => Orientation::North,
            Orientation::East => Orientation::West,
            Orientation::West => Orientation::East,
        }
    }

    /// Unit step for one forward move while facing this way
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Orientation::North => (0, 1),
            Orientation::East => (1, 0),
            Orientation::South => (0, -1),
            Orientation::West => (-1, 0),
        }
    }

    /// Single character representation for logging
    pub fn as_char(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
