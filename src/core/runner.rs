//! Runner state and pure movement transitions.

use crate::core::{Cell, Orientation, TurnDirection};
use crate::error::{Error, Result};
use crate::grid::WallGrid;

/// Walls around the runner, mapped into its own frame of reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelativeWalls {
    pub left: bool,
    pub front: bool,
    pub right: bool,
}

/// Position and facing of the simulated runner.
///
/// A `RunnerState` is an immutable value: every transition returns a new
/// state and never mutates a shared instance. Callers thread the state
/// through successive moves and discard it at the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RunnerState {
    pub position: Cell,
    pub orientation: Orientation,
}

impl RunnerState {
    /// Create a runner at the given position and facing
    #[inline]
    pub fn new(position: Cell, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Runner at the origin facing north (the conventional start)
    #[inline]
    pub fn at_origin() -> Self {
        Self::default()
    }

    /// Rotate in place; position is unchanged
    #[inline]
    pub fn turned(self, direction: TurnDirection) -> RunnerState {
        RunnerState::new(self.position, self.orientation.turned(direction))
    }

    /// Map the four absolute walls around the current cell into the
    /// runner's left/front/right.
    ///
    /// | facing | left  | front | right |
    /// |--------|-------|-------|-------|
    /// | N      | west  | north | east  |
    /// | E      | north | east  | south |
    /// | S      | east  | south | west  |
    /// | W      | south | west  | north |
    pub fn sense(&self, grid: &WallGrid) -> RelativeWalls {
        let w = grid.walls(self.position);

        let (left, front, right) = match self.orientation {
            Orientation::North => (w.west, w.north, w.east),
            Orientation::East => (w.north, w.east, w.south),
            Orientation::South => (w.east, w.south, w.west),
            Orientation::West => (w.south, w.west, w.north),
        };

        RelativeWalls { left, front, right }
    }

    /// Move one cell in the facing direction.
    ///
    /// Fails with [`Error::BlockedMove`] if the front wall is present.
    /// Orientation is unchanged.
    pub fn step_forward(self, grid: &WallGrid) -> Result<RunnerState> {
        if self.sense(grid).front {
            return Err(Error::BlockedMove {
                position: self.position,
                orientation: self.orientation,
            });
        }

        let (dx, dy) = self.orientation.delta();
        Ok(RunnerState::new(self.position.offset(dx, dy), self.orientation))
    }

    /// Move one cell opposite to the facing direction and flip the
    /// orientation to the opposite compass value.
    ///
    /// This transition does *not* consult the wall behind. It is meant to
    /// be taken only when left, front and right are all blocked: in a
    /// single-solution maze built from a spanning structure the rear side
    /// is then guaranteed open. [`crate::exploration::LocalExplorer`]
    /// verifies that guarantee before invoking it.
    pub fn step_backward(self) -> RunnerState {
        let (dx, dy) = self.orientation.delta();
        RunnerState::new(
            self.position.offset(-dx, -dy),
            self.orientation.opposite(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid() -> WallGrid {
        WallGrid::new(4, 4)
    }

    #[test]
    fn test_turn_keeps_position() {
        let r = RunnerState::new(Cell::new(1, 2), Orientation::North);
        let turned = r.turned(TurnDirection::Right);
        assert_eq!(turned.position, Cell::new(1, 2));
        assert_eq!(turned.orientation, Orientation::East);
    }

    #[test]
    fn test_sense_permutation_all_orientations() {
        // South-west corner of an open grid: south and west walls only.
        let grid = open_grid();
        let cell = Cell::new(0, 0);

        let north = RunnerState::new(cell, Orientation::North).sense(&grid);
        assert_eq!(
            north,
            RelativeWalls {
                left: true,   // west
                front: false, // north
                right: false, // east
            }
        );

        let east = RunnerState::new(cell, Orientation::East).sense(&grid);
        assert_eq!(
            east,
            RelativeWalls {
                left: false, // north
                front: false, // east
                right: true, // south
            }
        );

        let south = RunnerState::new(cell, Orientation::South).sense(&grid);
        assert_eq!(
            south,
            RelativeWalls {
                left: false, // east
                front: true, // south
                right: true, // west
            }
        );

        let west = RunnerState::new(cell, Orientation::West).sense(&grid);
        assert_eq!(
            west,
            RelativeWalls {
                left: true,  // south
                front: true, // west
                right: false, // north
            }
        );
    }

    #[test]
    fn test_step_forward_moves_one_cell() {
        let grid = open_grid();
        let r = RunnerState::new(Cell::new(1, 1), Orientation::East);
        let moved = r.step_forward(&grid).unwrap();
        assert_eq!(moved.position, Cell::new(2, 1));
        assert_eq!(moved.orientation, Orientation::East);
    }

    #[test]
    fn test_step_forward_blocked_by_boundary() {
        let grid = open_grid();
        let r = RunnerState::new(Cell::new(0, 0), Orientation::South);
        let err = r.step_forward(&grid).unwrap_err();
        assert!(matches!(err, Error::BlockedMove { .. }));
    }

    #[test]
    fn test_forward_then_backward_round_trip() {
        // step_backward flips orientation, so the round trip restores the
        // position but leaves the runner facing the opposite way. A second
        // flip restores the original orientation.
        let grid = open_grid();
        let start = RunnerState::new(Cell::new(1, 1), Orientation::North);

        let there = start.step_forward(&grid).unwrap();
        let back = there.step_backward();

        // step_backward moves opposite to the *current* facing (still
        // north after the forward step), so it returns to the start cell.
        assert_eq!(back.position, start.position);
        assert_eq!(back.orientation, start.orientation.opposite());
        assert_eq!(back.step_backward().orientation, start.orientation);
    }
}
