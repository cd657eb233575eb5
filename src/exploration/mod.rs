//! Local maze exploration using the left-hand wall-following rule.
//!
//! The explorer makes one decision per step from purely local
//! information: the walls on the runner's left, front and right. It
//! keeps its left hand on the wall, so on a maze whose walls form a
//! spanning structure it is guaranteed to reach the goal eventually.
//!
//! Decision order per step:
//! 1. left open -> turn left, step forward (`LF`)
//! 2. front open -> step forward (`F`)
//! 3. right open -> turn right, step forward (`RF`)
//! 4. otherwise -> step backward, orientation flips (`B`)
//!
//! Each step records the position *before* the move together with the
//! action taken. The explorer shares no state with the global
//! [`crate::pathfinding`] search; both consume the same read-only
//! [`WallGrid`].

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Cell, RunnerState, TurnDirection};
use crate::error::{Error, Result};
use crate::grid::WallGrid;

/// Action taken by the explorer in one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Turned left, then stepped forward
    LeftForward,
    /// Stepped forward
    Forward,
    /// Turned right, then stepped forward
    RightForward,
    /// Stepped backward (dead end; orientation flipped)
    Backward,
}

impl Action {
    /// Short label used in the step log
    pub fn label(self) -> &'static str {
        match self {
            Action::LeftForward => "LF",
            Action::Forward => "F",
            Action::RightForward => "RF",
            Action::Backward => "B",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the exploration log: the runner's position before the
/// move and the action it took there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub position: Cell,
    pub action: Action,
}

/// Explorer configuration.
#[derive(Clone, Debug, Default)]
pub struct ExplorerConfig {
    /// Abort with [`Error::StepLimitExceeded`] after this many steps.
    ///
    /// `None` reproduces the unbounded loop: on a connected,
    /// single-solution maze the explorer always terminates, but a
    /// malformed maze would run forever. Callers wanting bounded
    /// execution set a cap.
    pub max_steps: Option<usize>,
}

/// Left-hand-rule wall follower.
pub struct LocalExplorer<'a> {
    grid: &'a WallGrid,
    config: ExplorerConfig,
}

impl<'a> LocalExplorer<'a> {
    /// Create an explorer over the given maze
    pub fn new(grid: &'a WallGrid) -> Self {
        Self {
            grid,
            config: ExplorerConfig::default(),
        }
    }

    /// Create an explorer with an explicit configuration
    pub fn with_config(grid: &'a WallGrid, config: ExplorerConfig) -> Self {
        Self { grid, config }
    }

    /// Apply the left-hand rule once.
    ///
    /// Returns the new runner state and the action taken. Fails with
    /// [`Error::Stuck`] only when all four sides are walled, which a
    /// maze built from a spanning structure never produces.
    pub fn step(&self, runner: RunnerState) -> Result<(RunnerState, Action)> {
        let sides = runner.sense(self.grid);

        if !sides.left {
            let next = runner.turned(TurnDirection::Left).step_forward(self.grid)?;
            return Ok((next, Action::LeftForward));
        }

        if !sides.front {
            let next = runner.step_forward(self.grid)?;
            return Ok((next, Action::Forward));
        }

        if !sides.right {
            let next = runner.turned(TurnDirection::Right).step_forward(self.grid)?;
            return Ok((next, Action::RightForward));
        }

        // Dead end. step_backward itself trusts the rear to be open, so
        // verify that here and surface a boxed-in cell instead of moving
        // through a wall.
        let rear_blocked = self
            .grid
            .walls(runner.position)
            .side(runner.orientation.opposite());

        if rear_blocked {
            return Err(Error::Stuck {
                position: runner.position,
            });
        }

        Ok((runner.step_backward(), Action::Backward))
    }

    /// Run the explorer from `runner` until it reaches `goal`
    /// (`(width-1, height-1)` when unspecified), returning the step log.
    ///
    /// The loop is unbounded unless [`ExplorerConfig::max_steps`] is set;
    /// termination relies on the maze being connected and solvable from
    /// the given start.
    pub fn explore(
        &self,
        mut runner: RunnerState,
        goal: Option<Cell>,
    ) -> Result<Vec<TraceStep>> {
        let goal = goal.unwrap_or_else(|| self.grid.default_goal());
        debug!(
            "explore: start={} facing {} goal={}",
            runner.position, runner.orientation, goal
        );

        let mut log = Vec::new();

        while runner.position != goal {
            if let Some(limit) = self.config.max_steps {
                if log.len() >= limit {
                    debug!("explore: aborted after {} steps", log.len());
                    return Err(Error::StepLimitExceeded { limit });
                }
            }

            let before = runner.position;
            let (next, action) = self.step(runner)?;
            trace!("explore: {} {} -> {}", before, action, next.position);

            log.push(TraceStep {
                position: before,
                action,
            });
            runner = next;
        }

        debug!("explore: reached {} in {} steps", goal, log.len());
        Ok(log)
    }
}
