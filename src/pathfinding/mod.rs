//! Globally optimal cell-to-cell pathfinding.
//!
//! Two interchangeable strategies compute a shortest path under unit
//! edge cost over the adjacency implied by [`WallGrid::neighbors`]:
//!
//! - [`SearchStrategy::Bfs`]: unweighted breadth-first search
//! - [`SearchStrategy::AStar`]: A* with a Manhattan-distance heuristic
//!
//! The heuristic is admissible and consistent on a 4-connected unit-cost
//! grid, so both strategies always agree on the path *length*; the
//! particular path chosen among equal-length candidates may differ.
//! Unreachable goals are signalled by an empty path, never by an error.
//!
//! All search state (frontier, visited set, parent map) is scoped to one
//! invocation, so repeated and concurrent queries over a shared grid are
//! independent.

mod astar;
mod bfs;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::Cell;
use crate::grid::WallGrid;

/// Search algorithm selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// Unweighted breadth-first search
    Bfs,
    /// A* with Manhattan-distance heuristic
    #[default]
    AStar,
}

/// Result of a shortest-path query.
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Ordered cells from start to goal inclusive; empty when the goal
    /// is unreachable.
    pub path: Vec<Cell>,
    /// Number of cells taken off the frontier during the search
    pub nodes_expanded: usize,
}

impl PathResult {
    /// Was a path found?
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path (cells minus one; 0 when
    /// unreachable or start == goal)
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Shortest-path planner over one maze.
pub struct PathFinder<'a> {
    grid: &'a WallGrid,
    strategy: SearchStrategy,
}

impl<'a> PathFinder<'a> {
    /// Create a planner using the given strategy
    pub fn new(grid: &'a WallGrid, strategy: SearchStrategy) -> Self {
        Self { grid, strategy }
    }

    /// Create a planner with the default strategy (A*)
    pub fn with_defaults(grid: &'a WallGrid) -> Self {
        Self::new(grid, SearchStrategy::default())
    }

    /// Compute a shortest path.
    ///
    /// `start` defaults to `(0, 0)` and `goal` to
    /// `(width-1, height-1)`. The result path is empty when the goal is
    /// unreachable.
    pub fn find_path(&self, start: Option<Cell>, goal: Option<Cell>) -> PathResult {
        let start = start.unwrap_or_default();
        let goal = goal.unwrap_or_else(|| self.grid.default_goal());

        match self.strategy {
            SearchStrategy::Bfs => bfs::search(self.grid, start, goal),
            SearchStrategy::AStar => astar::search(self.grid, start, goal),
        }
    }
}

/// Walk the parent map backward from goal to start and reverse.
///
/// Shared by both strategies; assumes the goal was reached (the parent
/// chain from `goal` ends at `start`).
fn reconstruct_path(parent: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut node = goal;

    while node != start {
        path.push(node);
        node = parent[&node];
    }

    path.push(start);
    path.reverse();
    path
}
