//! Breadth-first shortest path.

use log::{debug, trace};
use std::collections::{HashMap, HashSet, VecDeque};

use super::{reconstruct_path, PathResult};
use crate::core::Cell;
use crate::grid::WallGrid;

/// Unweighted breadth-first search from `start` to `goal`.
///
/// A FIFO frontier explores cells in nondecreasing distance order, so
/// the first time the goal is dequeued its recorded parent chain is a
/// shortest path. The visited set prevents re-enqueueing; the parent map
/// records the first-discovered predecessor of each cell.
pub(super) fn search(grid: &WallGrid, start: Cell, goal: Cell) -> PathResult {
    trace!("[bfs] search: start={start} goal={goal}");

    let mut frontier = VecDeque::new();
    let mut visited: HashSet<Cell> = HashSet::new();
    let mut parent: HashMap<Cell, Cell> = HashMap::new();

    frontier.push_back(start);
    visited.insert(start);

    let mut nodes_expanded = 0;

    while let Some(current) = frontier.pop_front() {
        nodes_expanded += 1;

        if current == goal {
            let path = reconstruct_path(&parent, start, goal);
            trace!(
                "[bfs] found: {} cells, {} nodes expanded",
                path.len(),
                nodes_expanded
            );
            return PathResult {
                path,
                nodes_expanded,
            };
        }

        for neighbor in grid.neighbors(current) {
            if visited.insert(neighbor) {
                parent.insert(neighbor, current);
                frontier.push_back(neighbor);
            }
        }
    }

    debug!("[bfs] no path from {start} to {goal} ({nodes_expanded} nodes expanded)");
    PathResult {
        path: Vec::new(),
        nodes_expanded,
    }
}
