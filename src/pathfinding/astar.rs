//! A* shortest path with a Manhattan-distance heuristic.

use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use super::{reconstruct_path, PathResult};
use crate::core::Cell;
use crate::grid::WallGrid;

/// A node in the A* frontier
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct AStarNode {
    cell: Cell,
    /// g + h at push time
    f_cost: i32,
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; break f ties by cell
        // coordinates only to keep the ordering total.
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| (other.cell.x, other.cell.y).cmp(&(self.cell.x, self.cell.y)))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search from `start` to `goal`.
///
/// The frontier is ordered by `f = g + h` where `g` is the exact step
/// count from the start and `h` the Manhattan distance to the goal.
/// With unit edge costs on a 4-connected grid the heuristic is
/// admissible and consistent, so a settled cell never needs reopening
/// and the first dequeue of the goal yields an optimal path — the same
/// length BFS finds.
pub(super) fn search(grid: &WallGrid, start: Cell, goal: Cell) -> PathResult {
    trace!("[astar] search: start={start} goal={goal}");

    let mut frontier = BinaryHeap::new();
    let mut g_cost: HashMap<Cell, i32> = HashMap::new();
    let mut parent: HashMap<Cell, Cell> = HashMap::new();

    frontier.push(AStarNode {
        cell: start,
        f_cost: start.manhattan_distance(&goal),
    });
    g_cost.insert(start, 0);

    let mut nodes_expanded = 0;

    while let Some(current) = frontier.pop() {
        nodes_expanded += 1;

        if current.cell == goal {
            let path = reconstruct_path(&parent, start, goal);
            trace!(
                "[astar] found: {} cells, {} nodes expanded",
                path.len(),
                nodes_expanded
            );
            return PathResult {
                path,
                nodes_expanded,
            };
        }

        let current_g = g_cost[&current.cell];

        for neighbor in grid.neighbors(current.cell) {
            let tentative_g = current_g + 1;

            // Relax when unseen or reached via a strictly smaller g.
            let known = g_cost.get(&neighbor).copied().unwrap_or(i32::MAX);
            let improved = tentative_g < known;

            if improved {
                g_cost.insert(neighbor, tentative_g);
                parent.insert(neighbor, current.cell);
                frontier.push(AStarNode {
                    cell: neighbor,
                    f_cost: tentative_g + neighbor.manhattan_distance(&goal),
                });
            }
        }
    }

    debug!("[astar] no path from {start} to {goal} ({nodes_expanded} nodes expanded)");
    PathResult {
        path: Vec::new(),
        nodes_expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_grid_optimal_length() {
        let grid = WallGrid::new(5, 5);
        let result = search(&grid, Cell::new(0, 0), Cell::new(4, 4));

        assert_eq!(result.path.len(), 9);
        assert_eq!(result.path[0], Cell::new(0, 0));
        assert_eq!(result.path[8], Cell::new(4, 4));
    }

    #[test]
    fn test_heuristic_prunes_expansion() {
        // On an open grid the heuristic steers straight at the goal, so
        // A* expands far fewer cells than the exhaustive BFS wavefront.
        let grid = WallGrid::new(10, 10);
        let astar = search(&grid, Cell::new(0, 0), Cell::new(9, 9));
        let bfs = super::super::bfs::search(&grid, Cell::new(0, 0), Cell::new(9, 9));

        assert_eq!(astar.path.len(), bfs.path.len());
        assert!(astar.nodes_expanded <= bfs.nodes_expanded);
    }

    #[test]
    fn test_unreachable() {
        let mut grid = WallGrid::new(2, 2);
        grid.add_vertical_wall(0, 1);
        grid.add_vertical_wall(1, 1);

        let result = search(&grid, Cell::new(0, 0), Cell::new(1, 1));
        assert!(result.path.is_empty());
    }

    #[test]
    fn test_path_respects_walls() {
        let mut grid = WallGrid::new(4, 4);
        grid.add_horizontal_wall(0, 2);
        grid.add_horizontal_wall(1, 2);
        grid.add_horizontal_wall(2, 2);

        let result = search(&grid, Cell::new(0, 0), Cell::new(0, 3));
        assert!(result.found());
        for pair in result.path.windows(2) {
            assert!(grid.neighbors(pair[0]).contains(&pair[1]));
        }
    }
}
