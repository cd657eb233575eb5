//! # Vyuha: Grid Maze Model with Wall-Following Runner and Path Search
//!
//! A library for modelling rectangular grid mazes with internal walls,
//! simulating a wall-following runner that explores them with a local
//! decision rule, and computing globally optimal paths between cells.
//!
//! ## Quick Start
//!
//! ```rust
//! use vyuha::{LocalExplorer, PathFinder, RunnerState, SearchStrategy, WallGrid};
//!
//! // A 3x3 maze with one internal wall.
//! let mut maze = WallGrid::new(3, 3);
//! maze.add_vertical_wall(0, 1);
//!
//! // Explore locally with the left-hand rule...
//! let explorer = LocalExplorer::new(&maze);
//! let log = explorer.explore(RunnerState::at_origin(), None).unwrap();
//! println!("explored in {} steps", log.len());
//!
//! // ...and plan globally with A* (or BFS).
//! let result = PathFinder::new(&maze, SearchStrategy::AStar).find_path(None, None);
//! println!("shortest path: {} cells", result.path.len());
//! ```
//!
//! ## Coordinate Frame
//!
//! Cell `(0, 0)` is the south-west corner: x grows eastward, y grows
//! northward. The conventional start is `(0, 0)` facing north and the
//! conventional goal is `(width-1, height-1)`.
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: fundamental types ([`Cell`], [`Orientation`],
//!   [`RunnerState`])
//! - [`grid`]: the [`WallGrid`] maze model and adjacency queries
//! - [`exploration`]: the left-hand-rule [`LocalExplorer`]
//! - [`pathfinding`]: shortest-path search ([`SearchStrategy::Bfs`] and
//!   [`SearchStrategy::AStar`])
//! - [`io`]: ASCII maze reading, CSV step log, statistics report
//!
//! ## Data Flow
//!
//! ```text
//!   ┌────────────┐   parse    ┌──────────┐
//!   │ ASCII maze ├───────────►│ WallGrid │  (read-only after build)
//!   └────────────┘            └────┬─────┘
//!                     ┌────────────┴────────────┐
//!                     ▼                         ▼
//!            ┌────────────────┐       ┌─────────────────┐
//!            │ LocalExplorer  │       │   PathFinder    │
//!            │ (left-hand     │       │  (BFS | A*)     │
//!            │  rule runner)  │       │                 │
//!            └───────┬────────┘       └────────┬────────┘
//!                    ▼                         ▼
//!              step log (CSV)          shortest path + stats
//! ```
//!
//! The explorer and the path finder are independent consumers of the
//! same immutable grid; they share no mutable state, so independent
//! queries may run concurrently without coordination.

pub mod core;
pub mod error;
pub mod exploration;
pub mod grid;
pub mod io;
pub mod pathfinding;

// Re-export main types at crate root
pub use crate::core::{Cell, Orientation, RelativeWalls, RunnerState, TurnDirection};
pub use crate::error::{Error, Result};
pub use crate::exploration::{Action, ExplorerConfig, LocalExplorer, TraceStep};
pub use crate::grid::{WallGrid, WallSides};
pub use crate::pathfinding::{PathFinder, PathResult, SearchStrategy};
