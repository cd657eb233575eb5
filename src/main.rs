//! Maze runner command line.
//!
//! Reads an ASCII maze file, explores it with the left-hand-rule
//! runner, computes the shortest path, and writes the step log and a
//! statistics report.
//!
//! ```bash
//! # Explore with defaults (start (0,0), goal at the far corner, A*)
//! vyuha maze1.mz
//!
//! # Explicit endpoints and BFS
//! vyuha maze1.mz --starting 0,2 --goal 4,4 --strategy bfs
//! ```

use clap::{Parser, ValueEnum};
use log::info;

use vyuha::io::{read_maze, write_exploration_log, write_statistics};
use vyuha::{
    Cell, Error, ExplorerConfig, LocalExplorer, Orientation, PathFinder, Result, RunnerState,
    SearchStrategy, WallGrid,
};

/// Search strategy selection on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Breadth-first search
    Bfs,
    /// A* with Manhattan heuristic
    Astar,
}

impl From<Strategy> for SearchStrategy {
    fn from(value: Strategy) -> Self {
        match value {
            Strategy::Bfs => SearchStrategy::Bfs,
            Strategy::Astar => SearchStrategy::AStar,
        }
    }
}

/// Maze exploration and shortest-path runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze filename, e.g. maze1.mz
    maze: String,

    /// Start position "x,y" (default 0,0)
    #[arg(long)]
    starting: Option<String>,

    /// Goal position "x,y" (default far corner)
    #[arg(long)]
    goal: Option<String>,

    /// Shortest-path algorithm
    #[arg(long, value_enum, default_value = "astar")]
    strategy: Strategy,

    /// Exploration step-log output path
    #[arg(long, default_value = "exploration.csv")]
    log: String,

    /// Statistics report output path
    #[arg(long, default_value = "statistics.txt")]
    stats: String,

    /// Abort exploration after this many steps (default: unbounded)
    #[arg(long)]
    max_steps: Option<usize>,
}

/// Parse a coordinate argument in the form "x,y"
fn parse_coord(s: &str) -> Result<Cell> {
    let mut parts = s.splitn(2, ',');

    let x = parts.next().map(str::trim).unwrap_or_default();
    let y = parts.next().map(str::trim).unwrap_or_default();

    match (x.parse(), y.parse()) {
        (Ok(x), Ok(y)) => Ok(Cell::new(x, y)),
        _ => Err(Error::Coordinate(s.to_string())),
    }
}

/// Parse and bound-check an optional coordinate argument
fn resolve_position(arg: Option<&str>, maze: &WallGrid) -> Result<Option<Cell>> {
    let Some(s) = arg else {
        return Ok(None);
    };

    let cell = parse_coord(s)?;
    if !maze.contains(cell) {
        return Err(Error::OutOfBounds {
            position: cell,
            width: maze.width(),
            height: maze.height(),
        });
    }

    Ok(Some(cell))
}

fn run(args: &Args) -> Result<()> {
    let maze = read_maze(&args.maze)?;
    info!(
        "loaded {}: {}x{} cells",
        args.maze,
        maze.width(),
        maze.height()
    );

    let start = resolve_position(args.starting.as_deref(), &maze)?;
    let goal = resolve_position(args.goal.as_deref(), &maze)?;

    let runner = RunnerState::new(start.unwrap_or_default(), Orientation::North);
    let explorer = LocalExplorer::with_config(
        &maze,
        ExplorerConfig {
            max_steps: args.max_steps,
        },
    );

    let log = explorer.explore(runner, goal)?;
    info!("exploration finished in {} steps", log.len());
    write_exploration_log(&args.log, &log)?;

    let result = PathFinder::new(&maze, args.strategy.into()).find_path(start, goal);
    info!(
        "shortest path: {} cells ({} nodes expanded)",
        result.path.len(),
        result.nodes_expanded
    );
    write_statistics(&args.stats, &args.maze, log.len(), &result.path)?;

    let rendered: Vec<String> = result.path.iter().map(Cell::to_string).collect();
    println!("Shortest path: [{}]", rendered.join(", "));

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
