//! End-to-end maze scenarios: ASCII layout in, exploration log and
//! shortest path out.

use std::fs;

use vyuha::io::{parse_maze, read_maze, write_exploration_log, write_statistics};
use vyuha::{
    Action, Cell, LocalExplorer, Orientation, PathFinder, RunnerState, SearchStrategy, WallGrid,
};

/// 5x5 maze with a single winding corridor from (0,0) to (4,4).
fn serpentine() -> WallGrid {
    let mut maze = WallGrid::new(5, 5);
    // Walls above rows 0..4 with alternating gaps force an S-shaped
    // sweep across every row.
    for line in 1..5 {
        let gap = if line % 2 == 1 { 4 } else { 0 };
        for x in 0..5 {
            if x != gap {
                maze.add_horizontal_wall(x, line);
            }
        }
    }
    maze
}

#[test]
fn serpentine_explore_and_search_agree() {
    let maze = serpentine();

    let explorer = LocalExplorer::new(&maze);
    let start = RunnerState::new(Cell::new(0, 0), Orientation::North);
    let log = explorer.explore(start, None).expect("maze is solvable");

    // A single-corridor maze: both searches must find the same unique
    // route, and the explorer cannot do better than it.
    let bfs = PathFinder::new(&maze, SearchStrategy::Bfs).find_path(None, None);
    let astar = PathFinder::new(&maze, SearchStrategy::AStar).find_path(None, None);

    assert_eq!(bfs.path, astar.path);
    assert_eq!(bfs.path.len(), 25); // sweeps all 25 cells
    assert!(log.len() >= bfs.path.len() - 1);
}

#[test]
fn explorer_log_replays_to_goal() {
    // Replaying the logged actions from the start must land on the goal.
    let maze = serpentine();
    let explorer = LocalExplorer::new(&maze);
    let mut runner = RunnerState::new(Cell::new(0, 0), Orientation::North);

    let log = explorer.explore(runner, None).unwrap();

    for entry in &log {
        assert_eq!(entry.position, runner.position);
        let (next, action) = explorer.step(runner).unwrap();
        assert_eq!(action, entry.action);
        runner = next;
    }

    assert_eq!(runner.position, maze.default_goal());
}

#[test]
fn corridor_log_is_all_forward_with_manhattan_length() {
    let text = "#########\n\
                #       #\n\
                #########\n";
    let maze = parse_maze(text).unwrap();

    let explorer = LocalExplorer::new(&maze);
    let start = RunnerState::new(Cell::new(0, 0), Orientation::East);
    let log = explorer.explore(start, None).unwrap();

    let goal = maze.default_goal();
    assert_eq!(log.len(), Cell::new(0, 0).manhattan_distance(&goal) as usize);
    assert!(log.iter().all(|s| s.action == Action::Forward));
}

#[test]
fn parsed_maze_round_trips_and_searches() {
    // 3x3 maze whose only route from (0,0) to (2,2) climbs the west
    // side and crosses along the top row.
    let text = "#######\n\
                #     #\n\
                # ### #\n\
                # # # #\n\
                # # # #\n\
                # #   #\n\
                #######\n";
    let maze = parse_maze(text).unwrap();
    assert_eq!(maze.to_ascii(), text);

    let bfs = PathFinder::new(&maze, SearchStrategy::Bfs).find_path(None, None);
    let astar = PathFinder::new(&maze, SearchStrategy::AStar).find_path(None, None);

    assert!(bfs.found());
    assert_eq!(bfs.path.len(), astar.path.len());

    for pair in bfs.path.windows(2) {
        assert!(maze.neighbors(pair[0]).contains(&pair[1]));
    }
}

#[test]
fn sealed_column_is_unreachable_for_both_strategies() {
    let text = "#######\n\
                # #   #\n\
                # # # #\n\
                # # # #\n\
                # # # #\n\
                # #   #\n\
                #######\n";
    let maze = parse_maze(text).unwrap();

    for strategy in [SearchStrategy::Bfs, SearchStrategy::AStar] {
        let result = PathFinder::new(&maze, strategy).find_path(None, None);
        assert!(!result.found(), "{strategy:?} should find no path");
    }
}

#[test]
fn full_pipeline_writes_reports() {
    let dir = tempfile::tempdir().unwrap();
    let maze_path = dir.path().join("maze1.mz");
    let log_path = dir.path().join("exploration.csv");
    let stats_path = dir.path().join("statistics.txt");

    fs::write(&maze_path, "#####\n#   #\n#####\n").unwrap();

    let maze = read_maze(&maze_path).unwrap();
    let explorer = LocalExplorer::new(&maze);
    let log = explorer.explore(RunnerState::at_origin(), None).unwrap();

    let result = PathFinder::with_defaults(&maze).find_path(None, None);

    write_exploration_log(&log_path, &log).unwrap();
    write_statistics(&stats_path, "maze1.mz", log.len(), &result.path).unwrap();

    let csv = fs::read_to_string(&log_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Step,x-coordinate,y-coordinate,Actions"));
    assert_eq!(lines.count(), log.len());

    let stats = fs::read_to_string(&stats_path).unwrap();
    let lines: Vec<&str> = stats.lines().collect();
    assert_eq!(lines[0], "maze1.mz");
    assert_eq!(lines[4], "2"); // 1x2 corridor: two-cell path
}
