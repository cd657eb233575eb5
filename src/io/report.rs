//! Exploration log and statistics writers.

use std::fs;
use std::path::Path;

use crate::core::Cell;
use crate::error::Result;
use crate::exploration::TraceStep;

/// Write the exploration log as a CSV file.
///
/// One row per step, numbered from 1, with the position *before* each
/// move and the action label:
///
/// ```text
/// Step,x-coordinate,y-coordinate,Actions
/// 1,0,0,F
/// 2,0,1,RF
/// ```
pub fn write_exploration_log<P: AsRef<Path>>(path: P, log: &[TraceStep]) -> Result<()> {
    let mut out = String::from("Step,x-coordinate,y-coordinate,Actions\n");

    for (step, entry) in log.iter().enumerate() {
        out.push_str(&format!(
            "{},{},{},{}\n",
            step + 1,
            entry.position.x,
            entry.position.y,
            entry.action
        ));
    }

    fs::write(path, out)?;
    Ok(())
}

/// Write the summary statistics report.
///
/// Five lines: maze name, score (`steps/4 + path length`), exploration
/// step count, the shortest path as `[(x, y), ...]`, and its length.
pub fn write_statistics<P: AsRef<Path>>(
    path: P,
    maze_name: &str,
    exploration_steps: usize,
    shortest_path: &[Cell],
) -> Result<()> {
    let path_length = shortest_path.len();
    let score = exploration_steps as f64 / 4.0 + path_length as f64;

    let out = format!(
        "{maze_name}\n{score}\n{exploration_steps}\n{}\n{path_length}\n",
        format_path(shortest_path)
    );

    fs::write(path, out)?;
    Ok(())
}

/// Render a cell sequence as `[(0, 0), (1, 0), ...]`
fn format_path(path: &[Cell]) -> String {
    let cells: Vec<String> = path.iter().map(Cell::to_string).collect();
    format!("[{}]", cells.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exploration::Action;

    fn sample_log() -> Vec<TraceStep> {
        vec![
            TraceStep {
                position: Cell::new(0, 0),
                action: Action::Forward,
            },
            TraceStep {
                position: Cell::new(0, 1),
                action: Action::RightForward,
            },
        ]
    }

    #[test]
    fn test_exploration_log_format() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("exploration.csv");

        write_exploration_log(&file, &sample_log()).unwrap();

        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(
            content,
            "Step,x-coordinate,y-coordinate,Actions\n1,0,0,F\n2,0,1,RF\n"
        );
    }

    #[test]
    fn test_statistics_format() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("statistics.txt");

        let path = vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)];
        write_statistics(&file, "maze1.mz", 10, &path).unwrap();

        let content = fs::read_to_string(&file).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "maze1.mz");
        assert_eq!(lines[1], "5.5"); // 10/4 + 3
        assert_eq!(lines[2], "10");
        assert_eq!(lines[3], "[(0, 0), (1, 0), (1, 1)]");
        assert_eq!(lines[4], "3");
    }

    #[test]
    fn test_statistics_empty_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("statistics.txt");

        write_statistics(&file, "blocked.mz", 4, &[]).unwrap();

        let content = fs::read_to_string(&file).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[1], "1"); // 4/4 + 0
        assert_eq!(lines[3], "[]");
        assert_eq!(lines[4], "0");
    }
}
