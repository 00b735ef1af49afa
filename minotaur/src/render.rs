//! Console rendering of a maze.

use std::fmt::Write as _;

use warren_core::{Coord, Maze};

/// Render the maze as a bordered table with two-digit row and column
/// headers, one two-character glyph per cell.
pub fn render(maze: &Maze) -> String {
    if maze.is_empty() {
        return "+------------+\n| EMPTY MAZE |\n+------------+\n".to_string();
    }

    let mut out = String::new();

    out.push_str("    ");
    for col in 0..maze.cols() {
        let _ = write!(out, "{col:02} ");
    }
    out.push('\n');

    let mut rule = String::from("   +");
    for _ in 0..maze.cols() {
        rule.push_str("--+");
    }
    rule.push('\n');

    out.push_str(&rule);
    for row in 0..maze.rows() {
        let _ = write!(out, "{row:02} |");
        for col in 0..maze.cols() {
            out.push_str(maze.at(Coord::new(row, col)).glyph());
            out.push('|');
        }
        out.push('\n');
        out.push_str(&rule);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_core::CellState;

    #[test]
    fn empty_maze_renders_placeholder_box() {
        let out = render(&Maze::default());
        assert!(out.contains("EMPTY MAZE"));
    }

    #[test]
    fn renders_glyphs_and_borders() {
        let mut maze = Maze::new(2, 3);
        maze.set_cell(Coord::new(0, 1), CellState::Obstacle);
        maze.set_origin(Coord::new(0, 0));
        maze.set_destination(Coord::new(1, 2));

        let out = render(&maze);
        // Header + 2 rows, each with a rule line above and below.
        assert_eq!(out.lines().count(), 1 + 2 * 2 + 1);
        assert!(out.contains("00 |Or|##|  |"));
        assert!(out.contains("01 |  |  |De|"));
        assert!(out.contains("   +--+--+--+"));
    }

    #[test]
    fn path_cells_render_as_dots() {
        let mut maze = Maze::new(5, 5);
        maze.set_cell(Coord::new(2, 2), CellState::Path);
        assert!(render(&maze).contains(".."));
    }
}
