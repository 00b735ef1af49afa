//! Path reconstruction: the predecessor walk.

use std::collections::HashMap;

use warren_core::{CellState, Coord, Maze};

use crate::node::Node;

/// Walk predecessor links from the terminal destination node back to the
/// origin, annotating every intermediate cell as [`CellState::Path`] and
/// counting the route.
///
/// The returned depth counts every node on the route, origin and
/// destination included. The origin cell keeps its `Origin` marking, the
/// destination keeps `Destination`.
///
/// Panics if a predecessor has no entry in the visited map: that means
/// the engine produced an inconsistent closed set, and truncating the
/// walk silently would hide the bug.
pub(crate) fn mark_path(
    maze: &mut Maze,
    visited: &HashMap<Coord, Node>,
    terminal: Node,
    origin: Coord,
) -> i32 {
    let mut depth = 1;
    let mut current = terminal;
    while current.parent != origin {
        maze.set_cell(current.parent, CellState::Path);
        current = match visited.get(&current.parent) {
            Some(node) => *node,
            None => panic!(
                "broken predecessor chain: no visited node at {}",
                current.parent
            ),
        };
        depth += 1;
    }
    // The origin closes the route.
    depth + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(pos: Coord, parent: Coord, g: f64) -> Node {
        Node {
            pos,
            parent,
            g,
            h: 0.0,
        }
    }

    #[test]
    fn marks_intermediates_and_counts_endpoints() {
        let mut maze = Maze::new(3, 3);
        maze.set_origin(Coord::new(0, 0));
        maze.set_destination(Coord::new(2, 2));

        let origin = Coord::new(0, 0);
        let mid = Coord::new(1, 1);
        let terminal = node(Coord::new(2, 2), mid, 2.0);
        let mut visited = HashMap::new();
        visited.insert(origin, node(origin, origin, 0.0));
        visited.insert(mid, node(mid, origin, 1.0));
        visited.insert(terminal.pos, terminal);

        let depth = mark_path(&mut maze, &visited, terminal, origin);
        assert_eq!(depth, 3);
        assert_eq!(maze.at(mid), CellState::Path);
        assert_eq!(maze.at(origin), CellState::Origin);
        assert_eq!(maze.at(Coord::new(2, 2)), CellState::Destination);
    }

    #[test]
    fn adjacent_endpoints_mark_nothing() {
        let mut maze = Maze::new(3, 3);
        maze.set_origin(Coord::new(0, 0));
        maze.set_destination(Coord::new(0, 1));

        let origin = Coord::new(0, 0);
        let terminal = node(Coord::new(0, 1), origin, 1.0);
        let visited = HashMap::from([(terminal.pos, terminal)]);

        let depth = mark_path(&mut maze, &visited, terminal, origin);
        assert_eq!(depth, 2);
        assert_eq!(maze.count(CellState::Path), 0);
    }

    #[test]
    #[should_panic(expected = "broken predecessor chain")]
    fn missing_predecessor_fails_fast() {
        let mut maze = Maze::new(3, 3);
        let origin = Coord::new(0, 0);
        let terminal = node(Coord::new(2, 2), Coord::new(1, 1), 2.0);
        let visited = HashMap::from([(terminal.pos, terminal)]);
        mark_path(&mut maze, &visited, terminal, origin);
    }
}
