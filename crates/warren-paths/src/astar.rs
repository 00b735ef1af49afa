//! The A* search driver.

use std::collections::HashMap;

use log::debug;

use warren_core::{Coord, Maze};

use crate::distance::octile;
use crate::frontier::Frontier;
use crate::node::Node;
use crate::reconstruct;

/// The eight step directions, in the row-major order successors are
/// generated. The order matters: together with the frontier's
/// most-recent-first tie-break it fixes which of several equal-cost
/// routes gets annotated.
const DIRECTIONS: [Coord; 8] = [
    Coord::new(-1, -1),
    Coord::new(-1, 0),
    Coord::new(-1, 1),
    Coord::new(0, -1),
    Coord::new(0, 1),
    Coord::new(1, -1),
    Coord::new(1, 0),
    Coord::new(1, 1),
];

/// Result of a [`PathFinder::compute_path`] call.
///
/// All four fields at `-1` mean the search could not be attempted (empty
/// maze or endpoints not set). `length`/`depth` at `-1` with non-negative
/// set sizes mean the search ran to exhaustion without reaching the
/// destination.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// Accumulated cost of the found path, or `-1.0`.
    pub length: f64,
    /// Number of nodes on the route, endpoints included, or `-1`.
    pub depth: i32,
    /// Frontier (open set) size when the search ended.
    pub frontier_size: i32,
    /// Visited (closed set) size when the search ended.
    pub visited_size: i32,
}

impl SearchReport {
    /// The report for a search that could not be attempted.
    pub const fn not_attempted() -> Self {
        Self {
            length: -1.0,
            depth: -1,
            frontier_size: -1,
            visited_size: -1,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        self.length >= 0.0
    }

    /// Whether the search ran at all (found a path or proved there is
    /// none), as opposed to being rejected up front.
    pub fn was_attempted(&self) -> bool {
        self.visited_size >= 0
    }
}

/// A* shortest-path engine over a [`Maze`].
///
/// Owns the frontier and visited collections and reuses their storage
/// across searches; the sets themselves are cleared at the start of every
/// invocation and carry no meaning beyond it. Searches are synchronous
/// and run to completion. Not safe for concurrent searches against one
/// maze; clone the maze per concurrent search instead.
#[derive(Default)]
pub struct PathFinder {
    frontier: Frontier,
    visited: HashMap<Coord, Node>,
}

impl PathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search for the shortest path between the maze's origin and
    /// destination, annotating the maze with the route on success.
    ///
    /// Any previous path annotation is cleared first. See
    /// [`SearchReport`] for the result conventions.
    pub fn compute_path(&mut self, maze: &mut Maze) -> SearchReport {
        if maze.is_empty() || !maze.origin_and_destination_set() {
            return SearchReport::not_attempted();
        }
        let (Some(origin), Some(destination)) = (maze.origin(), maze.destination()) else {
            return SearchReport::not_attempted();
        };

        maze.clear_path_annotations();

        if origin == destination {
            return SearchReport {
                length: 0.0,
                depth: 0,
                frontier_size: 0,
                visited_size: 0,
            };
        }

        self.frontier.clear();
        self.visited.clear();
        self.frontier.insert(Node {
            pos: origin,
            parent: origin,
            g: 0.0,
            h: octile(origin, destination),
        });

        let terminal = loop {
            let Some(current) = self.frontier.pop() else {
                break None;
            };
            self.visited.insert(current.pos, current);
            if current.pos == destination {
                break Some(current);
            }
            self.expand(maze, current, destination);
        };

        let frontier_size = self.frontier.len() as i32;
        let visited_size = self.visited.len() as i32;

        match terminal {
            Some(node) => {
                let depth = reconstruct::mark_path(maze, &self.visited, node, origin);
                debug!(
                    "path {origin} -> {destination}: length {:.3}, depth {depth}, \
                     {frontier_size} open / {visited_size} closed",
                    node.g
                );
                SearchReport {
                    length: node.g,
                    depth,
                    frontier_size,
                    visited_size,
                }
            }
            None => {
                debug!(
                    "no path {origin} -> {destination}: frontier exhausted \
                     after {visited_size} expansions"
                );
                SearchReport {
                    length: -1.0,
                    depth: -1,
                    frontier_size,
                    visited_size,
                }
            }
        }
    }

    /// Generate the successors of `current` into the frontier.
    fn expand(&mut self, maze: &Maze, current: Node, destination: Coord) {
        for dir in DIRECTIONS {
            let next = current.pos + dir;
            if !maze.is_legal_move(current.pos, next) {
                continue;
            }

            let candidate = Node {
                pos: next,
                parent: current.pos,
                g: current.g + dir.norm(),
                h: octile(next, destination),
            };
            let f = candidate.total_cost();

            if let Some(closed) = self.visited.get(&next) {
                if closed.total_cost() <= f {
                    continue;
                }
                // The candidate beats an already-expanded node: re-open
                // the position under the new, cheaper node.
                self.visited.remove(&next);
                self.frontier.insert(candidate);
            } else if let Some(open) = self.frontier.get(next) {
                if open.total_cost() <= f {
                    continue;
                }
                // Replaces the costlier pending node.
                self.frontier.insert(candidate);
            } else {
                self.frontier.insert(candidate);
            }
        }
    }
}

/// One-shot convenience over [`PathFinder::compute_path`].
pub fn compute_path(maze: &mut Maze) -> SearchReport {
    PathFinder::new().compute_path(maze)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn report_round_trip() {
        let report = SearchReport {
            length: 2.5,
            depth: 3,
            frontier_size: 6,
            visited_size: 3,
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: SearchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
