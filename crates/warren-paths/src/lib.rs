//! **warren-paths** — A* shortest-path search over maze grids.
//!
//! The engine runs eight-directional A* on a [`warren_core::Maze`]:
//!
//! - [`PathFinder`] owns the frontier (open) and visited (closed)
//!   collections and reuses their storage across searches.
//! - [`compute_path`] is the one-shot convenience entry point.
//! - [`SearchReport`] carries path length, route depth and the final set
//!   sizes, with sentinel values distinguishing "could not attempt" from
//!   "no path exists".
//!
//! Step costs are `1` for orthogonal and `√2` for diagonal moves; the
//! heuristic is [`octile`] distance, which is exact on obstacle-free
//! ground and admissible everywhere. Equal-cost frontier nodes pop most
//! recently inserted first; that stable tie-break is part of the engine
//! contract, and the annotated route depends on it.

mod astar;
mod distance;
mod frontier;
mod node;
mod reconstruct;

pub use astar::{PathFinder, SearchReport, compute_path};
pub use distance::{chebyshev, manhattan, octile};
pub use node::Node;
