//! Step legality between adjacent cells.

use crate::geom::Coord;
use crate::maze::Maze;

impl Maze {
    /// Whether a single step from `from` to `to` is legal.
    ///
    /// Both endpoints must be free-and-valid and at most one row and one
    /// column apart. A diagonal step additionally requires the two corner
    /// cells, `(from.row, to.col)` and `(to.row, from.col)`, to be
    /// free-and-valid, so the path never cuts between a diagonal pair of
    /// obstacles. For orthogonal steps the corner cells coincide with the
    /// endpoints and the check is trivially satisfied.
    pub fn is_legal_move(&self, from: Coord, to: Coord) -> bool {
        if !self.is_free_and_valid(from) || !self.is_free_and_valid(to) {
            return false;
        }

        let delta = (to - from).abs();
        if delta.row > 1 || delta.col > 1 {
            return false;
        }

        self.is_free_and_valid(Coord::new(from.row, to.col))
            && self.is_free_and_valid(Coord::new(to.row, from.col))
    }
}
