//! The maze grid model.
//!
//! [`Maze`] owns a dense row-major array of [`CellState`] values together
//! with the current origin/destination endpoints. It answers validity
//! queries for coordinates and moves, and manages the lifecycle of the
//! transient path annotation.

use crate::cell::CellState;
use crate::geom::Coord;

/// A 2D maze of free/obstacle cells with optional origin and destination.
///
/// Invariant: `cells.len() == rows * cols`. The origin and destination,
/// when set, reference in-bounds, non-obstacle cells at the time they
/// were set.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    rows: i32,
    cols: i32,
    cells: Vec<CellState>,
    origin: Option<Coord>,
    destination: Option<Coord>,
}

impl Maze {
    /// Create a maze with the given dimensions, all cells free.
    ///
    /// Non-positive dimensions give the empty maze.
    pub fn new(rows: i32, cols: i32) -> Self {
        let mut maze = Self::default();
        maze.resize(rows, cols);
        maze
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether the maze has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The current origin, if set.
    #[inline]
    pub fn origin(&self) -> Option<Coord> {
        self.origin
    }

    /// The current destination, if set.
    #[inline]
    pub fn destination(&self) -> Option<Coord> {
        self.destination
    }

    /// Clear and reallocate to the given dimensions, all cells free.
    ///
    /// The origin and destination become unset. Non-positive dimensions
    /// give the empty maze.
    pub fn resize(&mut self, rows: i32, cols: i32) {
        self.clear();
        if rows <= 0 || cols <= 0 {
            return;
        }
        self.rows = rows;
        self.cols = cols;
        self.cells = vec![CellState::Free; (rows * cols) as usize];
    }

    /// Empty the maze entirely: zero dimensions, endpoints unset.
    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.cells.clear();
        self.origin = None;
        self.destination = None;
    }

    /// Flat index of a coordinate.
    ///
    /// Panics if the coordinate is out of bounds; callers pre-validate
    /// with [`is_valid_coord`](Self::is_valid_coord).
    #[inline]
    fn index_of(&self, c: Coord) -> usize {
        assert!(
            self.is_valid_coord(c),
            "coordinate {c} out of bounds for a {}x{} maze",
            self.rows,
            self.cols
        );
        (c.row * self.cols + c.col) as usize
    }

    /// State of the cell at `c`.
    ///
    /// Panics if `c` is out of bounds; callers pre-validate with
    /// [`is_valid_coord`](Self::is_valid_coord).
    #[inline]
    pub fn at(&self, c: Coord) -> CellState {
        self.cells[self.index_of(c)]
    }

    /// Set the state of the cell at `c`.
    ///
    /// Panics if `c` is out of bounds; callers pre-validate with
    /// [`is_valid_coord`](Self::is_valid_coord).
    #[inline]
    pub fn set_cell(&mut self, c: Coord, state: CellState) {
        let idx = self.index_of(c);
        self.cells[idx] = state;
    }

    /// Whether both components of `c` are within `[0, dimension)`.
    #[inline]
    pub fn is_valid_coord(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Whether `c` is in bounds and not an obstacle.
    ///
    /// Origin, destination and path cells all count as free.
    #[inline]
    pub fn is_free_and_valid(&self, c: Coord) -> bool {
        self.is_valid_coord(c) && self.at(c).is_free()
    }

    /// Whether origin and destination are both set and still free-and-valid.
    ///
    /// Direct cell edits may have turned an endpoint into an obstacle
    /// since it was set, so the cells are re-checked here.
    pub fn origin_and_destination_set(&self) -> bool {
        matches!(self.origin, Some(c) if self.is_free_and_valid(c))
            && matches!(self.destination, Some(c) if self.is_free_and_valid(c))
    }

    /// Fix the origin of the path to be searched.
    ///
    /// Rejects (returns `false`, changing nothing) unless `c` is
    /// free-and-valid. Re-setting the current origin is a no-op success.
    /// Otherwise any previous path annotation is cleared and the previous
    /// origin cell reverts to free.
    pub fn set_origin(&mut self, c: Coord) -> bool {
        if !self.is_free_and_valid(c) {
            return false;
        }
        if self.origin == Some(c) {
            return true;
        }

        self.clear_path_annotations();
        if let Some(prev) = self.origin {
            self.set_cell(prev, CellState::Free);
        }
        self.origin = Some(c);
        self.set_cell(c, CellState::Origin);
        true
    }

    /// Fix the destination of the path to be searched.
    ///
    /// Same contract as [`set_origin`](Self::set_origin).
    pub fn set_destination(&mut self, c: Coord) -> bool {
        if !self.is_free_and_valid(c) {
            return false;
        }
        if self.destination == Some(c) {
            return true;
        }

        self.clear_path_annotations();
        if let Some(prev) = self.destination {
            self.set_cell(prev, CellState::Free);
        }
        self.destination = Some(c);
        self.set_cell(c, CellState::Destination);
        true
    }

    /// Revert every `Path` cell to `Free`.
    pub fn clear_path_annotations(&mut self) {
        for cell in self.cells.iter_mut() {
            if *cell == CellState::Path {
                *cell = CellState::Free;
            }
        }
    }

    /// Count the cells in a given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }
}
