//! The persisted maze text format.
//!
//! A maze file is whitespace-separated tokens: the literal header
//! `LABIRINTO`, the number of rows, the number of columns, then
//! rows × cols integers in row-major order where `0` is an obstacle and
//! any nonzero value is free. Parsing is all-or-nothing: a bad header,
//! out-of-range dimensions or a short/malformed body reject the whole
//! input and no maze is produced.

use thiserror::Error;

use crate::cell::CellState;
use crate::geom::Coord;
use crate::maze::Maze;

/// Header token identifying a maze file.
pub const HEADER: &str = "LABIRINTO";

/// Smallest accepted dimension, both axes.
pub const MIN_DIM: i32 = 5;
/// Largest accepted dimension, both axes.
pub const MAX_DIM: i32 = 100;

/// Errors produced when reading or writing the maze text format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("not a maze file: expected `{HEADER}` header")]
    BadHeader,

    #[error("truncated header: rows and columns expected")]
    TruncatedHeader,

    #[error("dimensions {rows}x{cols} outside [{MIN_DIM}, {MAX_DIM}] on both axes")]
    DimensionsOutOfRange { rows: i32, cols: i32 },

    #[error("truncated body: expected {expected} cells, found {found}")]
    TruncatedBody { expected: usize, found: usize },

    #[error("invalid token `{0}`")]
    InvalidToken(String),

    #[error("cannot serialize an empty maze")]
    EmptyMaze,
}

impl Maze {
    /// Parse a maze from its text form.
    ///
    /// The returned maze has no origin or destination set.
    pub fn from_text(input: &str) -> Result<Self, FormatError> {
        let mut tokens = input.split_whitespace();

        if tokens.next() != Some(HEADER) {
            return Err(FormatError::BadHeader);
        }
        let rows = parse_int(tokens.next())?;
        let cols = parse_int(tokens.next())?;
        if !(MIN_DIM..=MAX_DIM).contains(&rows) || !(MIN_DIM..=MAX_DIM).contains(&cols) {
            return Err(FormatError::DimensionsOutOfRange { rows, cols });
        }

        let expected = (rows * cols) as usize;
        let mut maze = Maze::new(rows, cols);
        for idx in 0..expected {
            let Some(token) = tokens.next() else {
                return Err(FormatError::TruncatedBody {
                    expected,
                    found: idx,
                });
            };
            let value: i32 = token
                .parse()
                .map_err(|_| FormatError::InvalidToken(token.to_string()))?;
            if value == 0 {
                let c = Coord::new(idx as i32 / cols, idx as i32 % cols);
                maze.set_cell(c, CellState::Obstacle);
            }
        }
        Ok(maze)
    }

    /// Serialize the maze to its text form.
    ///
    /// Obstacles are written as `0` and every other state as `1`, so
    /// origin, destination and path annotations are not persisted.
    pub fn to_text(&self) -> Result<String, FormatError> {
        if self.is_empty() {
            return Err(FormatError::EmptyMaze);
        }

        let mut out = format!("{HEADER} {} {}\n", self.rows(), self.cols());
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let value = match self.at(Coord::new(row, col)) {
                    CellState::Obstacle => '0',
                    _ => '1',
                };
                out.push(value);
                out.push(if col + 1 < self.cols() { ' ' } else { '\n' });
            }
        }
        Ok(out)
    }
}

fn parse_int(token: Option<&str>) -> Result<i32, FormatError> {
    let token = token.ok_or(FormatError::TruncatedHeader)?;
    token
        .parse()
        .map_err(|_| FormatError::InvalidToken(token.to_string()))
}
