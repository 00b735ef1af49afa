//! Random maze generation.

use rand::Rng;
use rand::RngExt;
use thiserror::Error;

use warren_core::{CellState, Coord, MAX_DIM, MIN_DIM, Maze};

/// Smallest accepted obstacle fraction.
pub const MIN_OBSTACLE_RATIO: f64 = 0.10;
/// Largest accepted obstacle fraction.
pub const MAX_OBSTACLE_RATIO: f64 = 0.30;

/// Errors produced by maze generation.
#[derive(Debug, Error, PartialEq)]
pub enum GenError {
    #[error("dimensions {rows}x{cols} outside [{MIN_DIM}, {MAX_DIM}] on both axes")]
    DimensionsOutOfRange { rows: i32, cols: i32 },

    #[error("obstacle ratio {0} outside [{MIN_OBSTACLE_RATIO}, {MAX_OBSTACLE_RATIO}]")]
    RatioOutOfRange(f64),
}

/// Random maze generator.
///
/// The random source is supplied by the caller, so generation is
/// reproducible from a seeded RNG and the search engine stays entirely
/// free of ambient randomness.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a maze where each cell is independently an obstacle with
    /// probability `obstacle_ratio`.
    ///
    /// With `None` the ratio is drawn uniformly from
    /// `[MIN_OBSTACLE_RATIO, MAX_OBSTACLE_RATIO]`. Dimensions and an
    /// explicit ratio are validated against the same bounds the text
    /// format enforces.
    pub fn generate(
        &mut self,
        rows: i32,
        cols: i32,
        obstacle_ratio: Option<f64>,
    ) -> Result<Maze, GenError> {
        let ratio = match obstacle_ratio {
            Some(r) => r,
            None => self
                .rng
                .random_range(MIN_OBSTACLE_RATIO..=MAX_OBSTACLE_RATIO),
        };

        if !(MIN_DIM..=MAX_DIM).contains(&rows) || !(MIN_DIM..=MAX_DIM).contains(&cols) {
            return Err(GenError::DimensionsOutOfRange { rows, cols });
        }
        if !(MIN_OBSTACLE_RATIO..=MAX_OBSTACLE_RATIO).contains(&ratio) {
            return Err(GenError::RatioOutOfRange(ratio));
        }

        let mut maze = Maze::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                if self.rng.random::<f64>() < ratio {
                    maze.set_cell(Coord::new(row, col), CellState::Obstacle);
                }
            }
        }
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rejects_out_of_range_dimensions() {
        let mut generator = MazeGen::new(StdRng::seed_from_u64(1));
        assert_eq!(
            generator.generate(4, 10, None),
            Err(GenError::DimensionsOutOfRange { rows: 4, cols: 10 })
        );
        assert_eq!(
            generator.generate(10, 200, None),
            Err(GenError::DimensionsOutOfRange { rows: 10, cols: 200 })
        );
    }

    #[test]
    fn rejects_out_of_range_ratio() {
        let mut generator = MazeGen::new(StdRng::seed_from_u64(1));
        assert_eq!(
            generator.generate(10, 10, Some(0.5)),
            Err(GenError::RatioOutOfRange(0.5))
        );
        assert_eq!(
            generator.generate(10, 10, Some(0.0)),
            Err(GenError::RatioOutOfRange(0.0))
        );
    }

    #[test]
    fn same_seed_generates_the_same_maze() {
        let a = MazeGen::new(StdRng::seed_from_u64(42))
            .generate(12, 9, Some(0.25))
            .unwrap();
        let b = MazeGen::new(StdRng::seed_from_u64(42))
            .generate(12, 9, Some(0.25))
            .unwrap();
        assert_eq!(a.to_text().unwrap(), b.to_text().unwrap());
    }

    #[test]
    fn generated_maze_has_some_of_each() {
        let maze = MazeGen::new(StdRng::seed_from_u64(7))
            .generate(20, 20, Some(0.25))
            .unwrap();
        let obstacles = maze.count(CellState::Obstacle);
        assert!(obstacles > 0);
        assert!(obstacles < 400);
        assert!(maze.origin().is_none());
    }

    #[test]
    fn default_ratio_stays_in_range() {
        let maze = MazeGen::new(StdRng::seed_from_u64(3))
            .generate(30, 30, None)
            .unwrap();
        let obstacles = maze.count(CellState::Obstacle) as f64 / 900.0;
        // Loose envelope around the sampled ratio.
        assert!(obstacles > 0.02, "obstacle fraction {obstacles}");
        assert!(obstacles < 0.45, "obstacle fraction {obstacles}");
    }
}
