//! Cell states and helpers.

use std::fmt;

/// The state of a single maze cell.
///
/// `Origin`, `Destination` and `Path` all count as free for traversal;
/// only `Obstacle` blocks movement. `Path` is a transient annotation laid
/// down after a successful search and cleared before the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Free,
    Obstacle,
    Origin,
    Destination,
    Path,
}

impl CellState {
    /// Whether the cell can be traversed.
    pub const fn is_free(self) -> bool {
        !matches!(self, CellState::Obstacle)
    }

    /// Two-character console representation of the cell.
    pub const fn glyph(self) -> &'static str {
        match self {
            CellState::Free => "  ",
            CellState::Obstacle => "##",
            CellState::Origin => "Or",
            CellState::Destination => "De",
            CellState::Path => "..",
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_obstacle_blocks() {
        assert!(CellState::Free.is_free());
        assert!(CellState::Origin.is_free());
        assert!(CellState::Destination.is_free());
        assert!(CellState::Path.is_free());
        assert!(!CellState::Obstacle.is_free());
    }

    #[test]
    fn glyphs_are_two_chars() {
        for s in [
            CellState::Free,
            CellState::Obstacle,
            CellState::Origin,
            CellState::Destination,
            CellState::Path,
        ] {
            assert_eq!(s.glyph().len(), 2);
        }
    }
}
