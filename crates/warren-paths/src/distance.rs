use std::f64::consts::SQRT_2;

use warren_core::Coord;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Octile distance between two coordinates.
///
/// The exact cost of the shortest obstacle-free 8-directional route with
/// unit orthogonal steps and `√2` diagonal steps, which makes it an
/// admissible A* heuristic on such grids.
#[inline]
pub fn octile(a: Coord, b: Coord) -> f64 {
    let dr = (a.row - b.row).abs() as f64;
    let dc = (a.col - b.col).abs() as f64;
    SQRT_2 * dr.min(dc) + (dr - dc).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_and_chebyshev() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, -1);
        assert_eq!(manhattan(a, b), 4);
        assert_eq!(chebyshev(a, b), 3);
    }

    #[test]
    fn octile_on_axes_and_diagonals() {
        let o = Coord::new(0, 0);
        assert_eq!(octile(o, Coord::new(0, 5)), 5.0);
        assert_eq!(octile(o, Coord::new(5, 0)), 5.0);
        let d = octile(o, Coord::new(4, 4));
        assert!((d - 4.0 * SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn octile_mixes_diagonal_and_straight() {
        let d = octile(Coord::new(0, 0), Coord::new(2, 5));
        assert!((d - (2.0 * SQRT_2 + 3.0)).abs() < 1e-12);
    }

    #[test]
    fn octile_is_symmetric() {
        let a = Coord::new(1, 7);
        let b = Coord::new(4, 2);
        assert_eq!(octile(a, b), octile(b, a));
    }
}
