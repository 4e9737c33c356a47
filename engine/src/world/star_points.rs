//! Star-Point Table
//!
//! Canonical handicap points for the standard board sizes. Only 9x9, 13x13 and
//! 19x19 have entries; every other size is a plain board with no markers.

use super::grid::{Grid, LatticePoint};

const fn p(row: u32, col: u32) -> LatticePoint {
    LatticePoint::new(row, col)
}

/// Star points for a 9x9 board.
pub const STAR_POINTS_9: [LatticePoint; 5] = [p(2, 2), p(6, 2), p(4, 4), p(2, 6), p(6, 6)];

/// Star points for a 13x13 board.
pub const STAR_POINTS_13: [LatticePoint; 5] = [p(3, 3), p(9, 3), p(6, 6), p(3, 9), p(9, 9)];

/// Star points for a 19x19 board.
pub const STAR_POINTS_19: [LatticePoint; 9] = [
    p(3, 3),
    p(9, 3),
    p(15, 3),
    p(3, 9),
    p(9, 9),
    p(15, 9),
    p(3, 15),
    p(9, 15),
    p(15, 15),
];

/// Board sizes that have a star-point table.
pub const SUPPORTED_SIZES: [u32; 3] = [9, 13, 19];

/// Returns the star points for a square board with `board_size` lines per side.
///
/// Unsupported sizes yield an empty slice. This is a valid result, not an error.
pub fn star_points(board_size: u32) -> &'static [LatticePoint] {
    match board_size {
        9 => &STAR_POINTS_9,
        13 => &STAR_POINTS_13,
        19 => &STAR_POINTS_19,
        _ => &[],
    }
}

/// Star points for a grid. Non-square grids have none.
pub fn star_points_for(grid: &Grid) -> &'static [LatticePoint] {
    if grid.rows() == grid.cols() {
        star_points(grid.rows())
    } else {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_points_19_contains_corners() {
        let points = star_points(19);
        assert_eq!(points.len(), 9);
        assert!(points.contains(&LatticePoint::new(3, 3)));
        assert!(points.contains(&LatticePoint::new(15, 15)));
        assert!(points.contains(&LatticePoint::new(9, 9)));
    }

    #[test]
    fn test_star_points_half_turn_symmetric() {
        for size in SUPPORTED_SIZES {
            let points = star_points(size);
            for point in points {
                let rotated = point.rotated_half_turn(size, size).unwrap();
                assert!(
                    points.contains(&rotated),
                    "{size}x{size}: {point:?} rotates to {rotated:?}, which is missing"
                );
            }
        }
    }

    #[test]
    fn test_unsupported_sizes_are_empty() {
        assert!(star_points(15).is_empty());
        assert!(star_points(0).is_empty());
        assert!(star_points(18).is_empty());
    }

    #[test]
    fn test_star_points_for_non_square_grid() {
        let grid = Grid::new(100.0, 120.0, 19, 13).unwrap();
        assert!(star_points_for(&grid).is_empty());

        let grid = Grid::new(100.0, 100.0, 13, 13).unwrap();
        assert_eq!(star_points_for(&grid), &STAR_POINTS_13);
    }
}
