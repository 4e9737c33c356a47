//! Grid Tests - Coordinate Mapping and Star Points
//!
//! Tests for the lattice-to-scene mapping, configuration rejection, and the
//! star-point table.

use approx::assert_relative_eq;
use glam::Vec2;
use goban_engine::world::{Grid, LatticePoint, SUPPORTED_SIZES, star_points, star_points_for};
use goban_engine::{BoardSpec, GobanError};

// ============================================================================
// Centering
// ============================================================================

#[test]
fn test_first_and_last_intersections_are_opposite() {
    for (width, height, rows, cols) in [
        (396.0, 426.6, 19, 19),
        (264.0, 284.4, 13, 13),
        (176.0, 189.6, 9, 9),
        (100.0, 37.5, 4, 11),
    ] {
        let grid = Grid::new(width, height, rows, cols).unwrap();
        let first = grid.to_scene(0, 0);
        let last = grid.to_scene(rows - 1, cols - 1);
        assert_relative_eq!(first.x, -last.x, epsilon = 1e-4);
        assert_relative_eq!(first.y, -last.y, epsilon = 1e-4);
        assert_relative_eq!(last.x, width / 2.0, epsilon = 1e-4);
        assert_relative_eq!(last.y, height / 2.0, epsilon = 1e-4);
    }
}

#[test]
fn test_mapping_is_affine() {
    let grid = Grid::new(396.0, 426.6, 19, 19).unwrap();
    let a = grid.to_scene(2, 5);
    let b = grid.to_scene(3, 7);
    assert_relative_eq!(b.x - a.x, 2.0 * grid.col_spacing(), epsilon = 1e-3);
    assert_relative_eq!(b.y - a.y, grid.row_spacing(), epsilon = 1e-3);
}

#[test]
fn test_scene_to_grid_inverts_every_intersection() {
    let grid = Grid::new(396.0, 426.6, 19, 19).unwrap();
    for point in grid.lattice_points() {
        assert_eq!(grid.scene_to_grid(grid.grid_to_scene(point)), Some(point));
    }
}

#[test]
fn test_board_grid_uses_configured_spacing() {
    let board = BoardSpec::new(19, 19).unwrap();
    assert_relative_eq!(board.grid().col_spacing(), 22.0, max_relative = 1e-6);
    assert_relative_eq!(board.grid().row_spacing(), 23.7, max_relative = 1e-6);
    assert_eq!(board.grid().dimensions(), Vec2::new(22.0 * 18.0, 23.7 * 18.0));
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_single_row_grid_is_rejected() {
    let err = Grid::new(100.0, 100.0, 1, 19).unwrap_err();
    assert!(matches!(err, GobanError::InvalidGrid { rows: 1, cols: 19 }));
}

#[test]
fn test_single_row_board_is_rejected() {
    assert!(matches!(
        BoardSpec::new(1, 1),
        Err(GobanError::InvalidGrid { .. })
    ));
}

// ============================================================================
// Star Points
// ============================================================================

#[test]
fn test_19x19_star_points_survive_half_turn() {
    let points = star_points(19);
    assert!(points.contains(&LatticePoint::new(3, 3)));
    assert!(points.contains(&LatticePoint::new(15, 15)));
    for point in points {
        assert!(points.contains(&point.rotated_half_turn(19, 19).unwrap()));
    }
}

#[test]
fn test_every_table_is_on_its_board() {
    for size in SUPPORTED_SIZES {
        let grid = Grid::new(100.0, 100.0, size, size).unwrap();
        let points = star_points_for(&grid);
        assert!(!points.is_empty());
        assert!(points.iter().all(|&p| grid.contains(p)));
    }
}

#[test]
fn test_size_15_has_no_star_points() {
    assert!(star_points(15).is_empty());
}
