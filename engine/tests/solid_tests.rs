//! Solid Tests - Board and Stone Geometry
//!
//! Tests for the built solids: exact stone proportions, board dimensions under
//! arbitrary margins, and config-driven construction end to end.

use approx::assert_relative_eq;
use glam::Vec3;
use goban_engine::{BoardConfig, BoardFace, BoardSpec, GobanConfig, Margins, StoneConfig, StoneSpec};

// ============================================================================
// Stones
// ============================================================================

#[test]
fn test_stone_matches_requested_size() {
    let solid = StoneSpec::new(24.0, 9.8, ()).unwrap().build_solid();
    let (min, max) = solid.mesh().bounds().unwrap();
    assert_relative_eq!(max.z - min.z, 9.8, max_relative = 1e-6);

    let widest = solid
        .mesh()
        .vertices
        .iter()
        .map(|v| v.position().truncate().length())
        .fold(0.0_f32, f32::max);
    assert_relative_eq!(widest, 12.0, max_relative = 1e-5);
}

#[test]
fn test_stone_proportions_hold_for_other_sizes() {
    for (diameter, thickness) in [(22.0, 6.0), (22.5, 10.0), (30.0, 2.0)] {
        let solid = StoneSpec::new(diameter, thickness, ()).unwrap().build_solid();
        let (min, max) = solid.mesh().bounds().unwrap();
        assert_relative_eq!(max.z - min.z, thickness, max_relative = 1e-5);
        assert_relative_eq!(max.x - min.x, diameter, max_relative = 1e-5);
    }
}

#[test]
fn test_stone_normals_point_outward() {
    let stone = StoneSpec::new(24.0, 9.8, ()).unwrap();
    let solid = stone.build_solid();
    let center = Vec3::new(0.0, 0.0, 4.9);
    for vertex in &solid.mesh().vertices {
        assert_relative_eq!(vertex.normal().length(), 1.0, epsilon = 1e-5);
        assert!(vertex.normal().dot(vertex.position() - center) > 0.0);
    }
}

#[test]
fn test_stone_winding_faces_outward() {
    let solid = StoneSpec::new(24.0, 9.8, ()).unwrap().build_solid();
    let mesh = solid.mesh();
    for tri in mesh.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
        let winding = (b.position() - a.position()).cross(c.position() - a.position());
        let normal = a.normal() + b.normal() + c.normal();
        assert!(winding.dot(normal) > 0.0);
    }
}

// ============================================================================
// Board
// ============================================================================

#[test]
fn test_board_dimensions_add_margins() {
    for margins in [
        Margins::uniform(0.0),
        Margins::uniform(12.0),
        Margins {
            top: 3.5,
            left: 20.0,
            bottom: 0.0,
            right: 7.25,
        },
    ] {
        let config = BoardConfig {
            margins,
            ..BoardConfig::square(13)
        };
        let board = BoardSpec::from_config(&config).unwrap();
        let grid = board.grid().dimensions();
        let dims = board.dimensions();
        assert_relative_eq!(dims.width, grid.x + margins.left + margins.right, max_relative = 1e-6);
        assert_relative_eq!(dims.height, grid.y + margins.top + margins.bottom, max_relative = 1e-6);

        let (min, max) = board.build_solid().mesh().bounds().unwrap();
        assert_relative_eq!(max.x - min.x, dims.width, max_relative = 1e-5);
        assert_relative_eq!(max.y - min.y, dims.height, max_relative = 1e-5);
    }
}

#[test]
fn test_board_top_is_playing_surface() {
    let board = BoardSpec::new(19, 19).unwrap();
    let solid = board.build_solid();
    let (min, max) = solid.mesh().bounds().unwrap();
    assert_eq!(max.z, 0.0);
    assert_eq!(min.z, -board.dimensions().depth);

    let top = solid.group(BoardFace::Top).unwrap();
    for &index in &solid.mesh().indices[top.indices.start as usize..top.indices.end as usize] {
        assert_eq!(solid.mesh().vertices[index as usize].position().z, 0.0);
    }
}

#[test]
fn test_every_intersection_is_on_the_board() {
    let board = BoardSpec::new(19, 19).unwrap();
    let (min, max) = board.build_solid().mesh().bounds().unwrap();
    for point in board.grid().lattice_points() {
        let at = board.stone_position(point);
        assert!(at.x > min.x && at.x < max.x);
        assert!(at.y > min.y && at.y < max.y);
    }
}

#[test]
fn test_camera_fits_larger_boards_farther_away() {
    let small = BoardSpec::new(9, 9).unwrap().camera_fit_distance(76.0);
    let large = BoardSpec::new(19, 19).unwrap().camera_fit_distance(76.0);
    assert!(small > 0.0);
    assert!(large > small);
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_partial_json_config_builds_everything() {
    let config = GobanConfig::from_json_str(
        r#"{
            "board": { "rows": 13, "cols": 13, "margins": { "left": 15.0 } },
            "stone": { "diameter": 22.0, "thickness": 8.0 },
            "overlay": { "pixels_per_unit": 4.0 }
        }"#,
    )
    .unwrap();

    assert_eq!(config.board.rows, 13);
    assert_eq!(config.board.margins.left, 15.0);
    assert_eq!(config.board.margins.top, Margins::default().top);
    assert_eq!(config.stone.width_segments, StoneConfig::default().width_segments);

    let board = BoardSpec::from_config(&config.board).unwrap();
    let overlay = board.overlay(config.overlay.pixels_per_unit).unwrap().bake();
    let dims = board.dimensions();
    assert_eq!(overlay.width(), (dims.width * 4.0).round() as u32);
    assert_eq!(overlay.height(), (dims.height * 4.0).round() as u32);

    let stone = StoneSpec::from_config(&config.stone, "white").unwrap().build_solid();
    let (min, max) = stone.mesh().bounds().unwrap();
    assert_relative_eq!(max.z - min.z, 8.0, max_relative = 1e-6);
    assert_eq!(*stone.material(), "white");
}

#[test]
fn test_config_file_and_png_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("goban.json");
    let png_path = dir.path().join("overlay.png");

    let config = GobanConfig {
        board: BoardConfig::square(9),
        overlay: goban_engine::OverlayConfig { pixels_per_unit: 2.0 },
        ..GobanConfig::default()
    };
    std::fs::write(&config_path, config.to_json_pretty().unwrap()).unwrap();

    let loaded = GobanConfig::load(&config_path).unwrap();
    assert_eq!(loaded.board.rows, 9);

    let board = BoardSpec::from_config(&loaded.board).unwrap();
    let baked = board.overlay(loaded.overlay.pixels_per_unit).unwrap().bake();
    baked.save_png(&png_path).unwrap();

    let reread = image::open(&png_path).unwrap().into_rgba8();
    assert_eq!(reread.dimensions(), (baked.width(), baked.height()));
    assert_eq!(reread.as_raw(), baked.image().as_raw());
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GobanConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, goban_engine::GobanError::Io(_)));
}
