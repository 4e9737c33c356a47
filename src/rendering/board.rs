//! Board Solid Builder
//!
//! Derives the overall board dimensions from the grid plus margins and builds the
//! board as a rectangular prism whose top face is the `z = 0` plane. Stones and the
//! overlay sit on that plane; the wood extends down to `z = -depth`.
//!
//! # Face regions
//!
//! | Face | Material slot |
//! |---|---|
//! | `±x` sides | `Grain` (edge grain) |
//! | `±y` sides | `EndGrain` when configured, otherwise `Grain` |
//! | top / bottom | `Surface` (wood-grain texture) |
//! | overlay | `Overlay`: a second quad on the top face carrying the baked lines |
//!
//! Top-face UVs follow the overlay bake transform, so `u = (x - x_min) / width`
//! and `v = (y - y_min) / height`.

use glam::{Vec2, Vec3};
use std::ops::Range;

use crate::config::{BoardConfig, Margins};
use crate::error::{GobanResult, ensure_non_negative, ensure_positive};
use crate::render::{Mesh, OverlayStyle, OverlayTexture, fit_distance};
use crate::world::{Grid, LatticePoint};

/// Overall board size (mm).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardDimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

/// The seven drawable faces of the board solid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoardFace {
    PosX,
    NegX,
    PosY,
    NegY,
    Top,
    Bottom,
    /// Shares the top face's geometry; draws the baked overlay
    Overlay,
}

/// Material role a face is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialSlot {
    Grain,
    EndGrain,
    Surface,
    Overlay,
}

/// A contiguous index range of the board mesh drawn with one material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceGroup {
    pub face: BoardFace,
    pub slot: MaterialSlot,
    pub indices: Range<u32>,
}

/// A built board: one mesh plus its material regions.
#[derive(Clone, Debug)]
pub struct BoardSolid {
    mesh: Mesh,
    groups: Vec<FaceGroup>,
    dimensions: BoardDimensions,
}

impl BoardSolid {
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn groups(&self) -> &[FaceGroup] {
        &self.groups
    }

    pub fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    pub fn group(&self, face: BoardFace) -> Option<&FaceGroup> {
        self.groups.iter().find(|g| g.face == face)
    }

    /// Index ranges drawn with `slot`.
    pub fn ranges_for(&self, slot: MaterialSlot) -> impl Iterator<Item = Range<u32>> + '_ {
        self.groups
            .iter()
            .filter(move |g| g.slot == slot)
            .map(|g| g.indices.clone())
    }
}

/// Validated board parameters and the grid derived from them.
#[derive(Clone, Debug)]
pub struct BoardSpec {
    config: BoardConfig,
    grid: Grid,
}

impl BoardSpec {
    /// A board with the classic dimensions and `rows` x `cols` lines.
    pub fn new(rows: u32, cols: u32) -> GobanResult<Self> {
        Self::from_config(&BoardConfig {
            rows,
            cols,
            ..BoardConfig::default()
        })
    }

    pub fn from_config(config: &BoardConfig) -> GobanResult<Self> {
        let grid = Grid::from_spacing(config.row_spacing, config.col_spacing, config.rows, config.cols)?;
        ensure_non_negative("top margin", config.margins.top)?;
        ensure_non_negative("left margin", config.margins.left)?;
        ensure_non_negative("bottom margin", config.margins.bottom)?;
        ensure_non_negative("right margin", config.margins.right)?;
        ensure_positive("board thickness", config.thickness)?;
        ensure_positive("line width", config.line_width)?;
        ensure_non_negative("star point radius", config.star_point_radius)?;

        Ok(Self {
            config: config.clone(),
            grid,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The grid used to place lines, star points and stones.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn margins(&self) -> Margins {
        self.config.margins
    }

    /// Grid extent plus margins, with the thickness as depth.
    pub fn dimensions(&self) -> BoardDimensions {
        let grid = self.grid.dimensions();
        BoardDimensions {
            width: grid.x + self.config.margins.horizontal(),
            height: grid.y + self.config.margins.vertical(),
            depth: self.config.thickness,
        }
    }

    /// Corner of the board with the smallest `x` and `y`, on the `z = 0` plane.
    ///
    /// The board is centered on the scene origin like the grid and the overlay
    /// canvas, so only the margin sums move its edges.
    fn min_corner(&self) -> Vec2 {
        let dims = self.dimensions();
        Vec2::new(-dims.width / 2.0, -dims.height / 2.0)
    }

    fn slot_for(&self, face: BoardFace) -> MaterialSlot {
        match face {
            BoardFace::PosX | BoardFace::NegX => MaterialSlot::Grain,
            BoardFace::PosY | BoardFace::NegY if self.config.separate_end_grain => MaterialSlot::EndGrain,
            BoardFace::PosY | BoardFace::NegY => MaterialSlot::Grain,
            BoardFace::Top | BoardFace::Bottom => MaterialSlot::Surface,
            BoardFace::Overlay => MaterialSlot::Overlay,
        }
    }

    /// Builds the board prism with its top face at `z = 0`.
    pub fn build_solid(&self) -> BoardSolid {
        let dims = self.dimensions();
        let min = self.min_corner();
        let (x0, y0) = (min.x, min.y);
        let (x1, y1) = (x0 + dims.width, y0 + dims.height);
        let (z0, z1) = (-dims.depth, 0.0);

        let v = Vec3::new;
        let uv = Vec2::new;
        // u runs along the face, v runs down from the playing surface
        let side_uvs = [uv(0.0, 1.0), uv(1.0, 1.0), uv(1.0, 0.0), uv(0.0, 0.0)];
        let top_corners = [v(x0, y0, z1), v(x1, y0, z1), v(x1, y1, z1), v(x0, y1, z1)];
        let top_uvs = [uv(0.0, 0.0), uv(1.0, 0.0), uv(1.0, 1.0), uv(0.0, 1.0)];

        let faces: [(BoardFace, [Vec3; 4], [Vec2; 4], Vec3); 7] = [
            (
                BoardFace::PosX,
                [v(x1, y0, z0), v(x1, y1, z0), v(x1, y1, z1), v(x1, y0, z1)],
                side_uvs,
                Vec3::X,
            ),
            (
                BoardFace::NegX,
                [v(x0, y1, z0), v(x0, y0, z0), v(x0, y0, z1), v(x0, y1, z1)],
                side_uvs,
                Vec3::NEG_X,
            ),
            (
                BoardFace::PosY,
                [v(x1, y1, z0), v(x0, y1, z0), v(x0, y1, z1), v(x1, y1, z1)],
                side_uvs,
                Vec3::Y,
            ),
            (
                BoardFace::NegY,
                [v(x0, y0, z0), v(x1, y0, z0), v(x1, y0, z1), v(x0, y0, z1)],
                side_uvs,
                Vec3::NEG_Y,
            ),
            (BoardFace::Top, top_corners, top_uvs, Vec3::Z),
            (
                BoardFace::Bottom,
                [v(x0, y0, z0), v(x0, y1, z0), v(x1, y1, z0), v(x1, y0, z0)],
                [uv(0.0, 0.0), uv(0.0, 1.0), uv(1.0, 1.0), uv(1.0, 0.0)],
                Vec3::NEG_Z,
            ),
            (BoardFace::Overlay, top_corners, top_uvs, Vec3::Z),
        ];

        let mut mesh = Mesh::with_capacity(faces.len() * 4, faces.len() * 6);
        let groups = faces
            .into_iter()
            .map(|(face, corners, uvs, normal)| FaceGroup {
                face,
                slot: self.slot_for(face),
                indices: mesh.push_quad(corners, uvs, normal),
            })
            .collect();

        tracing::debug!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            width = dims.width,
            height = dims.height,
            depth = dims.depth,
            "built board solid"
        );

        BoardSolid {
            mesh,
            groups,
            dimensions: dims,
        }
    }

    pub fn overlay_style(&self) -> OverlayStyle {
        OverlayStyle::from_board_config(&self.config)
    }

    /// Sets up the overlay baker for this board's top face.
    pub fn overlay(&self, pixels_per_unit: f32) -> GobanResult<OverlayTexture> {
        OverlayTexture::new(self.grid, self.config.margins, self.overlay_style(), pixels_per_unit)
    }

    /// Where a stone resting on `point` goes: the intersection on the `z = 0` plane.
    pub fn stone_position(&self, point: LatticePoint) -> Vec3 {
        self.grid.grid_to_scene(point).extend(0.0)
    }

    /// Camera distance that fits the whole board in a vertical field of view.
    pub fn camera_fit_distance(&self, fov_y_degrees: f32) -> f32 {
        let dims = self.dimensions();
        fit_distance(Vec2::new(dims.width, dims.height), fov_y_degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_classic_19x19_dimensions() {
        let board = BoardSpec::new(19, 19).unwrap();
        let dims = board.dimensions();
        assert_relative_eq!(dims.width, 22.0 * 18.0 + 24.0, max_relative = 1e-6);
        assert_relative_eq!(dims.height, 23.7 * 18.0 + 24.0, max_relative = 1e-6);
        assert_eq!(dims.depth, 30.0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(BoardSpec::new(1, 19).is_err());

        let config = BoardConfig {
            thickness: 0.0,
            ..BoardConfig::default()
        };
        assert!(BoardSpec::from_config(&config).is_err());

        let config = BoardConfig {
            margins: Margins {
                bottom: -2.0,
                ..Margins::default()
            },
            ..BoardConfig::default()
        };
        assert!(BoardSpec::from_config(&config).is_err());
    }

    #[test]
    fn test_solid_has_seven_faces() {
        let solid = BoardSpec::new(9, 9).unwrap().build_solid();
        assert_eq!(solid.groups().len(), 7);
        assert_eq!(solid.mesh().vertex_count(), 28);
        assert_eq!(solid.mesh().triangle_count(), 14);
    }

    #[test]
    fn test_end_grain_defaults_to_grain() {
        let solid = BoardSpec::new(9, 9).unwrap().build_solid();
        assert_eq!(solid.group(BoardFace::PosY).unwrap().slot, MaterialSlot::Grain);
        assert_eq!(solid.ranges_for(MaterialSlot::EndGrain).count(), 0);
        assert_eq!(solid.ranges_for(MaterialSlot::Grain).count(), 4);

        let config = BoardConfig {
            separate_end_grain: true,
            ..BoardConfig::square(9)
        };
        let solid = BoardSpec::from_config(&config).unwrap().build_solid();
        assert_eq!(solid.group(BoardFace::NegY).unwrap().slot, MaterialSlot::EndGrain);
        assert_eq!(solid.ranges_for(MaterialSlot::Grain).count(), 2);
    }

    #[test]
    fn test_face_normals_match_winding() {
        let solid = BoardSpec::new(9, 9).unwrap().build_solid();
        let mesh = solid.mesh();
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize].position());
            let winding = (b - a).cross(c - a).normalize();
            let normal = mesh.vertices[tri[0] as usize].normal();
            assert!(winding.dot(normal) > 0.99, "winding {winding} vs normal {normal}");
        }
    }

    #[test]
    fn test_board_is_centered_with_asymmetric_margins() {
        let config = BoardConfig {
            margins: Margins {
                top: 12.0,
                left: 30.0,
                bottom: 12.0,
                right: 0.0,
            },
            ..BoardConfig::square(9)
        };
        let board = BoardSpec::from_config(&config).unwrap();
        let (min, max) = board.build_solid().mesh().bounds().unwrap();
        assert_relative_eq!(min.x, -max.x, epsilon = 1e-4);
        assert_relative_eq!(min.y, -max.y, epsilon = 1e-4);
        assert_relative_eq!(max.x - min.x, 206.0, max_relative = 1e-6);
    }

    #[test]
    fn test_stone_position_on_top_plane() {
        let board = BoardSpec::new(19, 19).unwrap();
        let pos = board.stone_position(LatticePoint::new(3, 15));
        let scene = board.grid().to_scene(3, 15);
        assert_eq!(pos, Vec3::new(scene.x, scene.y, 0.0));
    }
}
