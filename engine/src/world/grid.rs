//! Coordinate Grid
//!
//! Maps integer lattice positions `(row, col)` to centered, metric scene
//! coordinates. This is the only coordinate transform in the crate: the overlay
//! baker, the board solid and stone placement all go through it.
//!
//! ## Spacing convention
//! Spacing is `extent / (count - 1)`: the first and last lines sit exactly on the
//! grid boundary and the board margins are added outside the grid extent.
//! - 1 unit = 1 millimeter
//! - origin = geometric center of the grid, not its corner
//! - `+x` follows increasing column, `+y` follows increasing row

use glam::Vec2;

use crate::error::{GobanError, GobanResult, ensure_positive};

/// An intersection on the board, addressed by line indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticePoint {
    pub row: u32,
    pub col: u32,
}

impl LatticePoint {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The point reached by a half turn about the center of a `rows` x `cols` lattice.
    ///
    /// Returns `None` when the point is not on that lattice.
    pub fn rotated_half_turn(self, rows: u32, cols: u32) -> Option<Self> {
        let row = rows.checked_sub(1)?.checked_sub(self.row)?;
        let col = cols.checked_sub(1)?.checked_sub(self.col)?;
        Some(Self::new(row, col))
    }
}

/// Immutable mapping between lattice points and scene coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    width: f32,
    height: f32,
    rows: u32,
    cols: u32,
    row_spacing: f32,
    col_spacing: f32,
}

impl Grid {
    /// Create a grid spanning `width` x `height` with `rows` x `cols` lines.
    ///
    /// Fails for fewer than two lines in either direction (the spacing would be
    /// undefined) and for non-finite or non-positive extents.
    pub fn new(width: f32, height: f32, rows: u32, cols: u32) -> GobanResult<Self> {
        if rows < 2 || cols < 2 {
            return Err(GobanError::InvalidGrid { rows, cols });
        }
        let width = ensure_positive("grid width", width)?;
        let height = ensure_positive("grid height", height)?;

        Ok(Self {
            width,
            height,
            rows,
            cols,
            row_spacing: height / (rows - 1) as f32,
            col_spacing: width / (cols - 1) as f32,
        })
    }

    /// Create a grid from the distance between adjacent lines.
    ///
    /// The extent becomes `spacing * (count - 1)`, so `row_spacing()` and
    /// `col_spacing()` return the requested values.
    pub fn from_spacing(
        row_spacing: f32,
        col_spacing: f32,
        rows: u32,
        cols: u32,
    ) -> GobanResult<Self> {
        if rows < 2 || cols < 2 {
            return Err(GobanError::InvalidGrid { rows, cols });
        }
        let row_spacing = ensure_positive("row spacing", row_spacing)?;
        let col_spacing = ensure_positive("column spacing", col_spacing)?;
        Self::new(
            col_spacing * (cols - 1) as f32,
            row_spacing * (rows - 1) as f32,
            rows,
            cols,
        )
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Distance between adjacent row lines.
    pub fn row_spacing(&self) -> f32 {
        self.row_spacing
    }

    /// Distance between adjacent column lines.
    pub fn col_spacing(&self) -> f32 {
        self.col_spacing
    }

    /// Physical extent of the grid (`x` = width, `y` = height).
    pub fn dimensions(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Whether the point lies on this lattice.
    pub fn contains(&self, point: LatticePoint) -> bool {
        point.row < self.rows && point.col < self.cols
    }

    /// Scene coordinate of a lattice point.
    ///
    /// `x = col * col_spacing - width / 2`, `y = row * row_spacing - height / 2`.
    pub fn grid_to_scene(&self, point: LatticePoint) -> Vec2 {
        Vec2::new(
            point.col as f32 * self.col_spacing - self.width / 2.0,
            point.row as f32 * self.row_spacing - self.height / 2.0,
        )
    }

    /// Shorthand for [`Grid::grid_to_scene`].
    pub fn to_scene(&self, row: u32, col: u32) -> Vec2 {
        self.grid_to_scene(LatticePoint::new(row, col))
    }

    /// Nearest lattice point to a scene coordinate.
    ///
    /// Returns `None` when the nearest intersection lies off the board.
    pub fn scene_to_grid(&self, pos: Vec2) -> Option<LatticePoint> {
        let col = ((pos.x + self.width / 2.0) / self.col_spacing).round();
        let row = ((pos.y + self.height / 2.0) / self.row_spacing).round();
        if !col.is_finite() || !row.is_finite() || col < 0.0 || row < 0.0 {
            return None;
        }
        let point = LatticePoint::new(row as u32, col as u32);
        self.contains(point).then_some(point)
    }

    /// All lattice points in row-major order.
    pub fn lattice_points(&self) -> impl Iterator<Item = LatticePoint> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| LatticePoint::new(row, col)))
    }
}
