//! Overlay Texture Baker
//!
//! Rasterizes the grid lines and star points into a transparent RGBA bitmap that
//! is composited over the board's top face. The bitmap is independent of the
//! board's wood-grain surface texture.
//!
//! # Coordinate mapping
//!
//! Pixels are derived from the same [`Grid`] transform used for the board solid
//! and stone placement, scaled uniformly by `pixels_per_unit` and translated to
//! the canvas center:
//!
//! ```text
//! px = x * ppu + canvas_width / 2
//! py = y * ppu + canvas_height / 2
//! ```
//!
//! Margins only grow the canvas; the grid stays centered on it, exactly as it
//! stays centered on the board solid. Texture row 0 is the `-y` (row 0) edge.

use glam::Vec2;
use image::{Rgba, RgbaImage};
use std::path::Path;

use super::raster::{fill_disc, stroke_segment};
use crate::config::{BoardConfig, Margins};
use crate::error::{GobanError, GobanResult, ensure_non_negative, ensure_positive};
use crate::world::{Grid, star_points_for};

/// Largest canvas side accepted by the baker, in pixels.
pub const MAX_TEXTURE_DIMENSION: u32 = 16384;

/// Texture format of baked overlays (straight-alpha sRGB).
pub const OVERLAY_TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Stroke and marker appearance, in physical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Grid line stroke width (mm)
    pub line_width: f32,
    /// Star-point disc radius (mm)
    pub star_point_radius: f32,
    /// Opaque ink color for lines and star points
    pub line_color: Rgba<u8>,
}

impl OverlayStyle {
    pub fn from_board_config(config: &BoardConfig) -> Self {
        let [r, g, b] = config.line_color;
        Self {
            line_width: config.line_width,
            star_point_radius: config.star_point_radius,
            line_color: Rgba([r, g, b, 255]),
        }
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::from_board_config(&BoardConfig::default())
    }
}

/// Bakes the grid overlay for one board.
#[derive(Clone, Debug)]
pub struct OverlayTexture {
    grid: Grid,
    margins: Margins,
    style: OverlayStyle,
    pixels_per_unit: f32,
    width: u32,
    height: u32,
    origin: Vec2,
}

impl OverlayTexture {
    /// Sets up a baker for `grid` surrounded by `margins`.
    ///
    /// Rejects a non-positive density, negative margins, a non-positive line
    /// width, a negative star-point radius, canvases larger than
    /// [`MAX_TEXTURE_DIMENSION`] and canvases that round to nothing.
    pub fn new(
        grid: Grid,
        margins: Margins,
        style: OverlayStyle,
        pixels_per_unit: f32,
    ) -> GobanResult<Self> {
        if !(pixels_per_unit.is_finite() && pixels_per_unit > 0.0) {
            return Err(GobanError::InvalidPixelDensity(pixels_per_unit));
        }
        ensure_non_negative("top margin", margins.top)?;
        ensure_non_negative("left margin", margins.left)?;
        ensure_non_negative("bottom margin", margins.bottom)?;
        ensure_non_negative("right margin", margins.right)?;
        ensure_positive("line width", style.line_width)?;
        ensure_non_negative("star point radius", style.star_point_radius)?;

        let width_px = (f64::from(grid.width() + margins.horizontal()) * f64::from(pixels_per_unit)).round();
        let height_px = (f64::from(grid.height() + margins.vertical()) * f64::from(pixels_per_unit)).round();
        if width_px < 1.0 || height_px < 1.0 {
            return Err(GobanError::TextureTooSmall {
                width: width_px as u64,
                height: height_px as u64,
            });
        }
        let max = f64::from(MAX_TEXTURE_DIMENSION);
        if width_px > max || height_px > max {
            return Err(GobanError::TextureTooLarge {
                width: width_px as u64,
                height: height_px as u64,
                max: MAX_TEXTURE_DIMENSION,
            });
        }

        let width = width_px as u32;
        let height = height_px as u32;
        let origin = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);

        Ok(Self {
            grid,
            margins,
            style,
            pixels_per_unit,
            width,
            height,
            origin,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn style(&self) -> OverlayStyle {
        self.style
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    /// Canvas size in pixels as `(width, height)`.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel position of the scene origin: the canvas center.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Maps a scene coordinate to canvas pixels.
    pub fn scene_to_pixel(&self, pos: Vec2) -> Vec2 {
        pos * self.pixels_per_unit + self.origin
    }

    /// Draws every grid line and star point into a fresh transparent buffer.
    pub fn bake(&self) -> BakedOverlay {
        let mut image = RgbaImage::new(self.width, self.height);
        let ink = self.style.line_color;
        let stroke = self.style.line_width * self.pixels_per_unit;
        let rows = self.grid.rows();
        let cols = self.grid.cols();

        for col in 0..cols {
            let from = self.scene_to_pixel(self.grid.to_scene(0, col));
            let to = self.scene_to_pixel(self.grid.to_scene(rows - 1, col));
            stroke_segment(&mut image, from, to, stroke, ink);
        }
        for row in 0..rows {
            let from = self.scene_to_pixel(self.grid.to_scene(row, 0));
            let to = self.scene_to_pixel(self.grid.to_scene(row, cols - 1));
            stroke_segment(&mut image, from, to, stroke, ink);
        }

        let stars = star_points_for(&self.grid);
        let radius = self.style.star_point_radius * self.pixels_per_unit;
        if radius > 0.0 {
            for &point in stars {
                let center = self.scene_to_pixel(self.grid.grid_to_scene(point));
                fill_disc(&mut image, center, radius, ink);
            }
        }

        tracing::debug!(
            width = self.width,
            height = self.height,
            lines = rows + cols,
            star_points = stars.len(),
            "baked board overlay"
        );

        BakedOverlay {
            image,
            pixels_per_unit: self.pixels_per_unit,
        }
    }
}

/// A finished overlay bitmap, ready to be uploaded as a texture.
#[derive(Clone, Debug, PartialEq)]
pub struct BakedOverlay {
    image: RgbaImage,
    pixels_per_unit: f32,
}

impl BakedOverlay {
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    /// Tightly packed RGBA8 rows.
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn bytes_per_row(&self) -> u32 {
        4 * self.width()
    }

    pub fn extent(&self) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: self.width(),
            height: self.height(),
            depth_or_array_layers: 1,
        }
    }

    /// Descriptor for a sampled texture holding this overlay.
    pub fn texture_descriptor(&self) -> wgpu::TextureDescriptor<'static> {
        wgpu::TextureDescriptor {
            label: Some("goban_overlay"),
            size: self.extent(),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: OVERLAY_TEXTURE_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        }
    }

    /// Writes the overlay as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> GobanResult<()> {
        self.image.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
