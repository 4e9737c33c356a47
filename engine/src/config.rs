//! Goban Configuration
//!
//! Centralizes the physical dimensions of the board and stones plus the overlay
//! bake density. `Default` returns the classic set: 22 x 23.7 mm line spacing,
//! 12 mm margins, 24 mm x 9.8 mm stones, 10 pixels per millimeter.
//!
//! Configs are plain serde structs. Every field has a default, so a JSON file
//! only needs to name the values it changes:
//!
//! ```json
//! { "board": { "rows": 13, "cols": 13 }, "overlay": { "pixels_per_unit": 8.0 } }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::GobanResult;

/// Blank space between the outermost grid lines and the board edge (mm).
///
/// The grid stays centered on the board, so only `left + right` and
/// `top + bottom` change the board's size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    /// Margin on the row-0 side (`-y`)
    pub top: f32,
    /// Margin on the column-0 side (`-x`)
    pub left: f32,
    /// Margin on the last-row side (`+y`)
    pub bottom: f32,
    /// Margin on the last-column side (`+x`)
    pub right: f32,
}

impl Margins {
    pub const fn uniform(margin: f32) -> Self {
        Self {
            top: margin,
            left: margin,
            bottom: margin,
            right: margin,
        }
    }

    /// Total horizontal margin (`left + right`).
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical margin (`top + bottom`).
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(12.0)
    }
}

/// Board layout and appearance parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of row lines
    pub rows: u32,
    /// Number of column lines
    pub cols: u32,
    /// Distance between adjacent row lines (mm)
    pub row_spacing: f32,
    /// Distance between adjacent column lines (mm)
    pub col_spacing: f32,
    /// Space outside the outermost lines
    pub margins: Margins,
    /// Board thickness, extending down from the `z = 0` playing surface (mm)
    pub thickness: f32,
    /// Radius of the star-point discs (mm)
    pub star_point_radius: f32,
    /// Grid line stroke width (mm)
    pub line_width: f32,
    /// Grid line color (sRGB)
    pub line_color: [u8; 3],
    /// Give the `±y` sides their own end-grain material slot
    pub separate_end_grain: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 19,
            cols: 19,
            row_spacing: 23.7,
            col_spacing: 22.0,
            margins: Margins::default(),
            thickness: 30.0,
            star_point_radius: 2.0,
            line_width: 1.0,
            line_color: [0, 0, 0],
            separate_end_grain: false,
        }
    }
}

impl BoardConfig {
    /// Classic dimensions for a square board of `size` lines.
    pub fn square(size: u32) -> Self {
        Self {
            rows: size,
            cols: size,
            ..Self::default()
        }
    }
}

/// Stone dimensions and mesh resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoneConfig {
    /// Overall diameter (mm)
    pub diameter: f32,
    /// Overall thickness (mm), must be less than the diameter
    pub thickness: f32,
    /// Segments around the vertical axis
    pub width_segments: u32,
    /// Segments from the pole to the rim of each cap
    pub height_segments: u32,
}

impl Default for StoneConfig {
    fn default() -> Self {
        Self {
            diameter: 24.0,
            thickness: 9.8,
            width_segments: 32,
            height_segments: 32,
        }
    }
}

/// Overlay bake parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Bitmap resolution, independent of the display size
    pub pixels_per_unit: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            pixels_per_unit: 10.0,
        }
    }
}

/// Complete goban set configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GobanConfig {
    pub board: BoardConfig,
    pub stone: StoneConfig,
    pub overlay: OverlayConfig,
}

impl GobanConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> GobanResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> GobanResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn to_json_pretty(&self) -> GobanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
