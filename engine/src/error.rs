//! Error types for geometry and texture construction.
//!
//! Every failure here is a construction-time configuration problem. Nothing is
//! retried and nothing is clamped: a rejected value would otherwise break the
//! alignment between the grid, the baked overlay and the board solid.

use thiserror::Error;

/// Result type for goban construction.
pub type GobanResult<T> = Result<T, GobanError>;

/// Errors that can occur while building grids, overlays and solids.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GobanError {
    /// A grid needs at least two lines in each direction to have a spacing.
    #[error("grid needs at least 2 rows and 2 columns, got {rows}x{cols}")]
    InvalidGrid {
        /// Requested row line count.
        rows: u32,
        /// Requested column line count.
        cols: u32,
    },

    /// A physical dimension is non-finite or out of range.
    #[error("invalid {name}: {value} (must be finite and {requirement})")]
    InvalidDimension {
        /// Which parameter was rejected.
        name: &'static str,
        /// The offending value.
        value: f32,
        /// Human-readable constraint, e.g. "> 0".
        requirement: &'static str,
    },

    /// Overlay pixel density must be a positive finite number.
    #[error("invalid pixels-per-unit density: {0}")]
    InvalidPixelDensity(f32),

    /// A lens needs to be thinner than it is wide.
    #[error("degenerate stone: thickness {thickness} must be less than diameter {diameter}")]
    DegenerateStone {
        /// Requested diameter.
        diameter: f32,
        /// Requested thickness.
        thickness: f32,
    },

    /// The overlay canvas would exceed the maximum texture size.
    #[error("overlay canvas {width}x{height} px exceeds {max} px per side")]
    TextureTooLarge {
        /// Canvas width in pixels.
        width: u64,
        /// Canvas height in pixels.
        height: u64,
        /// Largest supported side.
        max: u32,
    },

    /// The overlay canvas would round to less than one pixel per side.
    #[error("overlay canvas {width}x{height} px is empty; raise the pixel density")]
    TextureTooSmall {
        /// Canvas width in pixels.
        width: u64,
        /// Canvas height in pixels.
        height: u64,
    },

    /// A mesh would need more vertices than 32-bit indices can address.
    #[error("mesh needs {count} vertices, more than 32-bit indices can address")]
    TooManyVertices {
        /// Requested vertex count.
        count: u64,
    },

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON config error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image encoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Rejects values that are non-finite or not strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f32) -> GobanResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GobanError::InvalidDimension {
            name,
            value,
            requirement: "> 0",
        })
    }
}

/// Rejects values that are non-finite or negative.
pub(crate) fn ensure_non_negative(name: &'static str, value: f32) -> GobanResult<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GobanError::InvalidDimension {
            name,
            value,
            requirement: ">= 0",
        })
    }
}
