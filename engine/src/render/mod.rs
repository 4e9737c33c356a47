//! Render Module
//!
//! Everything the board renderer consumes: GPU-ready mesh buffers, the baked
//! grid overlay and viewport helpers. No device or surface is owned here.

pub mod mesh;
pub mod overlay;
pub mod raster;
pub mod viewport;

pub use mesh::{GobanVertex, Mesh};
pub use overlay::{
    BakedOverlay, MAX_TEXTURE_DIMENSION, OVERLAY_TEXTURE_FORMAT, OverlayStyle, OverlayTexture,
};
pub use viewport::{DEFAULT_FOV_Y_DEGREES, ViewportTracker, fit_distance};
