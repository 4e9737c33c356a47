//! Viewport bookkeeping for the renderer that displays the board.
//!
//! The render loop calls [`ViewportTracker::update`] every frame; it only reports
//! a new aspect ratio when the surface size actually changed, so the projection
//! is not rebuilt each frame.

use glam::Vec2;

/// Default vertical field of view for viewing the board (degrees).
pub const DEFAULT_FOV_Y_DEGREES: f32 = 76.0;

/// Remembers the last surface size seen by the render loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportTracker {
    last: Option<(u32, u32)>,
}

impl ViewportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current surface size.
    ///
    /// Returns the new aspect ratio when the size differs from the previous
    /// call, `None` when nothing changed or the surface is collapsed.
    pub fn update(&mut self, width: u32, height: u32) -> Option<f32> {
        if width == 0 || height == 0 || self.last == Some((width, height)) {
            return None;
        }
        self.last = Some((width, height));
        Some(width as f32 / height as f32)
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.last
    }
}

/// Camera distance at which an object of `extent` fills the vertical field of view.
pub fn fit_distance(extent: Vec2, fov_y_degrees: f32) -> f32 {
    (extent.max_element() / 2.0) / (fov_y_degrees.to_radians() / 2.0).tan()
}
