//! Pixel rasterization primitives.
//!
//! Pure functions that write shapes into an RGBA buffer. Coordinates are in
//! pixels with the origin at the top-left corner of the buffer; a pixel `(i, j)`
//! is covered when its center `(i + 0.5, j + 0.5)` falls inside the shape.
//! Coverage is hard (no antialiasing) so baked output is deterministic.

use glam::Vec2;
use image::{Rgba, RgbaImage};

/// Pixel index bounds `[x0, x1) x [y0, y1)` of a float box, clipped to the image.
fn clip_box(image: &RgbaImage, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
    let (w, h) = image.dimensions();
    let x0 = min.x.floor().max(0.0);
    let y0 = min.y.floor().max(0.0);
    let x1 = max.x.ceil().min(w as f32);
    let y1 = max.y.ceil().min(h as f32);
    if !(x0 < x1 && y0 < y1) {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

fn pixel_center(x: u32, y: u32) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Strokes a straight segment of the given width with square caps.
///
/// The caps extend half the width past each endpoint, so perpendicular strokes
/// meeting at an endpoint close the corner. Returns the number of pixels written.
pub fn stroke_segment(
    image: &mut RgbaImage,
    from: Vec2,
    to: Vec2,
    width: f32,
    color: Rgba<u8>,
) -> usize {
    let half = width / 2.0;
    let delta = to - from;
    let length = delta.length();
    let dir = if length > f32::EPSILON {
        delta / length
    } else {
        Vec2::X
    };
    let normal = dir.perp();

    // square caps reach half a diagonal past the endpoints on slanted segments
    let pad = Vec2::splat(half * std::f32::consts::SQRT_2);
    let Some((x0, y0, x1, y1)) = clip_box(image, from.min(to) - pad, from.max(to) + pad) else {
        return 0;
    };

    let mut written = 0;
    for y in y0..y1 {
        for x in x0..x1 {
            let rel = pixel_center(x, y) - from;
            let along = rel.dot(dir);
            let across = rel.dot(normal).abs();
            if along >= -half && along <= length + half && across <= half {
                image.put_pixel(x, y, color);
                written += 1;
            }
        }
    }
    written
}

/// Fills a disc. Returns the number of pixels written.
pub fn fill_disc(image: &mut RgbaImage, center: Vec2, radius: f32, color: Rgba<u8>) -> usize {
    let Some((x0, y0, x1, y1)) = clip_box(
        image,
        center - Vec2::splat(radius),
        center + Vec2::splat(radius),
    ) else {
        return 0;
    };

    let radius_sq = radius * radius;
    let mut written = 0;
    for y in y0..y1 {
        for x in x0..x1 {
            if pixel_center(x, y).distance_squared(center) <= radius_sq {
                image.put_pixel(x, y, color);
                written += 1;
            }
        }
    }
    written
}
