//! World Module
//!
//! The board's coordinate model: lattice-to-scene mapping and the static
//! star-point table.
//!
//! ## Units
//! - 1 unit = 1 millimeter
//! - board top surface is the `z = 0` plane, `+z` points up out of the board

pub mod grid;
pub mod star_points;

pub use grid::{Grid, LatticePoint};
pub use star_points::{SUPPORTED_SIZES, star_points, star_points_for};
