//! Goban Engine Library
//!
//! Procedural geometry and textures for a Go set: a gridded board and
//! lens-shaped stones, generated from a handful of physical dimensions and
//! handed to a renderer as mesh buffers and bitmaps.
//!
//! # Modules
//!
//! - [`world`] - lattice-to-scene coordinate grid and star-point table
//! - [`render`] - mesh buffers, overlay texture baking, viewport helpers
//! - [`rendering`] - board and stone solid builders
//! - [`config`] - serde configuration with the classic dimensions as defaults
//! - [`error`] - construction errors
//!
//! # Example
//!
//! ```ignore
//! use goban_engine::{BoardSpec, LatticePoint, StoneSpec};
//!
//! let board = BoardSpec::new(19, 19)?;
//! let board_solid = board.build_solid();
//! let overlay = board.overlay(10.0)?.bake();
//!
//! let black = StoneSpec::new(24.0, 9.8, "black")?.build_solid();
//! let at = board.stone_position(LatticePoint::new(3, 3));
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod world;

// Board and stone builders (located in src/rendering/ directory)
#[path = "../../src/rendering/mod.rs"]
pub mod rendering;

pub use config::{BoardConfig, GobanConfig, Margins, OverlayConfig, StoneConfig};
pub use error::{GobanError, GobanResult};
pub use render::{BakedOverlay, GobanVertex, Mesh, OverlayStyle, OverlayTexture};
pub use rendering::{BoardDimensions, BoardFace, BoardSolid, BoardSpec, MaterialSlot, StoneSolid, StoneSpec};
pub use world::{Grid, LatticePoint, star_points};
