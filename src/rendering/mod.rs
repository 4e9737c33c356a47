//! Rendering Module
//!
//! The Go set's solids: the board prism and the lens-shaped stones. Both come out
//! as plain mesh buffers plus material assignments for the renderer to draw.
//!
//! # Modules
//!
//! - [`board`] - board dimensions, face/material regions and overlay setup
//! - [`stone`] - closed-form biconvex stone construction

pub mod board;
pub mod stone;

// Re-export commonly used types
pub use board::{BoardDimensions, BoardFace, BoardSolid, BoardSpec, FaceGroup, MaterialSlot};
pub use stone::{StoneSolid, StoneSpec};
