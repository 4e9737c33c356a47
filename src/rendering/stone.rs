//! Stone Solid Builder
//!
//! Builds a biconvex lens (two spherical caps fused rim to rim) whose overall
//! diameter and thickness match the requested values exactly, for any
//! proportions thinner than a sphere.
//!
//! # Construction
//!
//! With `r = diameter / 2` and `h = thickness / 2`, a cap of height `h` over a
//! base of radius `r` lies on a sphere of radius
//!
//! ```text
//! R = (r² + h²) / (2h)        φ = atan(r / (R - h))
//! ```
//!
//! where `φ` is the cap's polar half-angle. One cap mesh is generated with its
//! rim on the `z = 0` plane (the sphere center sits at `z = -(R - h)`), then
//! appended twice: lifted by `h` for the upper half, and turned over about the
//! X axis and lifted by `h` for the lower half. The finished stone spans
//! `z ∈ [0, thickness]` with its rim plane at `z = h`, so it rests on the board's
//! `z = 0` surface when placed at an intersection.
//!
//! The cap is evaluated in `f64` and rounded once into the vertex buffer.

use glam::{Affine3A, DVec3, Mat3, Vec2, Vec3};
use std::f64::consts::TAU;

use crate::config::StoneConfig;
use crate::error::{GobanError, GobanResult, ensure_positive};
use crate::render::{GobanVertex, Mesh};

/// Segments around the vertical axis used by [`StoneSpec::new`].
pub const DEFAULT_WIDTH_SEGMENTS: u32 = 32;
/// Pole-to-rim segments per cap used by [`StoneSpec::new`].
pub const DEFAULT_HEIGHT_SEGMENTS: u32 = 32;

/// Target stone dimensions plus the caller's material handle.
#[derive(Clone, Debug, PartialEq)]
pub struct StoneSpec<M> {
    diameter: f32,
    thickness: f32,
    width_segments: u32,
    height_segments: u32,
    material: M,
}

impl<M> StoneSpec<M> {
    /// Validates the target size.
    ///
    /// Both values must be finite and positive, and the stone must be thinner
    /// than it is wide; otherwise the two caps would not form a lens.
    pub fn new(diameter: f32, thickness: f32, material: M) -> GobanResult<Self> {
        let diameter = ensure_positive("stone diameter", diameter)?;
        let thickness = ensure_positive("stone thickness", thickness)?;
        if thickness >= diameter {
            return Err(GobanError::DegenerateStone {
                diameter,
                thickness,
            });
        }
        Ok(Self {
            diameter,
            thickness,
            width_segments: DEFAULT_WIDTH_SEGMENTS,
            height_segments: DEFAULT_HEIGHT_SEGMENTS,
            material,
        })
    }

    pub fn from_config(config: &StoneConfig, material: M) -> GobanResult<Self> {
        Self::new(config.diameter, config.thickness, material)?
            .with_segments(config.width_segments, config.height_segments)
    }

    /// Sets the mesh resolution: at least 3 around, at least 1 pole to rim.
    ///
    /// The finished lens (two caps of `(width + 1) * (height + 1)` vertices) must
    /// stay addressable by `u32` indices.
    pub fn with_segments(mut self, width_segments: u32, height_segments: u32) -> GobanResult<Self> {
        if width_segments < 3 {
            return Err(GobanError::InvalidDimension {
                name: "stone width segments",
                value: width_segments as f32,
                requirement: ">= 3",
            });
        }
        if height_segments < 1 {
            return Err(GobanError::InvalidDimension {
                name: "stone height segments",
                value: height_segments as f32,
                requirement: ">= 1",
            });
        }
        let count = 2 * (u64::from(width_segments) + 1) * (u64::from(height_segments) + 1);
        if count > u64::from(u32::MAX) {
            return Err(GobanError::TooManyVertices { count });
        }
        self.width_segments = width_segments;
        self.height_segments = height_segments;
        Ok(self)
    }

    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn material(&self) -> &M {
        &self.material
    }

    fn radius(&self) -> f64 {
        f64::from(self.diameter) / 2.0
    }

    fn half_thickness(&self) -> f64 {
        f64::from(self.thickness) / 2.0
    }

    /// Radius `R` of the sphere both caps are cut from.
    pub fn sphere_radius(&self) -> f64 {
        let (r, h) = (self.radius(), self.half_thickness());
        (r * r + h * h) / (2.0 * h)
    }

    /// Polar half-angle `φ` of each cap, in radians.
    pub fn cap_angle(&self) -> f64 {
        let (r, h) = (self.radius(), self.half_thickness());
        (r / (self.sphere_radius() - h)).atan()
    }

    /// One cap with its pole on `+z` and its rim on the `z = 0` plane.
    fn cap_mesh(&self) -> Mesh {
        let big_r = self.sphere_radius();
        let phi = self.cap_angle();
        let drop = big_r - self.half_thickness();
        let (ws, hs) = (self.width_segments, self.height_segments);
        let ring = ws + 1;

        let mut mesh = Mesh::with_capacity(
            ring as usize * (hs as usize + 1),
            ws as usize * (2 * hs as usize - 1) * 3,
        );
        for i in 0..=hs {
            let v = f64::from(i) / f64::from(hs);
            let theta = phi * v;
            for j in 0..=ws {
                let u = f64::from(j) / f64::from(ws);
                let psi = TAU * u;
                let normal = DVec3::new(theta.sin() * psi.cos(), theta.sin() * psi.sin(), theta.cos());
                let position = normal * big_r - DVec3::new(0.0, 0.0, drop);
                mesh.push_vertex(GobanVertex::new(
                    position.as_vec3(),
                    normal.as_vec3(),
                    Vec2::new(u as f32, v as f32),
                ));
            }
        }

        for i in 0..hs {
            for j in 0..ws {
                let a = i * ring + j;
                let b = a + 1;
                let d = a + ring;
                let c = d + 1;
                // the first ring collapses onto the pole, so its second triangle is empty
                if i > 0 {
                    mesh.push_triangle(a, c, b);
                }
                mesh.push_triangle(a, d, c);
            }
        }
        mesh
    }

    /// Builds the lens solid resting on `z = 0`.
    pub fn build_solid(&self) -> StoneSolid<M>
    where
        M: Clone,
    {
        let cap = self.cap_mesh();
        let lift = Vec3::new(0.0, 0.0, self.half_thickness() as f32);
        let upper = Affine3A::from_translation(lift);
        // half turn about X, written out so the flip is exact
        let lower = Affine3A::from_mat3_translation(Mat3::from_cols(Vec3::X, Vec3::NEG_Y, Vec3::NEG_Z), lift);

        let mut mesh = Mesh::with_capacity(cap.vertex_count() * 2, cap.indices.len() * 2);
        mesh.append_transformed(&cap, &upper);
        mesh.append_transformed(&cap, &lower);

        tracing::debug!(
            diameter = self.diameter,
            thickness = self.thickness,
            sphere_radius = self.sphere_radius(),
            cap_angle = self.cap_angle(),
            triangles = mesh.triangle_count(),
            "built stone solid"
        );

        StoneSolid {
            mesh,
            material: self.material.clone(),
            diameter: self.diameter,
            thickness: self.thickness,
        }
    }
}

/// A built stone: a closed lens mesh drawn with one caller material.
#[derive(Clone, Debug)]
pub struct StoneSolid<M> {
    mesh: Mesh,
    material: M,
    diameter: f32,
    thickness: f32,
}

impl<M> StoneSolid<M> {
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn material(&self) -> &M {
        &self.material
    }

    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn into_parts(self) -> (Mesh, M) {
        (self.mesh, self.material)
    }
}
