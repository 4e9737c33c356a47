//! Mesh Buffers
//!
//! Indexed triangle meshes in a GPU-ready layout. Solids are built by pushing
//! faces into a `Mesh` and by appending whole meshes under a rigid transform,
//! which offsets the incoming indices by the current vertex count.

use bytemuck::{Pod, Zeroable};
use glam::{Affine3A, Vec2, Vec3};
use std::ops::Range;

/// Vertex format for board and stone meshes.
///
/// - position: vec3<f32> at @location(0)
/// - normal: vec3<f32> at @location(1)
/// - uv: vec2<f32> at @location(2)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GobanVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(GobanVertex, [u8; 32]);

impl GobanVertex {
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
        // position: Float32x3 @ offset 0
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        },
        // normal: Float32x3 @ offset 12
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 12,
            shader_location: 1,
        },
        // uv: Float32x2 @ offset 24
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 24,
            shader_location: 2,
        },
    ];

    /// Vertex buffer layout for render pipelines consuming these meshes.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GobanVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// An indexed triangle list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<GobanVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Pushes a vertex and returns its index.
    pub fn push_vertex(&mut self, vertex: GobanVertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Pushes a flat quad and returns the range of indices it occupies.
    ///
    /// Corners are given counter-clockwise as seen from the side `normal` points
    /// to, with their texture coordinates.
    pub fn push_quad(&mut self, corners: [Vec3; 4], uvs: [Vec2; 4], normal: Vec3) -> Range<u32> {
        let start = self.indices.len() as u32;
        let base = self.vertices.len() as u32;
        for (corner, uv) in corners.into_iter().zip(uvs) {
            self.vertices.push(GobanVertex::new(corner, normal, uv));
        }
        self.push_triangle(base, base + 1, base + 2);
        self.push_triangle(base, base + 2, base + 3);
        start..self.indices.len() as u32
    }

    /// Appends another mesh unchanged.
    pub fn append(&mut self, other: &Mesh) {
        self.append_transformed(other, &Affine3A::IDENTITY);
    }

    /// Appends another mesh after applying a rigid transform to it.
    ///
    /// Normals are rotated with the transform and renormalized.
    pub fn append_transformed(&mut self, other: &Mesh, transform: &Affine3A) {
        let base = self.vertices.len() as u32;
        self.vertices.reserve(other.vertices.len());
        self.indices.reserve(other.indices.len());

        self.vertices.extend(other.vertices.iter().map(|v| {
            GobanVertex::new(
                transform.transform_point3(v.position()),
                transform.transform_vector3(v.normal()).normalize_or_zero(),
                v.uv(),
            )
        }));
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.vertices.iter().map(GobanVertex::position);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    /// Raw vertex bytes for upload into a vertex buffer.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes (`u32`) for upload into an index buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
