use voxmesh_geom::{Aabb, Vec3, bounds_of};

use crate::sink::{Vertex, VertexSink};
use crate::{TRIANGLES_PER_FACE, VERTICES_PER_FACE};

/// Exact-size, non-indexed triangle buffer with parallel position/normal/UV arrays.
///
/// Capacity is fixed when the buffer is created from the face count of the
/// counting pass; a running cursor fills it one vertex at a time.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuffer {
    pos: Vec<f32>,
    norm: Vec<f32>,
    uv: Vec<f32>,
    capacity: usize,
    cursor: usize,
}

impl MeshBuffer {
    /// Room for exactly `faces` faces (six vertices each).
    pub fn with_faces(faces: usize) -> Self {
        Self::with_vertices(faces * VERTICES_PER_FACE)
    }

    pub fn with_vertices(vertices: usize) -> Self {
        Self {
            pos: vec![0.0; vertices * 3],
            norm: vec![0.0; vertices * 3],
            uv: vec![0.0; vertices * 2],
            capacity: vertices,
            cursor: 0,
        }
    }

    /// Resizes for `faces` faces and rewinds the cursor, keeping the allocations.
    pub fn reset(&mut self, faces: usize) {
        let vertices = faces * VERTICES_PER_FACE;
        self.pos.clear();
        self.pos.resize(vertices * 3, 0.0);
        self.norm.clear();
        self.norm.resize(vertices * 3, 0.0);
        self.uv.clear();
        self.uv.resize(vertices * 2, 0.0);
        self.capacity = vertices;
        self.cursor = 0;
    }

    /// Reserved vertex slots.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.capacity / 3
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.capacity / VERTICES_PER_FACE
    }

    /// Vertices written so far.
    #[inline]
    pub fn written(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.cursor == self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Vertex positions (x,y,z per vertex).
    pub fn positions(&self) -> &[f32] {
        &self.pos
    }

    /// Vertex normals (x,y,z per vertex).
    pub fn normals(&self) -> &[f32] {
        &self.norm
    }

    /// Texture coordinates (u,v per vertex).
    pub fn texcoords(&self) -> &[f32] {
        &self.uv
    }

    pub fn vertex(&self, i: usize) -> Option<Vertex> {
        if i >= self.cursor {
            return None;
        }
        let p = &self.pos[i * 3..i * 3 + 3];
        let n = &self.norm[i * 3..i * 3 + 3];
        let t = &self.uv[i * 2..i * 2 + 2];
        Some(Vertex {
            position: [p[0], p[1], p[2]],
            normal: [n[0], n[1], n[2]],
            uv: [t[0], t[1]],
        })
    }

    /// Written triangles in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        (0..self.cursor / 3).filter_map(move |t| {
            Some([
                self.vertex(t * 3)?,
                self.vertex(t * 3 + 1)?,
                self.vertex(t * 3 + 2)?,
            ])
        })
    }

    /// Bounds of the written positions.
    pub fn bounds(&self) -> Option<Aabb> {
        bounds_of(
            self.pos[..self.cursor * 3]
                .chunks_exact(3)
                .map(|p| Vec3::new(p[0], p[1], p[2])),
        )
    }
}

impl VertexSink for MeshBuffer {
    /// # Panics
    /// When more vertices are emitted than the buffer was sized for.
    #[inline]
    fn emit(&mut self, position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) {
        let i = self.cursor;
        assert!(
            i < self.capacity,
            "mesh buffer overflow: {} vertex slots reserved",
            self.capacity
        );
        self.pos[i * 3..i * 3 + 3].copy_from_slice(&position);
        self.norm[i * 3..i * 3 + 3].copy_from_slice(&normal);
        self.uv[i * 2..i * 2 + 2].copy_from_slice(&uv);
        self.cursor += 1;
    }
}

const _: () = assert!(VERTICES_PER_FACE == TRIANGLES_PER_FACE * 3);
