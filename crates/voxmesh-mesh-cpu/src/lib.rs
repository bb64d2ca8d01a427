//! CPU cube mesher: face culling against solid neighbours and non-indexed
//! triangle emission into a pre-sized buffer.
#![forbid(unsafe_code)]

pub mod emit;
pub mod error;
pub mod face;
pub mod mesh_build;
pub mod mesher;
pub mod sink;

pub use emit::emit_cube_face;
pub use error::MeshError;
pub use face::{Axis, FACE_QUADS, Face, FaceQuad, QUAD_TRIANGLES};
pub use mesh_build::MeshBuffer;
pub use mesher::{
    ChunkMesh, FaceMask, MeshStats, count_exposed_faces, count_exposed_faces_par, exposed_faces,
    mesh_chunk, mesh_into,
};
pub use sink::{FaceCounter, Vertex, VertexSink};

/// Vertices written per exposed face (two triangles, no sharing).
pub const VERTICES_PER_FACE: usize = 6;
/// Triangles written per exposed face.
pub const TRIANGLES_PER_FACE: usize = 2;
