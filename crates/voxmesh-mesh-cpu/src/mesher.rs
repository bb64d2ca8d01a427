use std::time::{Duration, Instant};

use rayon::prelude::*;
use voxmesh_blocks::UvAtlas;
use voxmesh_geom::{Aabb, Vec3};
use voxmesh_grid::VoxelGrid;

use crate::emit::emit_cube_face;
use crate::error::MeshError;
use crate::face::Face;
use crate::mesh_build::MeshBuffer;
use crate::sink::VertexSink;

/// Set of faces, one bit per [`Face::index`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FaceMask(u8);

impl FaceMask {
    pub const EMPTY: FaceMask = FaceMask(0);
    pub const ALL: FaceMask = FaceMask(0b11_1111);

    #[inline]
    pub fn insert(&mut self, face: Face) {
        self.0 |= 1 << face.index();
    }

    #[inline]
    pub fn contains(self, face: Face) -> bool {
        self.0 & (1 << face.index()) != 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Faces in [`Face::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

/// Faces of cell `(x, y, z)` whose neighbour is not solid. Empty for non-solid cells.
#[inline]
pub fn exposed_faces(grid: &VoxelGrid, x: i32, y: i32, z: i32) -> FaceMask {
    let mut mask = FaceMask::EMPTY;
    if !grid.solid_at(x, y, z) {
        return mask;
    }
    for face in Face::ALL {
        let (dx, dy, dz) = face.delta();
        if !grid.solid_at(x + dx, y + dy, z + dz) {
            mask.insert(face);
        }
    }
    mask
}

/// Counting pass: total exposed faces over the whole grid.
pub fn count_exposed_faces(grid: &VoxelGrid) -> usize {
    let (sx, sy, sz) = grid.dims();
    let mut count = 0usize;
    for x in 0..sx as i32 {
        for y in 0..sy as i32 {
            for z in 0..sz as i32 {
                count += exposed_faces(grid, x, y, z).len();
            }
        }
    }
    count
}

/// Counting pass split over `z` slices on the rayon pool. Same result as
/// [`count_exposed_faces`]; slices without a solid block are skipped.
pub fn count_exposed_faces_par(grid: &VoxelGrid) -> usize {
    let (sx, sy, sz) = grid.dims();
    (0..sz)
        .into_par_iter()
        .filter(|&z| grid.z_slice(z).iter().any(|b| b.is_solid()))
        .map(|z| {
            let z = z as i32;
            let mut count = 0usize;
            for y in 0..sy as i32 {
                for x in 0..sx as i32 {
                    count += exposed_faces(grid, x, y, z).len();
                }
            }
            count
        })
        .sum()
}

/// Emit pass: writes every exposed face into `sink`, scanning `x`, then `y`,
/// then `z` innermost. Returns the number of faces written.
///
/// Fails on the first solid block without an atlas region; the sink may then
/// hold a partial mesh.
pub fn mesh_into(
    grid: &VoxelGrid,
    atlas: &UvAtlas,
    sink: &mut impl VertexSink,
) -> Result<usize, MeshError> {
    let (sx, sy, sz) = grid.dims();
    let mut faces = 0usize;
    for x in 0..sx {
        for y in 0..sy {
            for z in 0..sz {
                let mask = exposed_faces(grid, x as i32, y as i32, z as i32);
                if mask.is_empty() {
                    continue;
                }
                let region = atlas
                    .region(grid.block_at(x, y, z))
                    .map_err(|source| MeshError::Atlas { x, y, z, source })?;
                let origin = Vec3::from_cell(x, y, z);
                for face in mask.iter() {
                    emit_cube_face(sink, origin, face, &region);
                    faces += 1;
                }
            }
        }
    }
    Ok(faces)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshStats {
    pub solid_cells: usize,
    pub faces: usize,
    pub vertices: usize,
    pub triangles: usize,
    pub elapsed: Duration,
    pub bounds: Option<Aabb>,
}

#[derive(Clone, Debug)]
pub struct ChunkMesh {
    pub buffer: MeshBuffer,
    pub stats: MeshStats,
}

/// Counts, allocates the exact buffer, then fills it.
pub fn mesh_chunk(grid: &VoxelGrid, atlas: &UvAtlas) -> Result<ChunkMesh, MeshError> {
    let t0 = Instant::now();
    let faces = count_exposed_faces(grid);
    let mut buffer = MeshBuffer::with_faces(faces);
    let written = mesh_into(grid, atlas, &mut buffer)?;
    debug_assert_eq!(written, faces, "count and emit passes disagree");
    debug_assert!(buffer.is_complete());

    let stats = MeshStats {
        solid_cells: grid.solid_count(),
        faces: written,
        vertices: buffer.vertex_count(),
        triangles: buffer.triangle_count(),
        elapsed: t0.elapsed(),
        bounds: buffer.bounds(),
    };
    let (sx, sy, sz) = grid.dims();
    log::debug!(
        "meshed {}x{}x{} grid: solid={} faces={} verts={} tris={} in {:.2?}",
        sx,
        sy,
        sz,
        stats.solid_cells,
        stats.faces,
        stats.vertices,
        stats.triangles,
        stats.elapsed
    );
    Ok(ChunkMesh { buffer, stats })
}
