use proptest::prelude::*;
use voxmesh_blocks::{BlockType, UvAtlas};
use voxmesh_geom::Vec3;
use voxmesh_grid::{TerrainConfig, VoxelGrid, generate};
use voxmesh_mesh_cpu::{
    Face, FaceCounter, MeshBuffer, Vertex, count_exposed_faces, count_exposed_faces_par,
    exposed_faces, mesh_chunk, mesh_into,
};

fn arb_grid() -> impl Strategy<Value = VoxelGrid> {
    (1usize..7, 1usize..7, 1usize..7).prop_flat_map(|(sx, sy, sz)| {
        prop::collection::vec(0u8..BlockType::COUNT as u8, sx * sy * sz).prop_map(move |codes| {
            let blocks = codes
                .into_iter()
                .filter_map(BlockType::from_code)
                .collect::<Vec<_>>();
            VoxelGrid::from_blocks(sx, sy, sz, blocks).unwrap()
        })
    })
}

fn isolated() -> VoxelGrid {
    let mut g = VoxelGrid::new(3, 3, 3).unwrap();
    g.set(1, 1, 1, BlockType::Grass);
    g
}

#[test]
fn isolated_cell_is_a_closed_cube() {
    let mesh = mesh_chunk(&isolated(), &UvAtlas::default()).unwrap();
    assert_eq!(mesh.stats.faces, 6);
    assert_eq!(mesh.buffer.vertex_count(), 36);
    assert_eq!(mesh.buffer.triangle_count(), 12);
    let bb = mesh.stats.bounds.unwrap();
    assert_eq!(bb.min, Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(bb.max, Vec3::new(2.0, 2.0, 2.0));
}

#[test]
fn isolated_cell_has_one_face_per_direction() {
    let mesh = mesh_chunk(&isolated(), &UvAtlas::default()).unwrap();
    let normals: Vec<[f32; 3]> = mesh.buffer.triangles().map(|t| t[0].normal).collect();
    assert_eq!(normals.len(), 12);
    for face in Face::ALL {
        let n = normals.iter().filter(|&&n| n == face.normal_array()).count();
        assert_eq!(n, 2, "{face:?} should own exactly two triangles");
    }
}

#[test]
fn single_cell_grid_matches_isolated_cell() {
    let mut one = VoxelGrid::new(1, 1, 1).unwrap();
    one.set(0, 0, 0, BlockType::Grass);
    let atlas = UvAtlas::default();
    let a = mesh_chunk(&one, &atlas).unwrap();
    let b = mesh_chunk(&isolated(), &atlas).unwrap();
    assert_eq!(a.buffer.vertex_count(), b.buffer.vertex_count());
    let shift = Vec3::ONE;
    for (va, vb) in a.buffer.triangles().flatten().zip(b.buffer.triangles().flatten()) {
        assert_eq!(Vec3::from(va.position) + shift, Vec3::from(vb.position));
        assert_eq!(va.normal, vb.normal);
        assert_eq!(va.uv, vb.uv);
    }
}

#[test]
fn interior_cell_is_fully_hidden() {
    let mut g = VoxelGrid::new(3, 3, 3).unwrap();
    g.fill(BlockType::Dirt);
    assert!(exposed_faces(&g, 1, 1, 1).is_empty());
    // 3x3 cube: 9 visible faces per side
    assert_eq!(count_exposed_faces(&g), 54);
}

#[test]
fn empty_grid_yields_empty_mesh() {
    let g = VoxelGrid::new(4, 4, 4).unwrap();
    let mesh = mesh_chunk(&g, &UvAtlas::default()).unwrap();
    assert!(mesh.buffer.is_empty());
    assert!(mesh.buffer.is_complete());
    assert!(mesh.stats.bounds.is_none());
}

#[test]
fn generated_chunk_meshes_exactly() {
    let mut g = VoxelGrid::new(16, 16, 16).unwrap();
    generate(&mut g, &TerrainConfig::default(), 42);
    let mesh = mesh_chunk(&g, &UvAtlas::default()).unwrap();
    assert!(mesh.buffer.is_complete());
    assert_eq!(mesh.stats.faces, count_exposed_faces(&g));
    assert_eq!(mesh.stats.faces, count_exposed_faces_par(&g));
    // no geometry above the top layer
    assert!(mesh.stats.bounds.unwrap().max.y <= 11.0);
}

#[test]
fn growable_sink_matches_exact_buffer() {
    let mut g = VoxelGrid::new(5, 5, 5).unwrap();
    generate(&mut g, &TerrainConfig::default(), 9);
    let atlas = UvAtlas::default();
    let exact = mesh_chunk(&g, &atlas).unwrap();
    let mut grown: Vec<Vertex> = Vec::new();
    mesh_into(&g, &atlas, &mut grown).unwrap();
    assert_eq!(grown.len(), exact.buffer.vertex_count());
    for (i, v) in grown.iter().enumerate() {
        assert_eq!(Some(*v), exact.buffer.vertex(i));
    }
}

proptest! {
    #[test]
    fn vertex_count_is_six_per_counted_face(g in arb_grid()) {
        let faces = count_exposed_faces(&g);
        let mut counter = FaceCounter::default();
        let written = mesh_into(&g, &UvAtlas::default(), &mut counter).unwrap();
        prop_assert_eq!(written, faces);
        prop_assert_eq!(counter.vertices, 6 * faces);
        prop_assert_eq!(counter.faces(), faces);
    }

    #[test]
    fn parallel_count_matches_sequential(g in arb_grid()) {
        prop_assert_eq!(count_exposed_faces_par(&g), count_exposed_faces(&g));
    }

    #[test]
    fn stored_normals_match_winding(g in arb_grid()) {
        let mesh = mesh_chunk(&g, &UvAtlas::default()).unwrap();
        for [a, b, c] in mesh.buffer.triangles() {
            let (pa, pb, pc) = (Vec3::from(a.position), Vec3::from(b.position), Vec3::from(c.position));
            let geo = (pb - pa).cross(pc - pa);
            prop_assert_eq!(geo, Vec3::from(a.normal));
            prop_assert_eq!(a.normal, b.normal);
            prop_assert_eq!(a.normal, c.normal);
        }
    }

    #[test]
    fn uvs_come_from_the_cell_block_region(g in arb_grid()) {
        let atlas = UvAtlas::default();
        let mesh = mesh_chunk(&g, &atlas).unwrap();
        for tri in mesh.buffer.triangles() {
            // the cell is the min corner of the triangle's face, pulled back along the normal
            let n = Vec3::from(tri[0].normal);
            let min = tri
                .iter()
                .map(|v| Vec3::from(v.position))
                .fold(Vec3::new(f32::MAX, f32::MAX, f32::MAX), Vec3::min);
            let cell = min - Vec3::new(n.x.max(0.0), n.y.max(0.0), n.z.max(0.0));
            let block = g.block_at(cell.x as usize, cell.y as usize, cell.z as usize);
            let region = atlas.region(block).unwrap();
            for v in &tri {
                prop_assert!(region.corners().contains(&v.uv));
            }
        }
    }

    #[test]
    fn meshing_is_deterministic(g in arb_grid()) {
        let atlas = UvAtlas::default();
        let a = mesh_chunk(&g, &atlas).unwrap();
        let mut b = MeshBuffer::with_faces(count_exposed_faces(&g));
        mesh_into(&g, &atlas, &mut b).unwrap();
        let bits = |xs: &[f32]| xs.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(bits(a.buffer.positions()), bits(b.positions()));
        prop_assert_eq!(bits(a.buffer.normals()), bits(b.normals()));
        prop_assert_eq!(bits(a.buffer.texcoords()), bits(b.texcoords()));
    }
}
