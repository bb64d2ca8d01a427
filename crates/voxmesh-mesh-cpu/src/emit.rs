use voxmesh_blocks::UvRegion;
use voxmesh_geom::Vec3;

use crate::face::{FACE_QUADS, Face, QUAD_TRIANGLES};
use crate::sink::VertexSink;

#[inline]
/// Appends the two triangles (six vertices) of one cube face at `origin`.
pub fn emit_cube_face(sink: &mut impl VertexSink, origin: Vec3, face: Face, region: &UvRegion) {
    let quad = &FACE_QUADS[face.index()];
    let normal = face.normal_array();
    for &corner in &QUAD_TRIANGLES {
        let p = origin + quad.offset(corner);
        let (s_hi, t_hi) = quad.tex[corner];
        sink.emit(p.to_array(), normal, region.corner(s_hi, t_hi));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Vertex;

    #[test]
    fn one_face_is_six_vertices_on_the_face_plane() {
        let region = UvRegion::new(0.5, 0.0, 0.75, 1.0);
        let mut out: Vec<Vertex> = Vec::new();
        emit_cube_face(&mut out, Vec3::new(2.0, 3.0, 4.0), Face::Up, &region);
        assert_eq!(out.len(), 6);
        for v in &out {
            assert_eq!(v.position[1], 4.0);
            assert!((2.0..=3.0).contains(&v.position[0]));
            assert!((4.0..=5.0).contains(&v.position[2]));
            assert_eq!(v.normal, [0.0, 1.0, 0.0]);
            assert!(region.corners().contains(&v.uv));
        }
        // triangles share the quad diagonal
        assert_eq!(out[0], out[3]);
        assert_eq!(out[2], out[4]);
    }

    #[test]
    fn negative_faces_sit_at_the_origin_plane() {
        let region = UvRegion::new(0.0, 0.0, 0.25, 1.0);
        for (face, axis) in [(Face::East, 0), (Face::Down, 1), (Face::North, 2)] {
            let mut out: Vec<Vertex> = Vec::new();
            emit_cube_face(&mut out, Vec3::new(1.0, 1.0, 1.0), face, &region);
            assert!(out.iter().all(|v| v.position[axis] == 1.0), "{face:?}");
        }
    }
}
