use raylib::prelude::*;
use voxmesh_mesh_cpu::MeshBuffer;

use crate::error::RenderError;

/// Copies the written part of `buf` into raylib-owned memory, uploads it as a
/// static non-indexed mesh and wraps it in a single-material model.
pub fn upload_mesh(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    buf: &MeshBuffer,
) -> Result<Model, RenderError> {
    let v_count = buf.written();
    if v_count == 0 {
        return Err(RenderError::EmptyMesh);
    }
    let (vbytes, nbytes, tbytes) = attribute_bytes(v_count)?;
    let pos = &buf.positions()[..v_count * 3];
    let norm = &buf.normals()[..v_count * 3];
    let uv = &buf.texcoords()[..v_count * 2];

    let mut raw: raylib::ffi::Mesh = unsafe { std::mem::zeroed() };
    raw.vertexCount = v_count as i32;
    raw.triangleCount = (v_count / 3) as i32;
    unsafe {
        raw.vertices = raylib::ffi::MemAlloc(vbytes) as *mut f32;
        raw.normals = raylib::ffi::MemAlloc(nbytes) as *mut f32;
        raw.texcoords = raylib::ffi::MemAlloc(tbytes) as *mut f32;
        std::ptr::copy_nonoverlapping(pos.as_ptr(), raw.vertices, pos.len());
        std::ptr::copy_nonoverlapping(norm.as_ptr(), raw.normals, norm.len());
        std::ptr::copy_nonoverlapping(uv.as_ptr(), raw.texcoords, uv.len());
    }
    let mut mesh = unsafe { raylib::core::models::Mesh::from_raw(raw) };
    unsafe {
        mesh.upload(false);
    }
    let model = rl
        .load_model_from_mesh(thread, unsafe { mesh.make_weak() })
        .map_err(|e| RenderError::Model(e.to_string()))?;
    log::debug!(
        target: "render",
        "uploaded mesh verts={} tris={}",
        v_count,
        v_count / 3
    );
    Ok(model)
}

/// Byte sizes of the position, normal and texcoord arrays for `v_count`
/// vertices. `MemAlloc` takes a `u32` and raylib counts vertices and
/// triangles in `i32`, so anything that does not fit either is rejected.
fn attribute_bytes(v_count: usize) -> Result<(u32, u32, u32), RenderError> {
    let too_many = || RenderError::TooManyVertices(v_count);
    if i32::try_from(v_count).is_err() {
        return Err(too_many());
    }
    let bytes = |comps: usize| -> Result<u32, RenderError> {
        v_count
            .checked_mul(comps)
            .and_then(|n| n.checked_mul(std::mem::size_of::<f32>()))
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(too_many)
    };
    Ok((bytes(3)?, bytes(3)?, bytes(2)?))
}

/// Binds `texture` as the albedo map of every material of `model`.
pub fn set_model_albedo(model: &mut Model, texture: &Texture2D) {
    for mat in model.materials_mut() {
        mat.set_material_texture(
            raylib::consts::MaterialMapIndex::MATERIAL_MAP_ALBEDO,
            texture,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_bytes_for_a_cube() {
        assert_eq!(attribute_bytes(36), Ok((432, 432, 288)));
    }

    #[test]
    fn attribute_bytes_stop_at_the_u32_limit() {
        let max = u32::MAX as usize / 12;
        let (v, n, t) = attribute_bytes(max).unwrap();
        assert_eq!(v as usize, max * 12);
        assert_eq!(n, v);
        assert_eq!(t as usize, max * 8);
        assert_eq!(attribute_bytes(max + 1), Err(RenderError::TooManyVertices(max + 1)));
        assert_eq!(
            attribute_bytes(400_000_000),
            Err(RenderError::TooManyVertices(400_000_000))
        );
    }
}
