//! Raylib-based GPU glue: conversions, mesh upload, atlas texture, lighting shader.
// Unsafe is required for Raylib mesh/model upload and material shader binding.

pub mod atlas_texture;
pub mod error;
pub mod lighting;
pub mod upload;

pub use atlas_texture::build_atlas_texture;
pub use error::RenderError;
pub use lighting::{Light, LightId, LightKind, LightRegistry, LightUniforms, LightingShader, MAX_LIGHTS};
pub use upload::{set_model_albedo, upload_mesh};

pub mod conv {
    use voxmesh_geom::Vec3;

    pub fn vec3_to_rl(v: Vec3) -> raylib::prelude::Vector3 {
        raylib::prelude::Vector3::new(v.x, v.y, v.z)
    }

    pub fn color_to_rl(c: [u8; 4]) -> raylib::prelude::Color {
        raylib::prelude::Color::new(c[0], c[1], c[2], c[3])
    }
}
