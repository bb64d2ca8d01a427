use std::path::Path;

use raylib::prelude::*;
use serde::Deserialize;
use voxmesh_geom::Vec3;

use crate::error::RenderError;

/// Upper bound; must match `MAX_LIGHTS` in `lighting.fs`.
pub const MAX_LIGHTS: usize = 4;

/// Matches the `type` integer the fragment shader switches on.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    Directional = 0,
    Point = 1,
}

/// Uniform access needed by [`LightRegistry`]. Locations below zero are unused
/// uniforms and are skipped by the setters.
pub trait LightUniforms {
    fn location(&self, name: &str) -> i32;
    fn set_int(&mut self, loc: i32, v: i32);
    fn set_vec3(&mut self, loc: i32, v: [f32; 3]);
    fn set_vec4(&mut self, loc: i32, v: [f32; 4]);
}

pub struct LightingShader {
    pub shader: raylib::shaders::WeakShader,
    pub loc_view_pos: i32,
    pub loc_ambient: i32,
}

impl LightingShader {
    /// Loads `lighting.vs` / `lighting.fs` from `shaders_dir`.
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        shaders_dir: &Path,
    ) -> Result<Self, RenderError> {
        let vs = shaders_dir.join("lighting.vs");
        let fs = shaders_dir.join("lighting.fs");
        for p in [&vs, &fs] {
            if !p.exists() {
                return Err(RenderError::ShaderMissing(p.clone()));
            }
        }
        let shader_strong = rl.load_shader(
            thread,
            Some(vs.to_string_lossy().as_ref()),
            Some(fs.to_string_lossy().as_ref()),
        );
        let shader = unsafe { shader_strong.make_weak() };
        // raylib falls back to its default shader when compilation fails
        let raw: &raylib::ffi::Shader = shader.as_ref();
        if raw.id == unsafe { raylib::ffi::rlGetShaderIdDefault() } {
            return Err(RenderError::ShaderInvalid { vs, fs });
        }
        let loc_view_pos = shader.get_shader_location("viewPos");
        let loc_ambient = shader.get_shader_location("ambient");
        log::info!(target: "render", "lighting shader loaded from {}", shaders_dir.display());
        Ok(Self {
            shader,
            loc_view_pos,
            loc_ambient,
        })
    }

    /// Sets the ambient term as a grey `[level, level, level, 1]`.
    pub fn set_ambient(&mut self, level: f32) {
        self.set_vec4(self.loc_ambient, [level, level, level, 1.0]);
    }

    pub fn update_view(&mut self, camera_pos: Vector3) {
        self.set_vec3(self.loc_view_pos, [camera_pos.x, camera_pos.y, camera_pos.z]);
    }

    /// Makes this shader the one used by every material of `model`.
    pub fn apply_to(&self, model: &mut Model) {
        for mat in model.materials_mut() {
            let dest = mat.shader_mut();
            let dest_ptr: *mut raylib::ffi::Shader = dest.as_mut();
            let src_ptr: *const raylib::ffi::Shader = self.shader.as_ref();
            unsafe {
                std::ptr::copy_nonoverlapping(src_ptr, dest_ptr, 1);
            }
        }
    }
}

impl LightUniforms for LightingShader {
    fn location(&self, name: &str) -> i32 {
        self.shader.get_shader_location(name)
    }

    fn set_int(&mut self, loc: i32, v: i32) {
        if loc >= 0 {
            self.shader.set_shader_value(loc, v);
        }
    }

    fn set_vec3(&mut self, loc: i32, v: [f32; 3]) {
        if loc >= 0 {
            self.shader.set_shader_value(loc, v);
        }
    }

    fn set_vec4(&mut self, loc: i32, v: [f32; 4]) {
        if loc >= 0 {
            self.shader
                .set_shader_value(loc, Vector4::new(v[0], v[1], v[2], v[3]));
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct LightLocs {
    enabled: i32,
    kind: i32,
    position: i32,
    target: i32,
    color: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub position: Vec3,
    pub target: Vec3,
    /// RGBA in `[0, 1]`.
    pub color: [f32; 4],
    pub enabled: bool,
    locs: LightLocs,
}

impl Light {
    fn push(&self, shader: &mut impl LightUniforms) {
        shader.set_int(self.locs.enabled, self.enabled as i32);
        shader.set_int(self.locs.kind, self.kind as i32);
        shader.set_vec3(self.locs.position, self.position.to_array());
        shader.set_vec3(self.locs.target, self.target.to_array());
        shader.set_vec4(self.locs.color, self.color);
    }
}

/// Slot index of a light inside its registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LightId(usize);

impl LightId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns the shader's light slots; each registry counts its own lights.
#[derive(Default, Debug)]
pub struct LightRegistry {
    lights: Vec<Light>,
}

impl LightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the next `lights[i]` slot, caches its uniform locations and
    /// pushes the initial values. `None` once [`MAX_LIGHTS`] are in use.
    pub fn add(
        &mut self,
        kind: LightKind,
        position: Vec3,
        target: Vec3,
        color: [u8; 4],
        shader: &mut impl LightUniforms,
    ) -> Option<LightId> {
        let i = self.lights.len();
        if i >= MAX_LIGHTS {
            log::warn!(target: "render", "light registry full ({MAX_LIGHTS}); {kind:?} light dropped");
            return None;
        }
        let locs = LightLocs {
            enabled: shader.location(&format!("lights[{i}].enabled")),
            kind: shader.location(&format!("lights[{i}].type")),
            position: shader.location(&format!("lights[{i}].position")),
            target: shader.location(&format!("lights[{i}].target")),
            color: shader.location(&format!("lights[{i}].color")),
        };
        let light = Light {
            kind,
            position,
            target,
            color: color.map(|c| c as f32 / 255.0),
            enabled: true,
            locs,
        };
        light.push(shader);
        self.lights.push(light);
        Some(LightId(i))
    }

    pub fn get(&self, id: LightId) -> Option<&Light> {
        self.lights.get(id.0)
    }

    pub fn get_mut(&mut self, id: LightId) -> Option<&mut Light> {
        self.lights.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    pub fn update_all(&self, shader: &mut impl LightUniforms) {
        for light in &self.lights {
            light.push(shader);
        }
    }
}
