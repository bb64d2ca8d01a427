use std::error::Error;
use std::path::Path;
use std::time::Instant;

use raylib::prelude::*;
use voxmesh_blocks::UvAtlas;
use voxmesh_geom::Vec3;
use voxmesh_grid::{VoxelGrid, generate};
use voxmesh_mesh_cpu::{ChunkMesh, MeshStats, count_exposed_faces, mesh_chunk, mesh_into};
use voxmesh_render_raylib::{
    LightRegistry, LightingShader, build_atlas_texture, conv::vec3_to_rl, set_model_albedo,
    upload_mesh,
};

use crate::assets;
use crate::config::AppConfig;

const GRID_SLICES: i32 = 10;
const GRID_SPACING: f32 = 10.0;
const MARKER_RADIUS: f32 = 0.125;

/// One generated chunk and its CPU mesh.
pub struct ChunkScene {
    pub grid: VoxelGrid,
    pub mesh: ChunkMesh,
    pub seed: u64,
}

impl ChunkScene {
    pub fn build(cfg: &AppConfig, atlas: &UvAtlas, seed: u64) -> Result<Self, Box<dyn Error>> {
        let c = &cfg.chunk;
        let mut grid = VoxelGrid::from_dims(c.size_x, c.size_y, c.size_z)?;
        generate(&mut grid, &cfg.terrain, seed);
        let mesh = mesh_chunk(&grid, atlas)?;
        Ok(Self { grid, mesh, seed })
    }

    /// Regenerates with `seed` and refills the existing mesh buffer.
    pub fn regenerate(
        &mut self,
        cfg: &AppConfig,
        atlas: &UvAtlas,
        seed: u64,
    ) -> Result<(), Box<dyn Error>> {
        let t0 = Instant::now();
        generate(&mut self.grid, &cfg.terrain, seed);
        let faces = count_exposed_faces(&self.grid);
        self.mesh.buffer.reset(faces);
        let written = mesh_into(&self.grid, atlas, &mut self.mesh.buffer)?;
        self.mesh.stats = MeshStats {
            solid_cells: self.grid.solid_count(),
            faces: written,
            vertices: self.mesh.buffer.vertex_count(),
            triangles: self.mesh.buffer.triangle_count(),
            elapsed: t0.elapsed(),
            bounds: self.mesh.buffer.bounds(),
        };
        self.seed = seed;
        Ok(())
    }

    pub fn log_stats(&self) {
        let (sx, sy, sz) = self.grid.dims();
        let s = &self.mesh.stats;
        log::info!(
            "chunk {}x{}x{} seed={} solid={} faces={} verts={} tris={}",
            sx,
            sy,
            sz,
            self.seed,
            s.solid_cells,
            s.faces,
            s.vertices,
            s.triangles
        );
    }

    /// Offset that centres the chunk over the origin in x and z.
    pub fn draw_offset(&self) -> Vec3 {
        let (sx, _, sz) = self.grid.dims();
        Vec3::new(-(sx as f32) / 2.0, 0.0, -(sz as f32) / 2.0)
    }
}

fn upload_scene(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    scene: &ChunkScene,
    atlas_tex: &Texture2D,
    shader: Option<&LightingShader>,
) -> Option<Model> {
    match upload_mesh(rl, thread, &scene.mesh.buffer) {
        Ok(mut model) => {
            set_model_albedo(&mut model, atlas_tex);
            if let Some(ls) = shader {
                ls.apply_to(&mut model);
            }
            Some(model)
        }
        Err(e) => {
            log::warn!("chunk not drawn: {e}");
            None
        }
    }
}

pub fn run(
    cfg: &AppConfig,
    atlas: &UvAtlas,
    assets_root: &Path,
    mut scene: ChunkScene,
) -> Result<(), Box<dyn Error>> {
    let w = &cfg.window;
    let mut builder = raylib::init();
    builder.size(w.width, w.height).title(&w.title);
    if w.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    if w.target_fps > 0 {
        rl.set_target_fps(w.target_fps);
    }

    let atlas_tex = build_atlas_texture(&mut rl, &thread, atlas)?;

    let mut lighting = match LightingShader::load(&mut rl, &thread, &assets::shaders_dir(assets_root)) {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("lighting disabled: {e}");
            None
        }
    };
    let mut lights = LightRegistry::new();
    if let Some(ls) = lighting.as_mut() {
        ls.set_ambient(cfg.lighting.ambient);
        for l in &cfg.lighting.lights {
            lights.add(
                l.kind,
                Vec3::from(l.position),
                Vec3::from(l.target),
                l.color,
                ls,
            );
        }
        log::info!("{} lights active", lights.len());
    }

    let mut model = upload_scene(&mut rl, &thread, &scene, &atlas_tex, lighting.as_ref());

    let cam = &cfg.camera;
    let mut camera = Camera3D::perspective(
        Vector3::new(cam.position[0], cam.position[1], cam.position[2]),
        Vector3::new(cam.target[0], cam.target[1], cam.target[2]),
        Vector3::new(0.0, 1.0, 0.0),
        cam.fovy,
    );

    while !rl.window_should_close() {
        if cam.orbital {
            rl.update_camera(&mut camera, CameraMode::CAMERA_ORBITAL);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            let seed = scene.seed.wrapping_add(1);
            scene.regenerate(cfg, atlas, seed)?;
            scene.log_stats();
            // drop the old GPU mesh before uploading the new one
            drop(model.take());
            model = upload_scene(&mut rl, &thread, &scene, &atlas_tex, lighting.as_ref());
        }

        if let Some(ls) = lighting.as_mut() {
            lights.update_all(ls);
            ls.update_view(camera.position);
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::SKYBLUE);
        {
            let mut d3 = d.begin_mode3D(camera);
            d3.draw_grid(GRID_SLICES, GRID_SPACING);
            d3.draw_sphere(Vector3::zero(), MARKER_RADIUS, Color::GRAY);
            d3.draw_sphere(Vector3::new(1.0, 0.0, 0.0), MARKER_RADIUS, Color::RED);
            d3.draw_sphere(Vector3::new(0.0, 0.0, 1.0), MARKER_RADIUS, Color::GREEN);
            if let Some(m) = model.as_ref() {
                d3.draw_model(m, vec3_to_rl(scene.draw_offset()), 1.0, Color::WHITE);
            }
        }
        d.draw_fps(0, 0);
    }
    Ok(())
}
