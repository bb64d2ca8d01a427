//! Procedural chunk filling: a base terrain pass followed by random scatter passes.

mod scatter;
mod surface;

use serde::{Deserialize, Serialize};
use voxmesh_blocks::BlockType;

use crate::VoxelGrid;

pub use scatter::apply_scatter;
pub use surface::{fill_layered, fill_noise};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainMode {
    /// Flat horizontal bands from `layers`.
    #[default]
    Layered,
    /// 2D noise height field with grass/dirt/dark dirt bands below the surface.
    Noise,
}

/// Band of a layered terrain: every `y <= max_y` not claimed by a lower band.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub max_y: usize,
    pub block: BlockType,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    pub frequency: f32,
    pub base_height: usize,
    pub amplitude: usize,
    pub grass_depth: usize,
    pub dirt_depth: usize,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            frequency: 0.05,
            base_height: 6,
            amplitude: 6,
            grass_depth: 2,
            dirt_depth: 2,
        }
    }
}

/// `count` random cells with `x < sx-1`, `y < max_y`, `z < sz-1` set to `block`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scatter {
    pub block: BlockType,
    pub count: usize,
    pub max_y: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub mode: TerrainMode,
    pub layers: Vec<Layer>,
    pub noise: NoiseParams,
    pub scatter: Vec<Scatter>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            mode: TerrainMode::Layered,
            layers: vec![
                Layer { max_y: 6, block: BlockType::DarkDirt },
                Layer { max_y: 8, block: BlockType::Dirt },
                Layer { max_y: 10, block: BlockType::Grass },
            ],
            noise: NoiseParams::default(),
            scatter: vec![
                Scatter { block: BlockType::Air, count: 500, max_y: 10 },
                Scatter { block: BlockType::Gold, count: 100, max_y: 10 },
            ],
        }
    }
}

/// Overwrites every cell of `grid`. The same `seed` always produces the same grid.
pub fn generate(grid: &mut VoxelGrid, cfg: &TerrainConfig, seed: u64) {
    match cfg.mode {
        TerrainMode::Layered => fill_layered(grid, &cfg.layers),
        TerrainMode::Noise => fill_noise(grid, &cfg.noise, seed),
    }
    let mut rng = fastrand::Rng::with_seed(seed);
    for pass in &cfg.scatter {
        apply_scatter(grid, pass, &mut rng);
    }
    let (sx, sy, sz) = grid.dims();
    log::debug!(
        "generated {}x{}x{} {:?} chunk seed={} solid={}",
        sx,
        sy,
        sz,
        cfg.mode,
        seed,
        grid.solid_count()
    );
}
