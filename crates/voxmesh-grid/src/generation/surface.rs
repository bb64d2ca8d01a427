use fastnoise_lite::{FastNoiseLite, NoiseType};
use voxmesh_blocks::BlockType;

use super::{Layer, NoiseParams};
use crate::VoxelGrid;

/// Bands by height; the lowest `max_y` that covers `y` wins, above every band is air.
pub fn fill_layered(grid: &mut VoxelGrid, layers: &[Layer]) {
    let mut sorted = layers.to_vec();
    sorted.sort_by_key(|l| l.max_y);
    for y in 0..grid.size_y() {
        let block = sorted
            .iter()
            .find(|l| y <= l.max_y)
            .map(|l| l.block)
            .unwrap_or(BlockType::Air);
        grid.fill_layer(y, block);
    }
}

/// Folds the 64-bit seed into the `i32` FastNoiseLite takes, so both halves count.
fn noise_seed(seed: u64) -> i32 {
    (seed ^ (seed >> 32)) as u32 as i32
}

pub fn fill_noise(grid: &mut VoxelGrid, params: &NoiseParams, seed: u64) {
    let mut noise = FastNoiseLite::with_seed(noise_seed(seed));
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(params.frequency));

    grid.fill(BlockType::Air);
    let (sx, sy, sz) = grid.dims();
    for z in 0..sz {
        for x in 0..sx {
            // noise is in [-1, 1]
            let n = noise.get_noise_2d(x as f32, z as f32);
            let lift = ((n * 0.5 + 0.5).clamp(0.0, 1.0) * params.amplitude as f32).round() as usize;
            let top = (params.base_height + lift).min(sy - 1);
            for y in 0..=top {
                let depth = top - y;
                let block = if depth < params.grass_depth {
                    BlockType::Grass
                } else if depth < params.grass_depth + params.dirt_depth {
                    BlockType::Dirt
                } else {
                    BlockType::DarkDirt
                };
                grid.set(x, y, z, block);
            }
        }
    }
}
