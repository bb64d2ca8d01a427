use super::Scatter;
use crate::VoxelGrid;

/// Places `pass.count` random cells. Upper bounds are exclusive and the last
/// `x`/`z` column is never picked; a one-cell axis always picks 0.
pub fn apply_scatter(grid: &mut VoxelGrid, pass: &Scatter, rng: &mut fastrand::Rng) {
    let (sx, sy, sz) = grid.dims();
    let max_y = pass.max_y.min(sy);
    if max_y == 0 {
        return;
    }
    let x_hi = (sx - 1).max(1);
    let z_hi = (sz - 1).max(1);
    for _ in 0..pass.count {
        let x = rng.usize(0..x_hi);
        let y = rng.usize(0..max_y);
        let z = rng.usize(0..z_hi);
        grid.set(x, y, z, pass.block);
    }
}
