//! Voxel grid storage and terrain generation.
#![forbid(unsafe_code)]

pub mod error;
pub mod generation;

pub use error::GridError;
pub use generation::{Layer, NoiseParams, Scatter, TerrainConfig, TerrainMode, generate};
pub use voxmesh_blocks::BlockType;

/// Fixed-size box of block types.
///
/// Storage is linear with `x` fastest: `x + sx * (y + sy * z)`. Anything outside
/// `[0,sx)×[0,sy)×[0,sz)` reads as empty, so a chunk is implicitly surrounded by air.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    sx: usize,
    sy: usize,
    sz: usize,
    blocks: Vec<BlockType>,
}

impl VoxelGrid {
    /// All-air grid. Zero-sized axes are rejected.
    pub fn new(sx: usize, sy: usize, sz: usize) -> Result<Self, GridError> {
        let len = volume(sx, sy, sz)?;
        Ok(Self {
            sx,
            sy,
            sz,
            blocks: vec![BlockType::Air; len],
        })
    }

    /// Signed entry point for sizes coming from config or the command line.
    pub fn from_dims(sx: i64, sy: i64, sz: i64) -> Result<Self, GridError> {
        let check = |axis: char, value: i64| -> Result<usize, GridError> {
            if value <= 0 {
                return Err(GridError::NonPositiveDimension { axis, value });
            }
            usize::try_from(value).map_err(|_| GridError::NonPositiveDimension { axis, value })
        };
        Self::new(check('x', sx)?, check('y', sy)?, check('z', sz)?)
    }

    pub fn from_blocks(
        sx: usize,
        sy: usize,
        sz: usize,
        blocks: Vec<BlockType>,
    ) -> Result<Self, GridError> {
        let expected = volume(sx, sy, sz)?;
        if blocks.len() != expected {
            return Err(GridError::BlockCountMismatch {
                expected,
                actual: blocks.len(),
            });
        }
        Ok(Self { sx, sy, sz, blocks })
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.sx, self.sy, self.sz)
    }

    #[inline]
    pub fn size_x(&self) -> usize {
        self.sx
    }

    #[inline]
    pub fn size_y(&self) -> usize {
        self.sy
    }

    #[inline]
    pub fn size_z(&self) -> usize {
        self.sz
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.sx * (y + self.sy * z)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.sx
            && (y as usize) < self.sy
            && (z as usize) < self.sz
    }

    /// Whether the cell holds a solid block. Out-of-range coordinates are never solid.
    #[inline]
    pub fn solid_at(&self, x: i32, y: i32, z: i32) -> bool {
        self.get(x, y, z).is_some_and(BlockType::is_solid)
    }

    /// Block at an in-range cell.
    ///
    /// # Panics
    /// If any coordinate is outside the grid.
    #[inline]
    pub fn block_at(&self, x: usize, y: usize, z: usize) -> BlockType {
        assert!(
            x < self.sx && y < self.sy && z < self.sz,
            "cell ({x}, {y}, {z}) outside {}x{}x{} grid",
            self.sx,
            self.sy,
            self.sz
        );
        self.blocks[self.idx(x, y, z)]
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<BlockType> {
        if !self.in_bounds(x, y, z) {
            return None;
        }
        Some(self.blocks[self.idx(x as usize, y as usize, z as usize)])
    }

    /// Writes one cell; returns false (and writes nothing) when out of range.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, block: BlockType) -> bool {
        if x >= self.sx || y >= self.sy || z >= self.sz {
            return false;
        }
        let i = self.idx(x, y, z);
        self.blocks[i] = block;
        true
    }

    /// Fills the horizontal slice at height `y`.
    pub fn fill_layer(&mut self, y: usize, block: BlockType) {
        if y >= self.sy {
            return;
        }
        for z in 0..self.sz {
            for x in 0..self.sx {
                let i = self.idx(x, y, z);
                self.blocks[i] = block;
            }
        }
    }

    pub fn fill(&mut self, block: BlockType) {
        self.blocks.fill(block);
    }

    /// Contiguous blocks of the `z` slice (`sx * sy` cells, `x` fastest).
    #[inline]
    pub fn z_slice(&self, z: usize) -> &[BlockType] {
        let n = self.sx * self.sy;
        &self.blocks[z * n..(z + 1) * n]
    }

    #[inline]
    pub fn blocks(&self) -> &[BlockType] {
        &self.blocks
    }

    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }

    #[inline]
    pub fn is_all_air(&self) -> bool {
        !self.blocks.iter().any(|b| b.is_solid())
    }
}

fn volume(sx: usize, sy: usize, sz: usize) -> Result<usize, GridError> {
    for (axis, value) in [('x', sx), ('y', sy), ('z', sz)] {
        if value == 0 {
            return Err(GridError::NonPositiveDimension { axis, value: 0 });
        }
        if i32::try_from(value).is_err() {
            return Err(GridError::AxisTooLarge { axis, value });
        }
    }
    sx.checked_mul(sy)
        .and_then(|v| v.checked_mul(sz))
        .ok_or(GridError::VolumeOverflow { sx, sy, sz })
}
