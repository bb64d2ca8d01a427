use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AtlasError;
use crate::types::BlockType;

/// Rectangle of normalized atlas space.
///
/// `width` and `height` hold the *opposite corner* (`x1`, `y1`), not the
/// extent of the box. The four usable texture coordinates are therefore
/// `(x, y)`, `(x, height)`, `(width, y)` and `(width, height)`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UvRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl UvRegion {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Selects one corner: `s_hi` picks `width` over `x`, `t_hi` picks `height` over `y`.
    #[inline]
    pub fn corner(&self, s_hi: bool, t_hi: bool) -> [f32; 2] {
        [
            if s_hi { self.width } else { self.x },
            if t_hi { self.height } else { self.y },
        ]
    }

    /// All four corners, `(s_hi, t_hi)` in binary order.
    pub fn corners(&self) -> [[f32; 2]; 4] {
        [
            self.corner(false, false),
            self.corner(false, true),
            self.corner(true, false),
            self.corner(true, true),
        ]
    }

    #[inline]
    pub fn contains(&self, uv: [f32; 2]) -> bool {
        uv[0] >= self.x && uv[0] <= self.width && uv[1] >= self.y && uv[1] <= self.height
    }

    fn is_valid(&self) -> bool {
        let unit = |v: f32| (0.0..=1.0).contains(&v);
        unit(self.x)
            && unit(self.y)
            && unit(self.width)
            && unit(self.height)
            && self.x < self.width
            && self.y < self.height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub block: BlockType,
    pub color: [u8; 4],
    pub region: UvRegion,
}

/// Block type → atlas rectangle lookup, plus the flat tile colors used to paint the atlas.
#[derive(Clone, Debug)]
pub struct UvAtlas {
    tile_size: u32,
    tiles: Vec<Tile>,
    // Indexed by block code; slot 0 (air) stays empty.
    regions: [Option<UvRegion>; BlockType::COUNT],
}

impl UvAtlas {
    pub fn from_config(cfg: AtlasConfig) -> Result<Self, AtlasError> {
        if cfg.tile_size == 0 {
            return Err(AtlasError::ZeroTileSize);
        }
        let columns = cfg.tiles.len() as f32;
        let mut atlas = UvAtlas {
            tile_size: cfg.tile_size,
            tiles: Vec::with_capacity(cfg.tiles.len()),
            regions: [None; BlockType::COUNT],
        };
        for (i, def) in cfg.tiles.into_iter().enumerate() {
            if !def.block.is_solid() {
                return Err(AtlasError::AirTile);
            }
            let slot = def.block.code() as usize;
            if atlas.regions[slot].is_some() {
                return Err(AtlasError::DuplicateTile(def.block));
            }
            // Without an explicit rectangle, tiles sit side by side in one row.
            let region = match def.region {
                Some([x0, y0, x1, y1]) => UvRegion::new(x0, y0, x1, y1),
                None => UvRegion::new(i as f32 / columns, 0.0, (i + 1) as f32 / columns, 1.0),
            };
            if !region.is_valid() {
                return Err(AtlasError::InvalidRegion {
                    block: def.block,
                    region,
                });
            }
            atlas.regions[slot] = Some(region);
            atlas.tiles.push(Tile {
                block: def.block,
                color: def.color,
                region,
            });
        }
        Ok(atlas)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, AtlasError> {
        let cfg: AtlasConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AtlasError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Region for a solid block. Air and unlisted blocks are a lookup miss.
    #[inline]
    pub fn region(&self, block: BlockType) -> Result<UvRegion, AtlasError> {
        self.regions[block.code() as usize].ok_or(AtlasError::MissingRegion(block))
    }

    /// Region for a raw block code; unknown codes are a miss as well.
    pub fn region_for_code(&self, code: u8) -> Option<UvRegion> {
        BlockType::from_code(code).and_then(|b| self.region(b).ok())
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Pixel size of the painted atlas image: one tile-sized column per tile.
    pub fn image_size(&self) -> (u32, u32) {
        (self.tile_size * self.tiles.len().max(1) as u32, self.tile_size)
    }
}

impl Default for UvAtlas {
    /// Four 16px tiles in one row: dark dirt, dirt, grass, gold.
    fn default() -> Self {
        let cfg = AtlasConfig::default();
        let columns = cfg.tiles.len() as f32;
        let mut regions = [None; BlockType::COUNT];
        let tiles = cfg
            .tiles
            .into_iter()
            .enumerate()
            .map(|(i, def)| {
                let region = UvRegion::new(i as f32 / columns, 0.0, (i + 1) as f32 / columns, 1.0);
                regions[def.block.code() as usize] = Some(region);
                Tile {
                    block: def.block,
                    color: def.color,
                    region,
                }
            })
            .collect();
        UvAtlas {
            tile_size: cfg.tile_size,
            tiles,
            regions,
        }
    }
}

// --- Config ---

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AtlasConfig {
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
    pub tiles: Vec<TileDef>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TileDef {
    pub block: BlockType,
    #[serde(default = "default_tile_color")]
    pub color: [u8; 4],
    // Explicit corners `[x0, y0, x1, y1]`; defaults to the tile's column.
    #[serde(default)]
    pub region: Option<[f32; 4]>,
}

fn default_tile_size() -> u32 {
    16
}

fn default_tile_color() -> [u8; 4] {
    [255, 255, 255, 255]
}

impl Default for AtlasConfig {
    fn default() -> Self {
        let tile = |block, color| TileDef {
            block,
            color,
            region: None,
        };
        AtlasConfig {
            tile_size: default_tile_size(),
            tiles: vec![
                tile(BlockType::DarkDirt, [76, 63, 47, 255]),
                tile(BlockType::Dirt, [127, 106, 79, 255]),
                tile(BlockType::Grass, [0, 228, 48, 255]),
                tile(BlockType::Gold, [255, 203, 0, 255]),
            ],
        }
    }
}
