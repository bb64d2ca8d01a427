use thiserror::Error;

use crate::atlas::UvRegion;
use crate::types::BlockType;

/// Errors raised while building or querying a [`crate::UvAtlas`].
#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("no atlas region for block `{0}`")]
    MissingRegion(BlockType),

    #[error("air is empty and cannot own an atlas tile")]
    AirTile,

    #[error("block `{0}` has more than one atlas tile")]
    DuplicateTile(BlockType),

    #[error("invalid region {region:?} for block `{block}`: corners must satisfy 0 <= x < width <= 1 and 0 <= y < height <= 1")]
    InvalidRegion { block: BlockType, region: UvRegion },

    #[error("atlas tile_size must be positive")]
    ZeroTileSize,

    #[error("atlas config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("atlas config read error: {0}")]
    Io(#[from] std::io::Error),
}
