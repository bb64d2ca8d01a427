//! Block types and the block → texture-atlas lookup.
#![forbid(unsafe_code)]

pub mod atlas;
pub mod error;
pub mod types;

pub use atlas::{AtlasConfig, Tile, TileDef, UvAtlas, UvRegion};
pub use error::AtlasError;
pub use types::BlockType;
