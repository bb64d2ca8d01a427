use thiserror::Error;
use voxmesh_blocks::AtlasError;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("cell ({x}, {y}, {z}): {source}")]
    Atlas {
        x: usize,
        y: usize,
        z: usize,
        source: AtlasError,
    },
}
