use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RenderError {
    #[error("mesh has no vertices")]
    EmptyMesh,

    #[error("mesh has {0} vertices, more than a raylib mesh can address")]
    TooManyVertices(usize),

    #[error("model load failed: {0}")]
    Model(String),

    #[error("atlas texture load failed: {0}")]
    Texture(String),

    #[error("shader source not found: {}", .0.display())]
    ShaderMissing(PathBuf),

    #[error("shader failed to compile or link: {} + {}", .vs.display(), .fs.display())]
    ShaderInvalid { vs: PathBuf, fs: PathBuf },
}
