use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use voxmesh_grid::TerrainConfig;
use voxmesh_render_raylib::LightKind;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

// Top-level app config (assets/voxmesh.toml)
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub chunk: ChunkConfig,
    #[serde(default)]
    pub terrain: TerrainConfig,
    #[serde(default)]
    pub lighting: LightingConfig,
    #[serde(default)]
    pub camera: CameraConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_true")]
    pub vsync: bool,
    // 0 leaves pacing to vsync
    #[serde(default)]
    pub target_fps: u32,
}

fn default_width() -> i32 {
    1200
}
fn default_height() -> i32 {
    800
}
fn default_title() -> String {
    "voxels!".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
            vsync: true,
            target_fps: 0,
        }
    }
}

/// Chunk dimensions stay signed so bad input reaches [`voxmesh_grid::GridError`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ChunkConfig {
    #[serde(default = "default_chunk_size")]
    pub size_x: i64,
    #[serde(default = "default_chunk_size")]
    pub size_y: i64,
    #[serde(default = "default_chunk_size")]
    pub size_z: i64,
    // None picks a fresh seed per run
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_chunk_size() -> i64 {
    16
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            size_x: 16,
            size_y: 16,
            size_z: 16,
            seed: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LightConfig {
    pub kind: LightKind,
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default)]
    pub target: [f32; 3],
    #[serde(default = "default_light_color")]
    pub color: [u8; 4],
}

fn default_light_color() -> [u8; 4] {
    [255, 255, 255, 255]
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LightingConfig {
    #[serde(default = "default_ambient")]
    pub ambient: f32,
    #[serde(default = "default_lights")]
    pub lights: Vec<LightConfig>,
}

fn default_ambient() -> f32 {
    0.1
}

fn default_lights() -> Vec<LightConfig> {
    vec![
        LightConfig {
            kind: LightKind::Directional,
            position: [0.0; 3],
            target: [-2.0, -4.0, -3.0],
            color: [255, 255, 255, 255],
        },
        LightConfig {
            kind: LightKind::Directional,
            position: [0.0; 3],
            target: [2.0, 2.0, 5.0],
            // raylib GRAY
            color: [130, 130, 130, 255],
        },
    ]
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient: default_ambient(),
            lights: default_lights(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CameraConfig {
    #[serde(default = "default_camera_position")]
    pub position: [f32; 3],
    #[serde(default)]
    pub target: [f32; 3],
    #[serde(default = "default_fovy")]
    pub fovy: f32,
    #[serde(default = "default_true")]
    pub orbital: bool,
}

fn default_camera_position() -> [f32; 3] {
    [32.0, 16.0, 32.0]
}
fn default_fovy() -> f32 {
    45.0
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: default_camera_position(),
            target: [0.0; 3],
            fovy: default_fovy(),
            orbital: true,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let cfg: AppConfig = toml::from_str(toml_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Reads `path` when it exists; a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let cfg = Self::from_path(path)?;
            log::info!("loaded config {}", path.display());
            Ok(cfg)
        } else {
            log::info!("no config at {}; using defaults", path.display());
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} must be positive",
                self.window.width, self.window.height
            )));
        }
        if !(self.camera.fovy > 0.0 && self.camera.fovy < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "camera fovy {} must be in (0, 180)",
                self.camera.fovy
            )));
        }
        if self.lighting.ambient < 0.0 {
            return Err(ConfigError::Invalid("lighting ambient must be >= 0".into()));
        }
        Ok(())
    }
}
