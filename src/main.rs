mod app;
mod assets;
mod config;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use voxmesh_blocks::UvAtlas;

use crate::app::ChunkScene;
use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "voxmesh", about = "Culled voxel chunk mesher with a raylib viewer")]
struct Cli {
    /// App config; defaults to <assets>/assets/voxmesh.toml
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory containing `assets/` (overrides VOXMESH_ASSETS)
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Terrain seed
    #[arg(long)]
    seed: Option<u64>,
    /// Cubic chunk edge length, overrides [chunk] sizes
    #[arg(long)]
    size: Option<i64>,
    /// Generate and mesh once, log the stats and exit
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let root = assets::resolve_assets_root(cli.assets.clone());
    log::info!("assets root {}", root.display());

    let mut cfg = match &cli.config {
        // An explicit path must exist
        Some(p) => AppConfig::from_path(p)?,
        None => AppConfig::load_or_default(&assets::config_path(&root))?,
    };
    if let Some(n) = cli.size {
        cfg.chunk.size_x = n;
        cfg.chunk.size_y = n;
        cfg.chunk.size_z = n;
    }
    let seed = cli
        .seed
        .or(cfg.chunk.seed)
        .unwrap_or_else(|| fastrand::u64(..));

    let atlas_file = assets::atlas_path(&root);
    let atlas = if atlas_file.exists() {
        UvAtlas::from_path(&atlas_file)?
    } else {
        log::info!("no atlas at {}; using built-in tiles", atlas_file.display());
        UvAtlas::default()
    };

    let scene = ChunkScene::build(&cfg, &atlas, seed)?;
    scene.log_stats();
    if cli.headless {
        return Ok(());
    }
    app::run(&cfg, &atlas, &root, scene)
}
