use std::path::{Path, PathBuf};

pub const ASSETS_ENV: &str = "VOXMESH_ASSETS";

pub fn resolve_assets_root(cli: Option<PathBuf>) -> PathBuf {
    // Precedence: CLI flag -> VOXMESH_ASSETS env -> search nearby dirs -> CWD
    if let Some(pb) = cli {
        if pb.exists() {
            return pb;
        }
        log::warn!("assets dir {} does not exist; searching", pb.display());
    }
    if let Ok(p) = std::env::var(ASSETS_ENV) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return pb;
        }
    }
    // Search candidates: CWD, executable dir, crate root; climb up to 5 parents
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.to_path_buf());
        }
    }
    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));

    for base in candidates {
        if let Some(root) = find_upward(&base, 5) {
            return root;
        }
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// First of `base` and its `levels` parents that holds the atlas config.
fn find_upward(base: &Path, levels: usize) -> Option<PathBuf> {
    let mut cur = Some(base);
    for _ in 0..=levels {
        let dir = cur?;
        if atlas_path(dir).exists() {
            return Some(dir.to_path_buf());
        }
        cur = dir.parent();
    }
    None
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join("assets/voxmesh.toml")
}

pub fn atlas_path(root: &Path) -> PathBuf {
    root.join("assets/voxels/atlas.toml")
}

pub fn shaders_dir(root: &Path) -> PathBuf {
    root.join("assets/shaders")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn cli_dir_wins_when_present() {
        let root = repo_root();
        assert_eq!(resolve_assets_root(Some(root.clone())), root);
    }

    #[test]
    fn finds_root_from_a_nested_dir() {
        let nested = repo_root().join("assets/shaders");
        assert_eq!(find_upward(&nested, 5), Some(repo_root()));
        assert_eq!(find_upward(&nested, 0), None);
    }

    #[test]
    fn layout_paths() {
        let root = Path::new("/r");
        assert_eq!(config_path(root), PathBuf::from("/r/assets/voxmesh.toml"));
        assert_eq!(atlas_path(root), PathBuf::from("/r/assets/voxels/atlas.toml"));
        assert_eq!(shaders_dir(root), PathBuf::from("/r/assets/shaders"));
    }
}
