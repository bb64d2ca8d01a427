use voxmesh_blocks::{AtlasError, BlockType, UvAtlas, UvRegion};

#[test]
fn toml_tiles_get_one_column_each() {
    let atlas = UvAtlas::from_toml_str(
        r#"
        tile_size = 8

        [[tiles]]
        block = "grass"
        color = [0, 228, 48, 255]

        [[tiles]]
        block = "gold"
        "#,
    )
    .unwrap();
    assert_eq!(atlas.tile_size(), 8);
    assert_eq!(atlas.image_size(), (16, 8));
    assert_eq!(atlas.region(BlockType::Grass).unwrap(), UvRegion::new(0.0, 0.0, 0.5, 1.0));
    assert_eq!(atlas.region(BlockType::Gold).unwrap(), UvRegion::new(0.5, 0.0, 1.0, 1.0));
    assert_eq!(atlas.tiles()[1].color, [255, 255, 255, 255]);
    assert!(matches!(
        atlas.region(BlockType::Dirt),
        Err(AtlasError::MissingRegion(BlockType::Dirt))
    ));
}

#[test]
fn explicit_region_overrides_column() {
    let atlas = UvAtlas::from_toml_str(
        r#"
        [[tiles]]
        block = "dirt"
        region = [0.0, 0.5, 0.5, 1.0]
        "#,
    )
    .unwrap();
    assert_eq!(atlas.tile_size(), 16);
    assert_eq!(atlas.region(BlockType::Dirt).unwrap(), UvRegion::new(0.0, 0.5, 0.5, 1.0));
}

#[test]
fn rejects_air_duplicates_and_bad_regions() {
    let air = UvAtlas::from_toml_str("[[tiles]]\nblock = \"air\"\n");
    assert!(matches!(air, Err(AtlasError::AirTile)));

    let dup = UvAtlas::from_toml_str("[[tiles]]\nblock = \"gold\"\n[[tiles]]\nblock = \"gold\"\n");
    assert!(matches!(dup, Err(AtlasError::DuplicateTile(BlockType::Gold))));

    // width/height are corners, so x1 < x0 is inverted
    let bad = UvAtlas::from_toml_str("[[tiles]]\nblock = \"gold\"\nregion = [0.5, 0.0, 0.25, 1.0]\n");
    assert!(matches!(bad, Err(AtlasError::InvalidRegion { block: BlockType::Gold, .. })));

    let zero = UvAtlas::from_toml_str("tile_size = 0\n[[tiles]]\nblock = \"gold\"\n");
    assert!(matches!(zero, Err(AtlasError::ZeroTileSize)));

    let unknown = UvAtlas::from_toml_str("[[tiles]]\nblock = \"lava\"\n");
    assert!(matches!(unknown, Err(AtlasError::Parse(_))));
}

#[test]
fn repo_atlas_file_loads() {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let atlas = UvAtlas::from_path(root.join("../../assets/voxels/atlas.toml")).unwrap();
    for b in BlockType::SOLID {
        assert!(atlas.region(b).is_ok(), "missing region for {b}");
    }
}
