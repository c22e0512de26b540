//! Tests for the filesystem-backed asset catalog.

use levelup_core::ImageSource;
use levelup_interface::AssetCatalog;
use levelup_pipeline::DirectoryCatalog;
use std::fs;

fn touch(path: &std::path::Path) {
    fs::write(path, b"").unwrap();
}

#[tokio::test]
async fn lists_sprites_from_folder_and_asset_subdirs() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    touch(&root.join("player.png"));
    touch(&root.join("notes.txt"));
    fs::create_dir(root.join("sprites")).unwrap();
    touch(&root.join("sprites/vine.webp"));
    touch(&root.join("sprites/readme.md"));

    let catalog = DirectoryCatalog::new();
    let assets = catalog
        .list_assets(root.to_str().unwrap())
        .await
        .unwrap();

    assert_eq!(assets, vec!["player.png", "vine.webp"]);
}

#[tokio::test]
async fn missing_folder_yields_an_empty_list() {
    let catalog = DirectoryCatalog::new();
    let assets = catalog
        .list_assets("/definitely/not/a/real/folder")
        .await
        .unwrap();
    assert!(assets.is_empty());
}

#[tokio::test]
async fn scenes_are_reported_by_stem() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("scenes")).unwrap();
    touch(&root.join("scenes/boss_arena.tscn"));
    touch(&root.join("intro.tscn"));
    touch(&root.join("player.png"));

    let catalog = DirectoryCatalog::new();
    let scenes = catalog
        .suggest_scenes(
            root.to_str().unwrap(),
            &ImageSource::new("data:image/png;base64,AAA"),
        )
        .await
        .unwrap();

    assert_eq!(scenes, vec!["boss_arena", "intro"]);
}
