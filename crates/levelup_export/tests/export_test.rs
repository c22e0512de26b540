//! Tests for single-file and archive export.

use levelup_core::{LevelArtifact, OutputLanguage};
use levelup_export::{layout_file_name, write_archive, write_layout};
use std::fs::File;
use std::io::Read;
use zip::ZipArchive;

fn full_artifact() -> LevelArtifact {
    LevelArtifact::builder()
        .layout_text("def build_level():\n    pass\n".to_string())
        .language(OutputLanguage::Python)
        .theme_suggestions(vec!["Jungle".to_string(), "Temple".to_string()])
        .asset_suggestions(vec!["vine.png".to_string()])
        .background_image_url("https://example.com/bg.png")
        .description("A winding jungle gauntlet.")
        .build()
        .unwrap()
}

fn bare_artifact(language: OutputLanguage) -> LevelArtifact {
    LevelArtifact::builder()
        .layout_text("layout".to_string())
        .language(language)
        .build()
        .unwrap()
}

#[test]
fn layout_file_names_follow_the_extension_lookup() {
    let expected = [
        (OutputLanguage::Python, "level.py"),
        (OutputLanguage::Lua, "level.lua"),
        (OutputLanguage::Gdscript, "level.gd"),
        (OutputLanguage::Csharp, "level.cs"),
        (OutputLanguage::Cpp, "level.cpp"),
        (OutputLanguage::Json, "level.json"),
    ];

    for (language, name) in expected {
        assert_eq!(layout_file_name(&bare_artifact(language)), name);
    }
}

#[test]
fn writes_the_layout_as_a_single_file() {
    let dir = tempfile::tempdir().unwrap();

    let path = write_layout(&full_artifact(), dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap(), "level.py");
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "def build_level():\n    pass\n");
}

#[test]
fn archive_entries_match_the_artifact_metadata() {
    let dir = tempfile::tempdir().unwrap();

    let path = write_archive(&full_artifact(), dir.path()).unwrap();

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();

    assert_eq!(
        names,
        vec![
            "background.txt",
            "description.txt",
            "level.py",
            "sprites.txt",
            "themes.txt"
        ]
    );

    let mut themes = String::new();
    archive
        .by_name("themes.txt")
        .unwrap()
        .read_to_string(&mut themes)
        .unwrap();
    assert_eq!(themes, "Jungle\nTemple");
}

#[test]
fn absent_metadata_produces_no_sidecars() {
    let dir = tempfile::tempdir().unwrap();

    let path = write_archive(&bare_artifact(OutputLanguage::Json), dir.path()).unwrap();

    let archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    assert_eq!(archive.len(), 1);
}

#[test]
fn unwritable_destination_is_an_export_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does/not/exist");

    let err = write_layout(&full_artifact(), &missing).unwrap_err();
    assert!(format!("{}", err).contains("Export Error"));
}
