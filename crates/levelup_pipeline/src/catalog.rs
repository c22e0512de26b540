//! Filesystem-backed asset catalog.

use async_trait::async_trait;
use levelup_core::ImageSource;
use levelup_error::LevelUpResult;
use levelup_interface::AssetCatalog;
use std::path::Path;
use tracing::debug;

const SPRITE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];
const SPRITE_SUBDIRS: &[&str] = &["assets", "sprites", "textures"];
const SCENE_EXTENSIONS: &[&str] = &["tscn", "unity", "scene"];
const SCENE_SUBDIRS: &[&str] = &["scenes", "levels"];

/// Asset catalog backed by the local filesystem.
///
/// Sprites are image files in the game folder (and its conventional asset
/// subdirectories); scenes are engine scene files by stem. A folder that
/// does not exist or cannot be read yields an empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryCatalog;

impl DirectoryCatalog {
    /// Creates a new catalog.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AssetCatalog for DirectoryCatalog {
    async fn list_assets(&self, folder: &str) -> LevelUpResult<Vec<String>> {
        let root = Path::new(folder);
        let mut names = file_names(root, SPRITE_EXTENSIONS, false);
        for subdir in SPRITE_SUBDIRS {
            names.extend(file_names(&root.join(subdir), SPRITE_EXTENSIONS, false));
        }
        names.sort();
        names.dedup();

        debug!(folder = %folder, count = names.len(), "Listed sprite assets");
        Ok(names)
    }

    async fn suggest_scenes(
        &self,
        folder: &str,
        _image: &ImageSource,
    ) -> LevelUpResult<Vec<String>> {
        let root = Path::new(folder);
        let mut names = file_names(root, SCENE_EXTENSIONS, true);
        for subdir in SCENE_SUBDIRS {
            names.extend(file_names(&root.join(subdir), SCENE_EXTENSIONS, true));
        }
        names.sort();
        names.dedup();

        debug!(folder = %folder, count = names.len(), "Listed scenes");
        Ok(names)
    }
}

/// Collects file names under `dir` matching the extension list.
///
/// `strip_extension` returns stems instead of full file names.
fn file_names(dir: &Path, extensions: &[&str], strip_extension: bool) -> Vec<String> {
    let mut names = Vec::new();

    let Ok(entries) = std::fs::read_dir(dir) else {
        return names;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(extension) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        if !extensions
            .iter()
            .any(|candidate| extension.eq_ignore_ascii_case(candidate))
        {
            continue;
        }

        let name = if strip_extension {
            path.file_stem().and_then(|s| s.to_str())
        } else {
            path.file_name().and_then(|s| s.to_str())
        };
        if let Some(name) = name {
            names.push(name.to_string());
        }
    }

    names
}
