//! Level artifact export.
//!
//! Turns a [`LevelArtifact`] into files on disk: either the layout alone,
//! named by the total extension lookup, or a zip archive carrying the
//! layout plus sidecar text files for whichever metadata the artifact
//! has. Packaging failures are export errors and never touch the
//! artifact itself.

use levelup_core::LevelArtifact;
use levelup_error::{ExportError, LevelUpResult};
use std::fs::File;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Archive file name used by [`write_archive`].
pub const ARCHIVE_NAME: &str = "level.zip";

/// File name for the artifact's layout, e.g. `level.py` or `level.json`.
///
/// # Examples
///
/// ```
/// use levelup_core::{LevelArtifact, OutputLanguage};
/// use levelup_export::layout_file_name;
///
/// let artifact = LevelArtifact::builder()
///     .layout_text("print()".to_string())
///     .language(OutputLanguage::Python)
///     .build()
///     .unwrap();
/// assert_eq!(layout_file_name(&artifact), "level.py");
/// ```
pub fn layout_file_name(artifact: &LevelArtifact) -> String {
    format!("level.{}", artifact.language().extension())
}

/// Writes the layout as a single file under `dir`.
///
/// # Errors
///
/// Fails with an export error when the file cannot be written.
#[instrument(skip(artifact), fields(dir = %dir.display()))]
pub fn write_layout(artifact: &LevelArtifact, dir: &Path) -> LevelUpResult<PathBuf> {
    let path = dir.join(layout_file_name(artifact));
    std::fs::write(&path, artifact.layout_text()).map_err(|e| {
        ExportError::new(format!("failed to write {}: {}", path.display(), e))
    })?;

    info!(path = %path.display(), "Wrote level file");
    Ok(path)
}

/// Writes `level.zip` under `dir`: the layout file plus sidecar text files
/// for whichever metadata the artifact carries.
///
/// Sidecars: `themes.txt` (one suggestion per line), `sprites.txt` (one
/// asset per line), `background.txt` (the URL), `description.txt`. Absent
/// metadata produces no sidecar.
///
/// # Errors
///
/// Fails with an export error when the archive cannot be assembled.
#[instrument(skip(artifact), fields(dir = %dir.display()))]
pub fn write_archive(artifact: &LevelArtifact, dir: &Path) -> LevelUpResult<PathBuf> {
    let path = dir.join(ARCHIVE_NAME);
    let file = File::create(&path).map_err(|e| {
        ExportError::new(format!("failed to create {}: {}", path.display(), e))
    })?;

    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    add_entry(
        &mut zip,
        &layout_file_name(artifact),
        artifact.layout_text().as_bytes(),
        options,
    )?;

    if !artifact.theme_suggestions().is_empty() {
        add_entry(
            &mut zip,
            "themes.txt",
            artifact.theme_suggestions().join("\n").as_bytes(),
            options,
        )?;
    }

    if !artifact.asset_suggestions().is_empty() {
        add_entry(
            &mut zip,
            "sprites.txt",
            artifact.asset_suggestions().join("\n").as_bytes(),
            options,
        )?;
    }

    if let Some(url) = artifact.background_image_url() {
        add_entry(&mut zip, "background.txt", url.as_bytes(), options)?;
    }

    if let Some(description) = artifact.description() {
        add_entry(&mut zip, "description.txt", description.as_bytes(), options)?;
    }

    zip.finish()
        .map_err(|e| ExportError::new(format!("failed to finish archive: {}", e)))?;

    info!(path = %path.display(), "Wrote level archive");
    Ok(path)
}

/// Adds one named entry to the archive.
fn add_entry<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    bytes: &[u8],
    options: SimpleFileOptions,
) -> LevelUpResult<()> {
    zip.start_file(name, options)
        .map_err(|e| ExportError::new(format!("failed to add {} to archive: {}", name, e)))?;
    zip.write_all(bytes)
        .map_err(|e| ExportError::new(format!("failed to write {} to archive: {}", name, e)))?;
    Ok(())
}
