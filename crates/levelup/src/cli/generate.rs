//! Generate command handler.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use clap::Args;
use levelup_core::{GenerationRequest, ImageSource, OutputLanguage};
use levelup_models::GeminiClient;
use levelup_pipeline::{DirectoryCatalog, LevelGenerator};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the generate command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Image to generate from: a file path, data URI, or URL
    #[arg(long)]
    pub image: String,

    /// Free-text description of the desired level
    #[arg(long)]
    pub description: Option<String>,

    /// Path to the game project folder, for asset-aware generation
    #[arg(long)]
    pub folder: Option<String>,

    /// Explicit theme, skipping the theme-suggestion step
    #[arg(long)]
    pub theme: Option<String>,

    /// Layout language
    #[arg(long, default_value = "json")]
    pub language: OutputLanguage,

    /// Also generate a prose level description (0-100 suggestion level)
    #[arg(long, value_name = "LEVEL")]
    pub suggestion_level: Option<u8>,

    /// Output directory
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// Package the layout and metadata as level.zip
    #[arg(long)]
    pub archive: bool,
}

/// Handles the generate command.
///
/// Wires the Gemini backend and directory catalog into the pipeline, runs
/// one generation round trip, and exports the resulting artifact. A
/// placeholder artifact is still exported so the user always receives a
/// reviewable file; an export failure is reported as retryable and does
/// not discard the artifact.
#[tracing::instrument(skip_all, fields(language = %args.language))]
pub async fn handle_generate_command(args: GenerateArgs) -> anyhow::Result<()> {
    let image = resolve_image(&args.image)?;

    let backend = Arc::new(GeminiClient::from_env()?);
    let generator = LevelGenerator::new(backend, Arc::new(DirectoryCatalog::new()));

    let mut builder = GenerationRequest::builder();
    builder.image(image.clone()).language(args.language);
    if let Some(description) = &args.description {
        builder.description(description.clone());
    }
    if let Some(folder) = &args.folder {
        builder.game_folder(folder.clone());
    }
    if let Some(theme) = &args.theme {
        builder.theme(theme.clone());
    }
    let request = builder.build()?;

    tracing::info!("Starting level generation");
    let artifact = generator.generate(&request).await?;

    if artifact.is_placeholder() {
        println!("⚠️  Generation degraded; the exported layout is a placeholder:");
        println!("{}", artifact.layout_text());
    } else {
        println!("✅ Level layout generated");
        if !artifact.theme_suggestions().is_empty() {
            println!("   Themes: {}", artifact.theme_suggestions().join(", "));
        }
        if !artifact.asset_suggestions().is_empty() {
            println!("   Assets: {}", artifact.asset_suggestions().join(", "));
        }
        if let Some(url) = artifact.background_image_url() {
            println!("   Background: {}", url);
        }
    }

    if let Some(level) = args.suggestion_level {
        match generator
            .describe_level(&image, args.description.as_deref(), level)
            .await
        {
            Ok(description) => println!("\n{}", description),
            Err(e) => tracing::warn!(error = %e, "Level description failed"),
        }
    }

    let exported = if args.archive {
        levelup_export::write_archive(&artifact, &args.out)
    } else {
        levelup_export::write_layout(&artifact, &args.out)
    };

    match exported {
        Ok(path) => println!("Wrote {}", path.display()),
        Err(e) => {
            anyhow::bail!("export failed ({}); the artifact is intact, retry with --out", e)
        }
    }

    Ok(())
}

/// Turns the --image argument into an image reference.
///
/// Data URIs and URLs pass through; anything else is read as a local file
/// and inlined as a base64 data URI.
fn resolve_image(reference: &str) -> anyhow::Result<ImageSource> {
    if reference.starts_with("data:")
        || reference.starts_with("http://")
        || reference.starts_with("https://")
    {
        return Ok(ImageSource::new(reference));
    }

    let path = Path::new(reference);
    let bytes = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("failed to read image '{}': {}", reference, e))?;
    let mime = match path.extension().and_then(|s| s.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/png",
    };

    Ok(ImageSource::new(format!(
        "data:{};base64,{}",
        mime,
        STANDARD.encode(bytes)
    )))
}
