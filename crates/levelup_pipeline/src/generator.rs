//! The level-generation pipeline.

use crate::placeholder_layout;
use levelup_core::{
    GenerationRequest, ImageAnalysis, ImageSource, LevelArtifact, LevelArtifactBuilder,
};
use levelup_error::{
    ConfigError, EmptyResultError, LevelUpResult, MissingInputError,
};
use levelup_interface::{AssetCatalog, TextGenerator};
use levelup_prompt::{
    ANALYZE_IMAGE, DESCRIBE_LEVEL, DescriptionOutput, GENERATE_LAYOUT, LayoutOutput,
    PromptRegistry, SUGGEST_SCENES, SUGGEST_THEMES, ScenesOutput, ThemesOutput, invoke,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Theme used when no theme is supplied and suggestion yields nothing.
pub const DEFAULT_THEME: &str = "generic";

/// Orchestrates one level-generation round trip.
///
/// The backend and catalog are injected at construction time; the
/// generator holds no global state and each request produces a fresh,
/// independent artifact.
///
/// # Example
///
/// ```rust,ignore
/// use levelup_models::GeminiClient;
/// use levelup_pipeline::{DirectoryCatalog, LevelGenerator};
/// use std::sync::Arc;
///
/// let backend = Arc::new(GeminiClient::from_env()?);
/// let generator = LevelGenerator::new(backend, Arc::new(DirectoryCatalog::new()));
/// let artifact = generator.generate(&request).await?;
/// ```
pub struct LevelGenerator {
    backend: Arc<dyn TextGenerator>,
    catalog: Arc<dyn AssetCatalog>,
    registry: PromptRegistry,
}

impl LevelGenerator {
    /// Creates a generator over the injected backend and catalog, with the
    /// standard template registry.
    pub fn new(backend: Arc<dyn TextGenerator>, catalog: Arc<dyn AssetCatalog>) -> Self {
        Self {
            backend,
            catalog,
            registry: PromptRegistry::standard(),
        }
    }

    /// Replaces the template registry.
    pub fn with_registry(mut self, registry: PromptRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Suggests themes appropriate to the image, in preference order.
    #[instrument(skip(self, image))]
    pub async fn suggest_themes(&self, image: &ImageSource) -> LevelUpResult<Vec<String>> {
        let template = self.registry.get(SUGGEST_THEMES)?;
        let output: ThemesOutput =
            invoke(self.backend.as_ref(), template, &json!({}), Some(image)).await?;
        Ok(output.themes)
    }

    /// Produces the detailed image analysis consumed by layout generation.
    #[instrument(skip(self, image))]
    pub async fn analyze_image(&self, image: &ImageSource) -> LevelUpResult<ImageAnalysis> {
        let template = self.registry.get(ANALYZE_IMAGE)?;
        invoke(self.backend.as_ref(), template, &json!({}), Some(image)).await
    }

    /// Generates a prose level description with improvement suggestions.
    ///
    /// `suggestion_level` (0-100) scales how far the suggestions reach.
    ///
    /// # Errors
    ///
    /// Fails with an empty-result error when the model returns a
    /// whitespace-only description.
    #[instrument(skip(self, image, description))]
    pub async fn describe_level(
        &self,
        image: &ImageSource,
        description: Option<&str>,
        suggestion_level: u8,
    ) -> LevelUpResult<String> {
        let template = self.registry.get(DESCRIBE_LEVEL)?;
        let input = json!({
            "description": description.unwrap_or_default(),
            "suggestion_level": suggestion_level,
        });

        let output: DescriptionOutput =
            invoke(self.backend.as_ref(), template, &input, Some(image)).await?;

        if output.description.trim().is_empty() {
            return Err(EmptyResultError::new("level description was empty").into());
        }
        Ok(output.description)
    }

    /// Suggests scene names fitting a game folder and image, via the
    /// scene-suggestion template.
    #[instrument(skip(self, image), fields(folder = %folder))]
    pub async fn suggest_scenes(
        &self,
        folder: &str,
        image: &ImageSource,
    ) -> LevelUpResult<Vec<String>> {
        let template = self.registry.get(SUGGEST_SCENES)?;
        let input = json!({ "game_folder": folder });
        let output: ScenesOutput =
            invoke(self.backend.as_ref(), template, &input, Some(image)).await?;
        Ok(output.suggested_scenes)
    }

    /// Produces a [`LevelArtifact`] from a [`GenerationRequest`].
    ///
    /// The pipeline is a straight-line DAG with one fan-out/fan-in point:
    /// theme selection first, then image analysis concurrently with the
    /// asset lookup, then the final layout invocation over the union of
    /// their results. A single best-effort attempt per request; sub-step
    /// failures fall back, and a failed layout step yields a placeholder
    /// artifact rather than an error.
    ///
    /// # Errors
    ///
    /// Only an absent image reference fails the call, before any external
    /// invocation is made.
    #[instrument(skip(self, request), fields(language = %request.language()))]
    pub async fn generate(&self, request: &GenerationRequest) -> LevelUpResult<LevelArtifact> {
        if request.image().is_empty() {
            return Err(MissingInputError::new("image reference is required").into());
        }

        let (theme, theme_suggestions) = self.effective_theme(request).await;
        debug!(theme = %theme, "Selected effective theme");

        let (analysis_result, asset_suggestions) = tokio::join!(
            self.analyze_image(request.image()),
            self.lookup_assets(request.game_folder().as_deref()),
        );

        let analysis = analysis_result.unwrap_or_else(|e| {
            warn!(error = %e, "Image analysis failed, continuing with empty analysis");
            ImageAnalysis::default()
        });

        let layout = self
            .generate_layout(request, &theme, &analysis, &asset_suggestions)
            .await;

        info!(
            theme = %theme,
            assets = asset_suggestions.len(),
            "Level generation complete"
        );

        let mut builder = LevelArtifactBuilder::default();
        builder
            .layout_text(layout.level_layout)
            .language(*request.language())
            .theme_suggestions(theme_suggestions)
            .asset_suggestions(asset_suggestions);
        if let Some(url) = layout.background_image_url {
            builder.background_image_url(url);
        }
        if let Some(description) = layout.level_description {
            builder.description(description);
        }
        builder
            .build()
            .map_err(|e| ConfigError::new(format!("failed to assemble artifact: {}", e)).into())
    }

    /// Resolves the effective theme and the suggestions to report.
    ///
    /// A supplied theme is used verbatim and suppresses the suggestion
    /// invocation entirely.
    async fn effective_theme(&self, request: &GenerationRequest) -> (String, Vec<String>) {
        if let Some(theme) = request.theme() {
            if !theme.trim().is_empty() {
                debug!(theme = %theme, "Using supplied theme");
                return (theme.clone(), Vec::new());
            }
        }

        match self.suggest_themes(request.image()).await {
            Ok(themes) => {
                let effective = themes
                    .first()
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_THEME.to_string());
                (effective, themes)
            }
            Err(e) => {
                warn!(error = %e, "Theme suggestion failed, falling back to default theme");
                (DEFAULT_THEME.to_string(), Vec::new())
            }
        }
    }

    /// Asset lookup branch of the fan-out.
    ///
    /// Without a folder reference the catalog is never consulted and the
    /// branch resolves immediately with an empty list.
    async fn lookup_assets(&self, folder: Option<&str>) -> Vec<String> {
        match folder {
            Some(folder) if !folder.trim().is_empty() => {
                match self.catalog.list_assets(folder).await {
                    Ok(assets) => {
                        debug!(folder = %folder, count = assets.len(), "Listed assets");
                        assets
                    }
                    Err(e) => {
                        warn!(folder = %folder, error = %e, "Asset lookup failed, continuing without assets");
                        Vec::new()
                    }
                }
            }
            _ => Vec::new(),
        }
    }

    /// Final layout invocation, degraded to a placeholder on failure.
    async fn generate_layout(
        &self,
        request: &GenerationRequest,
        theme: &str,
        analysis: &ImageAnalysis,
        assets: &[String],
    ) -> LayoutOutput {
        let result: LevelUpResult<LayoutOutput> = async {
            let template = self.registry.get(GENERATE_LAYOUT)?;
            let input = json!({
                "theme": theme,
                "language": request.language().to_string(),
                "description": request.description().clone().unwrap_or_default(),
                "visual_elements": analysis.visual_elements(),
                "composition": analysis.composition(),
                "color_palette": analysis.color_palette(),
                "level_type": analysis.level_type(),
                "assets": assets,
            });

            let output: LayoutOutput =
                invoke(self.backend.as_ref(), template, &input, Some(request.image())).await?;

            if output.level_layout.trim().is_empty() {
                return Err(
                    EmptyResultError::new("layout generation returned empty layout text").into(),
                );
            }
            Ok(output)
        }
        .await;

        match result {
            Ok(output) => output,
            Err(e) => {
                warn!(error = %e, "Layout generation failed, emitting placeholder layout");
                LayoutOutput {
                    level_layout: placeholder_layout(*request.language(), &e),
                    background_image_url: None,
                    level_description: None,
                }
            }
        }
    }
}
