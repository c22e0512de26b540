//! The terminal level artifact.

use crate::OutputLanguage;
use serde::{Deserialize, Serialize};

/// Marker embedded in placeholder layout text when generation degrades.
pub const PLACEHOLDER_MARKER: &str = "LEVEL GENERATION FAILED";

/// The terminal output of the pipeline, handed to the display/export layer.
///
/// # Examples
///
/// ```
/// use levelup_core::{LevelArtifact, OutputLanguage};
///
/// let artifact = LevelArtifact::builder()
///     .layout_text("{\"tiles\": []}".to_string())
///     .language(OutputLanguage::Json)
///     .build()
///     .unwrap();
///
/// assert!(!artifact.is_placeholder());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct LevelArtifact {
    /// The generated layout, as JSON or source text
    layout_text: String,
    /// The language the layout was requested in
    language: OutputLanguage,
    /// Themes suggested from the image (empty when a theme was supplied)
    #[builder(default)]
    theme_suggestions: Vec<String>,
    /// Sprite/asset names suggested from the game folder
    #[builder(default)]
    asset_suggestions: Vec<String>,
    /// Background image URL suggested by the layout step
    #[builder(setter(into, strip_option), default)]
    background_image_url: Option<String>,
    /// Prose description of the generated level
    #[builder(setter(into, strip_option), default)]
    description: Option<String>,
}

impl LevelArtifact {
    /// Returns a builder for constructing a LevelArtifact.
    pub fn builder() -> LevelArtifactBuilder {
        LevelArtifactBuilder::default()
    }

    /// True when the layout text is the in-band failure placeholder rather
    /// than genuine generated content.
    pub fn is_placeholder(&self) -> bool {
        self.layout_text.contains(PLACEHOLDER_MARKER)
    }
}
