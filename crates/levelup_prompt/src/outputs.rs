//! Declared output records for the standard templates.
//!
//! Each template's response must coerce into exactly one of these records;
//! anything else is a schema validation failure. The detailed image
//! analysis parses directly into [`levelup_core::ImageAnalysis`].

use serde::Deserialize;

/// Output record for the theme-suggestion template.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemesOutput {
    /// Suggested themes derived from the image, in preference order
    pub themes: Vec<String>,
}

/// Output record for the level-description template.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DescriptionOutput {
    /// The generated level description, including improvement suggestions
    pub description: String,
}

/// Output record for the layout-generation template.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayoutOutput {
    /// The generated layout, as JSON or source text in the requested language
    pub level_layout: String,
    /// Background image URL suggested alongside the layout
    #[serde(default)]
    pub background_image_url: Option<String>,
    /// Prose summary of the generated level
    #[serde(default)]
    pub level_description: Option<String>,
}

/// Output record for the scene-suggestion template.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenesOutput {
    /// Suggested scene names for the game folder
    pub suggested_scenes: Vec<String>,
}
