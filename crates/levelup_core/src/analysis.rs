//! Structured image analysis record.

use serde::{Deserialize, Serialize};

/// Detailed analysis of the uploaded image, produced by the analysis
/// invocation and consumed only by the layout-generation step.
#[derive(
    Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct ImageAnalysis {
    /// Distinct visual elements recognized in the image
    #[serde(default)]
    visual_elements: Vec<String>,
    /// Overall composition of the scene
    #[serde(default)]
    composition: String,
    /// Dominant colors in the image
    #[serde(default)]
    color_palette: Vec<String>,
    /// The kind of level the image suggests (platformer, top-down, etc.)
    #[serde(default)]
    level_type: String,
}

impl ImageAnalysis {
    /// Creates a new analysis record.
    pub fn new(
        visual_elements: Vec<String>,
        composition: String,
        color_palette: Vec<String>,
        level_type: String,
    ) -> Self {
        Self {
            visual_elements,
            composition,
            color_palette,
            level_type,
        }
    }
}
