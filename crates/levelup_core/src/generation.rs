//! The generation request crossing the orchestrator boundary.

use crate::{ImageSource, OutputLanguage};
use serde::{Deserialize, Serialize};

/// User input for one level-generation round trip.
///
/// Immutable once submitted; each request produces a fresh, independent
/// artifact.
///
/// # Examples
///
/// ```
/// use levelup_core::{GenerationRequest, ImageSource, OutputLanguage};
///
/// let request = GenerationRequest::builder()
///     .image(ImageSource::new("data:image/png;base64,AAA"))
///     .description("jungle level")
///     .language(OutputLanguage::Python)
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.language(), OutputLanguage::Python);
/// assert!(request.theme().is_none());
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
pub struct GenerationRequest {
    /// Reference to the uploaded image
    image: ImageSource,
    /// Free-text description of the desired level
    #[builder(setter(into, strip_option), default)]
    description: Option<String>,
    /// Path to the game project folder, when available
    #[builder(setter(into, strip_option), default)]
    game_folder: Option<String>,
    /// Explicit theme, overriding the suggestion step
    #[builder(setter(into, strip_option), default)]
    theme: Option<String>,
    /// Requested layout language/format
    #[builder(default)]
    language: OutputLanguage,
}

impl GenerationRequest {
    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}
