//! Input types for model requests.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// Supported input types to the model.
///
/// # Examples
///
/// ```
/// use levelup_core::{Input, MediaSource};
///
/// // Text input
/// let text = Input::Text("Suggest three themes.".to_string());
///
/// // Image input with base64 content
/// let image = Input::Image {
///     mime: Some("image/png".to_string()),
///     source: MediaSource::Base64("AAA".to_string()),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),

    /// Image input (PNG, JPEG, WebP, GIF, etc.).
    Image {
        /// MIME type, e.g., "image/png" or "image/jpeg"
        mime: Option<String>,
        /// Media source (URL or base64)
        source: MediaSource,
    },
}
