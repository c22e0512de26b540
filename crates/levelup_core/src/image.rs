//! Image reference handling.

use crate::{Input, MediaSource};
use serde::{Deserialize, Serialize};

/// An opaque handle to the uploaded image, as a data URI or a URL.
///
/// # Examples
///
/// ```
/// use levelup_core::ImageSource;
///
/// let data = ImageSource::new("data:image/png;base64,AAA");
/// assert_eq!(data.mime(), Some("image/png"));
///
/// let url = ImageSource::new("https://example.com/sketch.png");
/// assert_eq!(url.mime(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImageSource {
    /// Inline `data:` URI carrying the image content
    DataUri(String),
    /// URL pointing at the image
    Url(String),
}

impl ImageSource {
    /// Classifies a raw reference string by its `data:` prefix.
    pub fn new(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        if reference.starts_with("data:") {
            ImageSource::DataUri(reference)
        } else {
            ImageSource::Url(reference)
        }
    }

    /// Returns the raw reference string.
    pub fn as_str(&self) -> &str {
        match self {
            ImageSource::DataUri(s) | ImageSource::Url(s) => s,
        }
    }

    /// True when the reference carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.as_str().trim().is_empty()
    }

    /// Extracts the MIME type from a data URI, if present.
    pub fn mime(&self) -> Option<&str> {
        match self {
            ImageSource::DataUri(uri) => {
                let rest = uri.strip_prefix("data:")?;
                let end = rest.find([';', ','])?;
                let mime = &rest[..end];
                if mime.is_empty() { None } else { Some(mime) }
            }
            ImageSource::Url(_) => None,
        }
    }

    /// Extracts the base64 payload from a data URI, if present.
    pub fn base64_payload(&self) -> Option<&str> {
        match self {
            ImageSource::DataUri(uri) => {
                let (_, payload) = uri.split_once("base64,")?;
                Some(payload)
            }
            ImageSource::Url(_) => None,
        }
    }

    /// Converts the reference into a model input.
    ///
    /// Data URIs become inline base64 image inputs; URLs are passed through
    /// for the backend to fetch or reject.
    pub fn to_input(&self) -> Input {
        match self {
            ImageSource::DataUri(_) => {
                let source = match self.base64_payload() {
                    Some(payload) => MediaSource::Base64(payload.to_string()),
                    // Non-base64 data URI; hand over the raw reference.
                    None => MediaSource::Url(self.as_str().to_string()),
                };
                Input::Image {
                    mime: self.mime().map(|m| m.to_string()),
                    source,
                }
            }
            ImageSource::Url(url) => Input::Image {
                mime: None,
                source: MediaSource::Url(url.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_data_uri_and_url() {
        assert!(matches!(
            ImageSource::new("data:image/png;base64,AAA"),
            ImageSource::DataUri(_)
        ));
        assert!(matches!(
            ImageSource::new("https://example.com/a.png"),
            ImageSource::Url(_)
        ));
    }

    #[test]
    fn extracts_mime_and_payload() {
        let image = ImageSource::new("data:image/jpeg;base64,Zm9v");
        assert_eq!(image.mime(), Some("image/jpeg"));
        assert_eq!(image.base64_payload(), Some("Zm9v"));
    }

    #[test]
    fn data_uri_becomes_inline_input() {
        let image = ImageSource::new("data:image/png;base64,AAA");
        match image.to_input() {
            Input::Image { mime, source } => {
                assert_eq!(mime.as_deref(), Some("image/png"));
                assert_eq!(source, MediaSource::Base64("AAA".to_string()));
            }
            other => panic!("expected image input, got {:?}", other),
        }
    }

    #[test]
    fn empty_reference_is_detected() {
        assert!(ImageSource::new("  ").is_empty());
        assert!(!ImageSource::new("data:image/png;base64,AAA").is_empty());
    }
}
