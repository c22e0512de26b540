//! Placeholder layout text for degraded generation.

use levelup_core::{OutputLanguage, PLACEHOLDER_MARKER};
use levelup_error::LevelUpError;
use serde_json::json;

/// Builds the in-band placeholder layout for a failed generation step.
///
/// The text is a comment in the requested language's syntax (an error
/// object for JSON) embedding the failure marker and the underlying error
/// message, so the export path still produces a reviewable file.
///
/// # Examples
///
/// ```
/// use levelup_core::{OutputLanguage, PLACEHOLDER_MARKER};
/// use levelup_error::EmptyResultError;
/// use levelup_pipeline::placeholder_layout;
///
/// let error = EmptyResultError::new("empty layout").into();
/// let text = placeholder_layout(OutputLanguage::Python, &error);
/// assert!(text.starts_with("# "));
/// assert!(text.contains(PLACEHOLDER_MARKER));
/// ```
pub fn placeholder_layout(language: OutputLanguage, error: &LevelUpError) -> String {
    match language.comment_prefix() {
        Some(prefix) => format!(
            "{} {}\n{} {}\n",
            prefix, PLACEHOLDER_MARKER, prefix, error
        ),
        None => json!({
            "error": PLACEHOLDER_MARKER,
            "message": error.to_string(),
        })
        .to_string(),
    }
}
