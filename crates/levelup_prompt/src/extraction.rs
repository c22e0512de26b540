//! JSON extraction from model response text.
//!
//! Models frequently wrap structured output in Markdown code fences or
//! surround it with prose. Extraction strips the wrapping and locates the
//! outermost JSON payload before typed parsing.

use levelup_error::{LevelUpResult, SchemaError, SchemaErrorKind};
use regex::Regex;
use std::sync::OnceLock;

fn fence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)```(?:[A-Za-z]+)?\s*(.*?)```").expect("valid fence pattern")
    })
}

/// Locates the JSON payload in raw response text.
///
/// # Examples
///
/// ```
/// use levelup_prompt::extract_json;
///
/// let fenced = "Here you go:\n```json\n{\"themes\": []}\n```";
/// assert_eq!(extract_json(fenced).unwrap(), "{\"themes\": []}");
/// ```
///
/// # Errors
///
/// Fails with a schema error when the text contains no JSON payload.
pub fn extract_json(text: &str) -> LevelUpResult<String> {
    let candidate = fence_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|payload| payload.as_str())
        .unwrap_or(text);

    let start = candidate.find(['{', '[']);
    let end = candidate.rfind(['}', ']']);

    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(candidate[start..=end].to_string()),
        _ => Err(SchemaError::new(SchemaErrorKind::NoJsonPayload(
            preview(text),
        ))
        .into()),
    }
}

/// Parses extracted payload text into a JSON value.
///
/// # Errors
///
/// Fails with a schema error when the payload is not valid JSON.
pub fn parse_json(payload: &str) -> LevelUpResult<serde_json::Value> {
    serde_json::from_str(payload).map_err(|e| {
        SchemaError::new(SchemaErrorKind::UnparseableJson(format!(
            "{} in payload '{}'",
            e,
            preview(payload)
        )))
        .into()
    })
}

/// First line of the text, truncated for error messages.
fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() > 80 {
        let truncated: String = line.chars().take(80).collect();
        format!("{}...", truncated)
    } else {
        line.to_string()
    }
}
