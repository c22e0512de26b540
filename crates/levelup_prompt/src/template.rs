//! Prompt templates with field interpolation.

use levelup_error::{LevelUpResult, SchemaError, SchemaErrorKind};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("valid placeholder pattern")
    })
}

/// A named prompt template with a declared input contract.
///
/// The template text interpolates `{{field}}` placeholders from a JSON
/// input record. Fields listed as required must be present and non-null;
/// absent optional fields render as the empty string.
///
/// # Examples
///
/// ```
/// use levelup_prompt::PromptTemplate;
/// use serde_json::json;
///
/// let template = PromptTemplate::new("greet", "Hello, {{name}}!", &["name"]);
/// let rendered = template.render(&json!({"name": "world"})).unwrap();
/// assert_eq!(rendered, "Hello, world!");
/// ```
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    name: String,
    text: String,
    required: Vec<String>,
}

impl PromptTemplate {
    /// Creates a new template.
    pub fn new(name: impl Into<String>, text: impl Into<String>, required: &[&str]) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            required: required.iter().map(|field| field.to_string()).collect(),
        }
    }

    /// The template's registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The input fields that must be present when rendering.
    pub fn required_fields(&self) -> &[String] {
        &self.required
    }

    /// Interpolates the template against a validated input record.
    ///
    /// # Errors
    ///
    /// Fails with a schema error naming the first missing required field,
    /// before any external call is made.
    pub fn render(&self, input: &Value) -> LevelUpResult<String> {
        for field in &self.required {
            let present = input.get(field).map(|value| !value.is_null());
            if present != Some(true) {
                return Err(SchemaError::new(SchemaErrorKind::MissingField {
                    template: self.name.clone(),
                    field: field.clone(),
                })
                .into());
            }
        }

        let rendered = placeholder_pattern().replace_all(&self.text, |caps: &regex::Captures| {
            input
                .get(&caps[1])
                .map(render_value)
                .unwrap_or_default()
        });

        Ok(rendered.into_owned())
    }
}

/// Renders a JSON value into prompt text.
///
/// Strings interpolate verbatim, arrays as comma-joined lists, and other
/// scalars via their JSON form.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn arrays_render_as_comma_joined_lists() {
        let template = PromptTemplate::new("t", "Assets: {{assets}}", &[]);
        let rendered = template
            .render(&json!({"assets": ["tree.png", "rock.png"]}))
            .unwrap();
        assert_eq!(rendered, "Assets: tree.png, rock.png");
    }

    #[test]
    fn optional_fields_render_empty_when_absent() {
        let template = PromptTemplate::new("t", "Description: {{description}}", &[]);
        let rendered = template.render(&json!({})).unwrap();
        assert_eq!(rendered, "Description: ");
    }
}
