//! One schema-validated prompt invocation.

use crate::{PromptTemplate, extract_json, parse_json};
use levelup_core::{GenerateRequest, ImageSource, Input, Message, Role};
use levelup_error::{EmptyResultError, LevelUpResult, SchemaError, SchemaErrorKind};
use levelup_interface::TextGenerator;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Performs one request/response exchange against a named template.
///
/// Renders the template over the input record, wraps it (and the optional
/// image) into a single user message, takes the first text output from the
/// backend, and coerces it into the template's declared output record.
///
/// # Errors
///
/// Propagates backend failures unchanged; fails with an empty-result error
/// when the backend produced no usable text, and with a schema error when
/// the text cannot be coerced into `T`. There is no retry.
pub async fn invoke<T>(
    backend: &dyn TextGenerator,
    template: &PromptTemplate,
    input: &Value,
    image: Option<&ImageSource>,
) -> LevelUpResult<T>
where
    T: DeserializeOwned,
{
    let prompt = template.render(input)?;

    let mut content = vec![Input::Text(prompt)];
    if let Some(image) = image {
        content.push(image.to_input());
    }

    let request = GenerateRequest {
        messages: vec![Message::new(Role::User, content)],
        ..Default::default()
    };

    debug!(template = template.name(), "Invoking prompt template");
    let response = backend.generate(&request).await?;

    let text = response.first_text().ok_or_else(|| {
        EmptyResultError::new(format!(
            "no text output from template '{}'",
            template.name()
        ))
    })?;

    if text.trim().is_empty() {
        return Err(EmptyResultError::new(format!(
            "empty text output from template '{}'",
            template.name()
        ))
        .into());
    }

    let payload = extract_json(text)?;
    let value = parse_json(&payload)?;

    serde_json::from_value(value).map_err(|e| {
        SchemaError::new(SchemaErrorKind::WrongShape {
            template: template.name().to_string(),
            message: e.to_string(),
        })
        .into()
    })
}
