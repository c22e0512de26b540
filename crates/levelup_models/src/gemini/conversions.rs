//! Type conversions between LevelUp and Gemini wire formats.

use crate::gemini::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use levelup_core::{GenerateRequest, GenerateResponse, Input, MediaSource, Output, Role};
use levelup_error::{GeminiError, GeminiErrorKind};

/// Converts a LevelUp GenerateRequest to the Gemini wire format.
///
/// System messages fold into the request's system instruction; inline
/// base64 images become `inlineData` parts. URL media is rejected.
pub fn to_generate_content(req: &GenerateRequest) -> Result<GenerateContentRequest, GeminiError> {
    let mut contents = Vec::new();
    let mut system_parts = Vec::new();

    for msg in &req.messages {
        let mut parts = Vec::new();
        for input in msg.content() {
            parts.push(to_part(input)?);
        }

        match msg.role() {
            Role::System => system_parts.extend(parts),
            Role::User => contents.push(Content {
                role: Some("user".to_string()),
                parts,
            }),
            Role::Assistant => contents.push(Content {
                role: Some("model".to_string()),
                parts,
            }),
        }
    }

    let system_instruction = if system_parts.is_empty() {
        None
    } else {
        Some(Content {
            role: None,
            parts: system_parts,
        })
    };

    let generation_config = if req.max_tokens.is_some() || req.temperature.is_some() {
        Some(GenerationConfig {
            temperature: req.temperature,
            max_output_tokens: req.max_tokens,
        })
    } else {
        None
    };

    Ok(GenerateContentRequest {
        contents,
        system_instruction,
        generation_config,
    })
}

fn to_part(input: &Input) -> Result<Part, GeminiError> {
    match input {
        Input::Text(text) => Ok(Part::text(text.clone())),
        Input::Image { mime, source } => match source {
            MediaSource::Base64(data) => Ok(Part::inline_data(
                mime.clone().unwrap_or_else(|| "image/png".to_string()),
                data.clone(),
            )),
            MediaSource::Url(_) => Err(GeminiError::new(GeminiErrorKind::UrlMediaNotSupported)),
        },
    }
}

/// Converts a Gemini wire response to a LevelUp GenerateResponse.
///
/// Takes the first candidate's text parts, concatenated in order.
pub fn from_generate_content(
    response: &GenerateContentResponse,
) -> Result<GenerateResponse, GeminiError> {
    let candidate = response.candidates.first().ok_or_else(|| {
        GeminiError::new(GeminiErrorKind::ApiRequest(
            "response contained no candidates".to_string(),
        ))
    })?;

    let text = candidate
        .content
        .as_ref()
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    Ok(GenerateResponse {
        outputs: vec![Output::Text(text)],
    })
}
