//! Request and response types for model generation.

use crate::{Message, Output};
use serde::{Deserialize, Serialize};

/// Generic generation request (multimodal-safe).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    pub messages: Vec<Message>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub model: Option<String>,
}

/// The unified response object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Returns the first text output, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelup_core::{GenerateResponse, Output};
    ///
    /// let response = GenerateResponse {
    ///     outputs: vec![Output::Text("layout".to_string())],
    /// };
    /// assert_eq!(response.first_text(), Some("layout"));
    /// ```
    pub fn first_text(&self) -> Option<&str> {
        self.outputs.iter().find_map(|output| match output {
            Output::Text(text) => Some(text.as_str()),
            _ => None,
        })
    }
}
