//! Gemini REST client.

use crate::gemini::conversions;
use crate::gemini::dto::GenerateContentResponse;
use async_trait::async_trait;
use levelup_core::{GenerateRequest, GenerateResponse};
use levelup_error::{GeminiError, GeminiErrorKind, HttpError, JsonError, LevelUpResult};
use levelup_interface::TextGenerator;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini `generateContent` API.
///
/// Explicitly constructed and injected; holds its own HTTP client and key.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new client for the given key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        debug!(model = %model, "Created Gemini client");

        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a client from `GEMINI_API_KEY` and `GEMINI_MODEL`.
    ///
    /// # Errors
    ///
    /// Fails when `GEMINI_API_KEY` is not set.
    pub fn from_env() -> Result<Self, GeminiError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, model))
    }

    /// Overrides the API base URL (for proxies and tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the configured model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Performs one generateContent exchange.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a non-success
    /// status, or the response cannot be parsed.
    #[instrument(skip(self, req), fields(model = %self.model))]
    pub async fn generate_content(
        &self,
        req: &GenerateRequest,
    ) -> LevelUpResult<GenerateResponse> {
        let wire_request = conversions::to_generate_content(req)?;
        let model = req.model.as_deref().unwrap_or(&self.model);
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        debug!(
            model = %model,
            content_count = wire_request.contents.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                HttpError::new(format!("request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Gemini API error");

            return Err(GeminiError::new(GeminiErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: error_text,
            })
            .into());
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            JsonError::new(format!("failed to parse response body: {}", e))
        })?;

        debug!(candidates = body.candidates.len(), "Received response");

        Ok(conversions::from_generate_content(&body)?)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> LevelUpResult<GenerateResponse> {
        self.generate_content(request).await
    }
}
