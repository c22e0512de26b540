//! Generative backend trait.

use async_trait::async_trait;
use levelup_core::{GenerateRequest, GenerateResponse};
use levelup_error::LevelUpResult;

/// A generative model backend capable of one request/response exchange.
///
/// Implementations are explicitly constructed and injected into the
/// orchestrator; there is no process-wide client instance.
///
/// # Example
///
/// ```rust,ignore
/// use levelup_interface::TextGenerator;
/// use levelup_core::{GenerateRequest, GenerateResponse, Output};
/// use levelup_error::LevelUpResult;
/// use async_trait::async_trait;
///
/// struct EchoBackend;
///
/// #[async_trait]
/// impl TextGenerator for EchoBackend {
///     async fn generate(&self, _request: &GenerateRequest) -> LevelUpResult<GenerateResponse> {
///         Ok(GenerateResponse {
///             outputs: vec![Output::Text("{}".to_string())],
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a response for the given request.
    ///
    /// One invocation either succeeds or propagates the failure; no retry
    /// policy is applied at this boundary.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot complete the exchange
    /// (transport failure, rejected request, unusable response body).
    async fn generate(&self, request: &GenerateRequest) -> LevelUpResult<GenerateResponse>;
}
