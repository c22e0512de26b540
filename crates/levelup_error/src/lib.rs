//! Error types for the LevelUp library.
//!
//! This crate provides the foundation error types used throughout the
//! LevelUp ecosystem.

mod config;
mod empty;
mod export;
mod gemini;
mod http;
mod input;
mod schema;

pub use config::ConfigError;
pub use empty::EmptyResultError;
pub use export::ExportError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::{HttpError, JsonError};
pub use input::MissingInputError;
pub use schema::{SchemaError, SchemaErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum LevelUpErrorKind {
    /// HTTP error
    Http(HttpError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// Configuration error
    Config(ConfigError),
    /// Required input missing from a request
    MissingInput(MissingInputError),
    /// Model response did not match the declared output schema
    Schema(SchemaError),
    /// Model response was syntactically valid but semantically empty
    EmptyResult(EmptyResultError),
    /// Local packaging/export failure
    Export(ExportError),
    /// Gemini backend error
    Gemini(GeminiError),
}

impl std::fmt::Display for LevelUpErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelUpErrorKind::Http(e) => write!(f, "{}", e),
            LevelUpErrorKind::Json(e) => write!(f, "{}", e),
            LevelUpErrorKind::Config(e) => write!(f, "{}", e),
            LevelUpErrorKind::MissingInput(e) => write!(f, "{}", e),
            LevelUpErrorKind::Schema(e) => write!(f, "{}", e),
            LevelUpErrorKind::EmptyResult(e) => write!(f, "{}", e),
            LevelUpErrorKind::Export(e) => write!(f, "{}", e),
            LevelUpErrorKind::Gemini(e) => write!(f, "{}", e),
        }
    }
}

/// LevelUp error with kind discrimination.
#[derive(Debug)]
pub struct LevelUpError(Box<LevelUpErrorKind>);

impl LevelUpError {
    /// Create a new error from a kind.
    pub fn new(kind: LevelUpErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LevelUpErrorKind {
        &self.0
    }
}

impl std::fmt::Display for LevelUpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LevelUp Error: {}", self.0)
    }
}

impl std::error::Error for LevelUpError {}

// Generic From implementation for any type that converts to LevelUpErrorKind
impl<T> From<T> for LevelUpError
where
    T: Into<LevelUpErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for LevelUp operations.
pub type LevelUpResult<T> = std::result::Result<T, LevelUpError>;
