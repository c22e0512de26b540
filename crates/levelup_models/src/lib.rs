//! Generative model backends for LevelUp.
//!
//! Currently one provider: the Gemini `generateContent` REST API. The
//! client implements [`levelup_interface::TextGenerator`], so the
//! orchestrator never sees provider-specific types.

pub mod gemini;

pub use gemini::{DEFAULT_MODEL, GeminiClient};
