//! Gemini `generateContent` backend.

mod client;
pub mod conversions;
pub mod dto;

pub use client::{DEFAULT_MODEL, GeminiClient};
