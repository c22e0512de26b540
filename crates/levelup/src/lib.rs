//! Unified interface for image-driven game level generation.
//!
//! Re-exports the workspace crates behind one face: core data types, the
//! orchestrator, the Gemini backend, and the export helpers. The `levelup`
//! binary in this crate wires them into a command-line client shell.

pub mod cli;

pub use levelup_core::{
    GenerationRequest, ImageAnalysis, ImageSource, LevelArtifact, OutputLanguage,
    PLACEHOLDER_MARKER, extension_for_tag,
};
pub use levelup_error::{LevelUpError, LevelUpErrorKind, LevelUpResult};
pub use levelup_export::{layout_file_name, write_archive, write_layout};
pub use levelup_interface::{AssetCatalog, TextGenerator};
pub use levelup_models::GeminiClient;
pub use levelup_pipeline::{DEFAULT_THEME, DirectoryCatalog, LevelGenerator};
pub use levelup_prompt::{PromptRegistry, PromptTemplate};
