//! Level-generation orchestrator.
//!
//! Composes the prompt invocations and tool lookups of one generation
//! round trip: theme selection, a concurrent analysis/asset fan-out, and
//! the final layout invocation, degrading to fallbacks and a placeholder
//! artifact instead of aborting when a stage fails.

mod catalog;
mod generator;
mod placeholder;

pub use catalog::DirectoryCatalog;
pub use generator::{DEFAULT_THEME, LevelGenerator};
pub use placeholder::placeholder_layout;
