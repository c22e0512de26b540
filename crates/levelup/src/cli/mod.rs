//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! levelup binary.

mod commands;
mod generate;
mod languages;

pub use commands::{Cli, Commands};
pub use generate::{GenerateArgs, handle_generate_command};
pub use languages::handle_languages_command;
