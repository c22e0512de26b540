//! CLI structure definitions.

use crate::cli::GenerateArgs;
use clap::{Parser, Subcommand};

/// Generate game level layouts from images.
#[derive(Debug, Parser)]
#[command(name = "levelup", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a level layout from an image
    Generate(GenerateArgs),
    /// List supported layout languages and their file extensions
    Languages,
}
