//! Languages command handler.

use levelup_core::OutputLanguage;
use strum::IntoEnumIterator;

/// Prints the supported layout languages with their file extensions.
pub fn handle_languages_command() {
    println!("Supported layout languages:");
    for language in OutputLanguage::iter() {
        println!("  {:<10} level.{}", language.to_string(), language.extension());
    }
    println!("\nUnrecognized tags export as level.txt");
}
