//! Output language tags and the file-extension lookup.

use serde::{Deserialize, Serialize};

/// The scripting language (or JSON) requested for the generated layout.
///
/// # Examples
///
/// ```
/// use levelup_core::OutputLanguage;
///
/// let lang: OutputLanguage = "gdscript".parse().unwrap();
/// assert_eq!(lang, OutputLanguage::Gdscript);
/// assert_eq!(lang.extension(), "gd");
/// assert_eq!(lang.to_string(), "gdscript");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputLanguage {
    Python,
    Lua,
    Gdscript,
    Csharp,
    Cpp,
    #[default]
    Json,
}

impl OutputLanguage {
    /// File extension for the exported layout file.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputLanguage::Python => "py",
            OutputLanguage::Lua => "lua",
            OutputLanguage::Gdscript => "gd",
            OutputLanguage::Csharp => "cs",
            OutputLanguage::Cpp => "cpp",
            OutputLanguage::Json => "json",
        }
    }

    /// Line-comment prefix for the language, or `None` for JSON.
    pub fn comment_prefix(&self) -> Option<&'static str> {
        match self {
            OutputLanguage::Python | OutputLanguage::Gdscript => Some("#"),
            OutputLanguage::Lua => Some("--"),
            OutputLanguage::Csharp | OutputLanguage::Cpp => Some("//"),
            OutputLanguage::Json => None,
        }
    }
}

/// Total extension lookup over arbitrary language tags.
///
/// Unrecognized tags map to `txt` rather than failing.
///
/// # Examples
///
/// ```
/// use levelup_core::extension_for_tag;
///
/// assert_eq!(extension_for_tag("python"), "py");
/// assert_eq!(extension_for_tag("brainfuck"), "txt");
/// ```
pub fn extension_for_tag(tag: &str) -> &'static str {
    tag.trim()
        .to_ascii_lowercase()
        .parse::<OutputLanguage>()
        .map(|language| language.extension())
        .unwrap_or("txt")
}
