//! The registry of named pipeline templates.

use crate::PromptTemplate;
use levelup_error::{ConfigError, LevelUpResult};
use std::collections::HashMap;

/// Template name: suggest themes from the uploaded image.
pub const SUGGEST_THEMES: &str = "suggest_themes";
/// Template name: detailed image analysis.
pub const ANALYZE_IMAGE: &str = "analyze_image";
/// Template name: prose level description with improvement suggestions.
pub const DESCRIBE_LEVEL: &str = "describe_level";
/// Template name: final layout generation.
pub const GENERATE_LAYOUT: &str = "generate_layout";
/// Template name: scene suggestions for a game folder.
pub const SUGGEST_SCENES: &str = "suggest_scenes";

const SUGGEST_THEMES_TEXT: &str = "\
You are an AI assistant designed to analyze images and suggest relevant themes \
for game level design.

Based on the content of the provided image, suggest several themes that would be \
appropriate for a game level. Examples of themes include: Forest, Desert, Sci-Fi, \
Cyberpunk, Medieval.

Respond with a JSON object of the form {\"themes\": [\"...\"]} where each entry \
is a suggested theme.";

const ANALYZE_IMAGE_TEXT: &str = "\
Analyze the provided image in detail as source material for a game level.

Identify the distinct visual elements present, describe the overall composition \
of the scene, name the dominant colors, and state what kind of level the image \
suggests (platformer, top-down, puzzle, and so on).

Respond with a JSON object of the form:
{\"visual_elements\": [\"...\"], \"composition\": \"...\", \"color_palette\": [\"...\"], \"level_type\": \"...\"}";

const DESCRIBE_LEVEL_TEXT: &str = "\
You are an AI assistant designed to analyze game level images and generate \
creative, detailed level descriptions for game developers, along with specific \
suggestions for improvements.

Based on the provided image and the user's optional description, generate a \
level description that captures the essence of the scene and suggests potential \
gameplay elements. Adjust the creativity and detail of the description to the \
suggestion level (0-100).

User description: {{description}}
Suggestion level: {{suggestion_level}}

Consider the environment and setting, the gameplay opportunities the setting \
affords, and any unique architectural or natural elements. Follow the \
description with concrete suggestions for improvement, such as more diverse \
enemy types, interactive elements like switches or moving platforms, or \
multiple routes to the end of the level.

Respond with a JSON object of the form {\"description\": \"...\"}.";

const GENERATE_LAYOUT_TEXT: &str = "\
Generate a game level layout based on the visual elements of the provided \
image, using the specified theme. If assets are listed, reference only assets \
that exist in the list. Take the user's description into account when present.

Theme: {{theme}}
Target language: {{language}}
User description: {{description}}
Visual elements: {{visual_elements}}
Composition: {{composition}}
Color palette: {{color_palette}}
Level type: {{level_type}}
Available assets: {{assets}}

Respond with a JSON object of the form:
{\"level_layout\": \"...\", \"background_image_url\": \"...\", \"level_description\": \"...\"}
where level_layout contains the complete layout expressed in the target \
language ({{language}} source text, or a JSON document when the target \
language is json), background_image_url optionally names a fitting background \
image, and level_description optionally summarizes the generated level.";

const SUGGEST_SCENES_TEXT: &str = "\
You are a game development assistant. Given the following game folder path, \
suggest appropriate scenes that would fit the game's style and functionality. \
Consider existing assets, code, language, and engine.

Game folder path: {{game_folder}}

Suggest a list of scene names. The list should contain only names of scenes, \
not descriptions.

Respond with a JSON object of the form {\"suggested_scenes\": [\"...\"]}.";

/// Holds the named templates used by the level-generation pipeline.
///
/// # Examples
///
/// ```
/// use levelup_prompt::{PromptRegistry, GENERATE_LAYOUT};
///
/// let registry = PromptRegistry::default();
/// let template = registry.get(GENERATE_LAYOUT).unwrap();
/// assert!(template.required_fields().contains(&"theme".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct PromptRegistry {
    templates: HashMap<String, PromptTemplate>,
}

impl PromptRegistry {
    /// Builds the registry with the standard pipeline templates.
    pub fn standard() -> Self {
        let mut registry = Self {
            templates: HashMap::new(),
        };
        registry.register(PromptTemplate::new(SUGGEST_THEMES, SUGGEST_THEMES_TEXT, &[]));
        registry.register(PromptTemplate::new(ANALYZE_IMAGE, ANALYZE_IMAGE_TEXT, &[]));
        registry.register(PromptTemplate::new(
            DESCRIBE_LEVEL,
            DESCRIBE_LEVEL_TEXT,
            &["suggestion_level"],
        ));
        registry.register(PromptTemplate::new(
            GENERATE_LAYOUT,
            GENERATE_LAYOUT_TEXT,
            &["theme", "language"],
        ));
        registry.register(PromptTemplate::new(
            SUGGEST_SCENES,
            SUGGEST_SCENES_TEXT,
            &["game_folder"],
        ));
        registry
    }

    /// Registers a template, replacing any existing template with the same name.
    pub fn register(&mut self, template: PromptTemplate) {
        self.templates
            .insert(template.name().to_string(), template);
    }

    /// Looks up a template by name.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unknown template names.
    pub fn get(&self, name: &str) -> LevelUpResult<&PromptTemplate> {
        self.templates
            .get(name)
            .ok_or_else(|| ConfigError::new(format!("unknown prompt template '{}'", name)).into())
    }
}

impl Default for PromptRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
