//! End-to-end test of the facade surface: pipeline through export.

use async_trait::async_trait;
use levelup::{
    DirectoryCatalog, GenerationRequest, ImageSource, LevelGenerator, LevelUpResult,
    OutputLanguage, TextGenerator, write_archive,
};
use levelup_core::{GenerateRequest, GenerateResponse, Input, Output};
use std::sync::Arc;

/// Backend that answers every template from prompt keywords.
struct StubBackend;

#[async_trait]
impl TextGenerator for StubBackend {
    async fn generate(&self, request: &GenerateRequest) -> LevelUpResult<GenerateResponse> {
        let prompt = request
            .messages
            .first()
            .and_then(|message| {
                message.content().iter().find_map(|input| match input {
                    Input::Text(text) => Some(text.as_str()),
                    _ => None,
                })
            })
            .unwrap_or_default();

        let text = if prompt.contains("suggest several themes") {
            r#"{"themes": ["Jungle"]}"#
        } else if prompt.contains("Analyze the provided image") {
            r#"{"visual_elements": ["trees"], "composition": "c", "color_palette": ["green"], "level_type": "platformer"}"#
        } else {
            r#"{"level_layout": "print('level')\n", "background_image_url": "https://example.com/bg.png"}"#
        };

        Ok(GenerateResponse {
            outputs: vec![Output::Text(text.to_string())],
        })
    }
}

#[tokio::test]
async fn generates_and_archives_through_the_facade() {
    let generator = LevelGenerator::new(Arc::new(StubBackend), Arc::new(DirectoryCatalog::new()));

    let request = GenerationRequest::builder()
        .image(ImageSource::new("data:image/png;base64,AAA"))
        .description("jungle level")
        .language(OutputLanguage::Python)
        .build()
        .unwrap();

    let artifact = generator.generate(&request).await.unwrap();
    assert!(!artifact.is_placeholder());
    assert_eq!(*artifact.theme_suggestions(), vec!["Jungle"]);

    let dir = tempfile::tempdir().unwrap();
    let path = write_archive(&artifact, dir.path()).unwrap();
    assert!(path.exists());
}
