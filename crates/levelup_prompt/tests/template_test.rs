//! Tests for template rendering and the input contract.

use levelup_error::{LevelUpErrorKind, SchemaErrorKind};
use levelup_prompt::{GENERATE_LAYOUT, PromptRegistry, PromptTemplate, SUGGEST_SCENES};
use serde_json::json;

#[test]
fn renders_scalars_and_arrays() {
    let template = PromptTemplate::new(
        "layout",
        "Theme: {{theme}}\nAssets: {{assets}}\nLevel: {{suggestion_level}}",
        &["theme"],
    );

    let rendered = template
        .render(&json!({
            "theme": "Jungle",
            "assets": ["vine.png", "temple.png"],
            "suggestion_level": 42,
        }))
        .unwrap();

    assert_eq!(
        rendered,
        "Theme: Jungle\nAssets: vine.png, temple.png\nLevel: 42"
    );
}

#[test]
fn missing_required_field_is_a_schema_error() {
    let template = PromptTemplate::new("layout", "Theme: {{theme}}", &["theme"]);

    let err = template.render(&json!({})).unwrap_err();
    match err.kind() {
        LevelUpErrorKind::Schema(schema) => match &schema.kind {
            SchemaErrorKind::MissingField { template, field } => {
                assert_eq!(template, "layout");
                assert_eq!(field, "theme");
            }
            other => panic!("expected MissingField, got {:?}", other),
        },
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn null_required_field_is_rejected() {
    let template = PromptTemplate::new("layout", "Theme: {{theme}}", &["theme"]);
    assert!(template.render(&json!({"theme": null})).is_err());
}

#[test]
fn standard_registry_holds_all_pipeline_templates() {
    let registry = PromptRegistry::default();

    for name in [
        "suggest_themes",
        "analyze_image",
        "describe_level",
        "generate_layout",
        "suggest_scenes",
    ] {
        assert!(registry.get(name).is_ok(), "template '{}' missing", name);
    }

    assert!(registry.get("mystery").is_err());
}

#[test]
fn layout_template_interpolates_the_union_of_inputs() {
    let registry = PromptRegistry::default();
    let template = registry.get(GENERATE_LAYOUT).unwrap();

    let rendered = template
        .render(&json!({
            "theme": "Jungle",
            "language": "python",
            "description": "jungle level",
            "visual_elements": ["trees", "river"],
            "composition": "dense canopy",
            "color_palette": ["green", "brown"],
            "level_type": "platformer",
            "assets": ["vine.png"],
        }))
        .unwrap();

    assert!(rendered.contains("Theme: Jungle"));
    assert!(rendered.contains("Target language: python"));
    assert!(rendered.contains("trees, river"));
    assert!(rendered.contains("vine.png"));
}

#[test]
fn scene_template_requires_the_game_folder() {
    let registry = PromptRegistry::default();
    let template = registry.get(SUGGEST_SCENES).unwrap();

    assert!(template.render(&json!({})).is_err());
    let rendered = template
        .render(&json!({"game_folder": "/games/jungle"}))
        .unwrap();
    assert!(rendered.contains("/games/jungle"));
}
