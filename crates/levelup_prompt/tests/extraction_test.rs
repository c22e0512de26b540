//! Tests for JSON extraction from model response text.

use levelup_prompt::{extract_json, parse_json};

#[test]
fn bare_json_passes_through() {
    let payload = extract_json("{\"themes\": [\"Jungle\"]}").unwrap();
    assert_eq!(payload, "{\"themes\": [\"Jungle\"]}");
}

#[test]
fn fenced_json_is_unwrapped() {
    let text = "Sure, here is the result:\n```json\n{\"themes\": [\"Jungle\"]}\n```\nLet me know!";
    let payload = extract_json(text).unwrap();
    assert_eq!(payload, "{\"themes\": [\"Jungle\"]}");
}

#[test]
fn unlabeled_fence_is_unwrapped() {
    let text = "```\n[1, 2, 3]\n```";
    assert_eq!(extract_json(text).unwrap(), "[1, 2, 3]");
}

#[test]
fn surrounding_prose_is_trimmed() {
    let text = "The layout follows. {\"level_layout\": \"...\"} Enjoy.";
    assert_eq!(extract_json(text).unwrap(), "{\"level_layout\": \"...\"}");
}

#[test]
fn text_without_payload_is_a_schema_error() {
    let err = extract_json("I could not produce a layout for this image.").unwrap_err();
    assert!(format!("{}", err).contains("no JSON payload"));
}

#[test]
fn invalid_payload_fails_typed_parsing() {
    let payload = extract_json("{\"themes\": [\"Jungle\",]}").unwrap();
    assert!(parse_json(&payload).is_err());
}

#[test]
fn parsed_payload_is_a_json_value() {
    let value = parse_json("{\"themes\": [\"Jungle\", \"Temple\"]}").unwrap();
    assert_eq!(value["themes"][1], "Temple");
}
