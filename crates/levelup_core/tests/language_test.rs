//! Tests for the output-language tag and extension lookup.

use levelup_core::{OutputLanguage, extension_for_tag};
use strum::IntoEnumIterator;

#[test]
fn known_tags_map_to_their_extensions() {
    let expected = [
        ("python", "py"),
        ("lua", "lua"),
        ("gdscript", "gd"),
        ("csharp", "cs"),
        ("cpp", "cpp"),
        ("json", "json"),
    ];

    for (tag, extension) in expected {
        assert_eq!(
            extension_for_tag(tag),
            extension,
            "tag '{}' should map to '{}'",
            tag,
            extension
        );
    }
}

#[test]
fn unknown_tags_fall_back_to_txt() {
    for tag in ["", "rust", "javascript", "PYTHONIC", "  ", "c#"] {
        assert_eq!(extension_for_tag(tag), "txt", "tag '{}' should be txt", tag);
    }
}

#[test]
fn lookup_ignores_case_and_whitespace() {
    assert_eq!(extension_for_tag(" Python "), "py");
    assert_eq!(extension_for_tag("JSON"), "json");
}

#[test]
fn every_variant_round_trips_through_its_tag() {
    for language in OutputLanguage::iter() {
        let tag = language.to_string();
        assert_eq!(extension_for_tag(&tag), language.extension());
        let parsed: OutputLanguage = tag.parse().unwrap();
        assert_eq!(parsed, language);
    }
}

#[test]
fn comment_prefixes_cover_all_source_languages() {
    for language in OutputLanguage::iter() {
        match language {
            OutputLanguage::Json => assert!(language.comment_prefix().is_none()),
            _ => assert!(language.comment_prefix().is_some()),
        }
    }
}
