//! Integration tests for the fallback chain and merge properties.

use langsync::{Dictionary, Entry, LocaleCatalog, merge};
use serde_json::json;

fn dict(value: &serde_json::Value) -> Dictionary {
    Dictionary::from_json_value(value).expect("fixture is an object")
}

/// What: Catalog `{en-US, zh-CN, zh-HK, zh-TW, fr-FR, tr-TR, ja-JP}` with English keys `{a, b}`.
pub fn seven_locale_catalog() -> LocaleCatalog {
    LocaleCatalog::new(vec![
        ("en-US", dict(&json!({ "a": "A", "b": "B" }))),
        ("zh-CN", dict(&json!({ "a": "甲-简" }))),
        ("zh-HK", dict(&json!({ "a": "甲-港" }))),
        ("zh-TW", dict(&json!({ "a": "甲-台" }))),
        ("fr-FR", dict(&json!({ "a": "À", "b": "Bé" }))),
        ("tr-TR", dict(&json!({ "b": "Be" }))),
        ("ja-JP", dict(&json!({ "a": "エー", "c": "シー" }))),
    ])
    .expect("valid catalog")
}

fn merged_with(catalog: &LocaleCatalog, tag: &str) -> Dictionary {
    let entry = catalog.get(tag).expect("tag declared in catalog");
    merge(catalog.english().dictionary(), entry.dictionary())
}

#[test]
/// What: Bare language picks the first-declared entry of that language.
fn zh_resolves_to_first_declared_zh_entry() {
    let catalog = seven_locale_catalog();
    assert_eq!(catalog.resolve_dictionary("zh"), merged_with(&catalog, "zh-CN"));
}

#[test]
/// What: An unsupported language yields the English dictionary unchanged.
fn unsupported_language_yields_english() {
    let catalog = seven_locale_catalog();
    assert_eq!(
        &catalog.resolve_dictionary("de-DE"),
        catalog.english().dictionary()
    );
}

#[test]
fn fr_resolves_to_fr_fr() {
    let catalog = seven_locale_catalog();
    assert_eq!(catalog.resolve_dictionary("fr"), merged_with(&catalog, "fr-FR"));
}

#[test]
fn ja_jp_matches_exactly() {
    let catalog = seven_locale_catalog();
    let resolved = catalog.resolve_dictionary("ja-JP");
    assert_eq!(resolved, merged_with(&catalog, "ja-JP"));
    assert_eq!(resolved.translate("a"), "エー");
    assert_eq!(resolved.translate("b"), "B");
    assert_eq!(resolved.translate("c"), "シー");
}

#[test]
/// What: Every declared tag resolves to itself, in any case or separator style.
fn every_declared_tag_resolves_to_itself() {
    let catalog = seven_locale_catalog();
    for tag in catalog.supported_locales() {
        let expected = merged_with(&catalog, tag);
        assert_eq!(catalog.resolve_dictionary(tag), expected, "{tag}");
        assert_eq!(
            catalog.resolve_dictionary(&tag.to_lowercase().replace('-', "_")),
            expected,
            "{tag} lowercased"
        );
    }
}

#[test]
/// What: Unknown regions of a known language fall back to that language's first entry.
fn unknown_region_uses_language_match() {
    let catalog = seven_locale_catalog();
    assert_eq!(catalog.resolve("zh-SG").tag(), "zh-CN");
    assert_eq!(catalog.resolve("tr").tag(), "tr-TR");
    assert_eq!(catalog.resolve("ja_XX").tag(), "ja-JP");
}

#[test]
/// What: Empty and malformed tags resolve to English without failing.
fn malformed_input_degrades_to_english() {
    let catalog = seven_locale_catalog();
    for raw in ["", "   ", "-", "__", "@@", "e", "english"] {
        assert_eq!(catalog.resolve(raw).tag(), "en-US", "{raw:?}");
    }
}

#[test]
/// What: Resolved dictionaries always contain every English key.
fn resolved_dictionaries_are_complete() {
    let catalog = seven_locale_catalog();
    for raw in ["zh", "zh-TW", "tr-TR", "ja-JP", "xx"] {
        let resolved = catalog.resolve_dictionary(raw);
        for key in catalog.english().dictionary().keys() {
            assert!(resolved.contains_key(key), "{raw} is missing {key}");
        }
    }
}

#[test]
/// What: Composite leaves are replaced, nested maps merged.
fn merge_semantics_on_nested_input() {
    let base = dict(&json!({ "menu": { "open": "Open", "close": "Close" }, "days": ["Mon", "Tue"] }));
    let overlay = dict(&json!({ "menu": { "open": "Ouvrir" }, "days": ["lun."] }));
    let merged = merge(&base, &overlay);
    assert_eq!(merged.translate("menu.open"), "Ouvrir");
    assert_eq!(merged.translate("menu.close"), "Close");
    assert_eq!(merged.get("days"), Some(&Entry::List(vec!["lun.".into()])));
    assert_eq!(merge(&base, &base), base);
}
