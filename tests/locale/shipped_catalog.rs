//! Integration tests against the locale files shipped in `config/`.

use langsync::{I18nConfig, LocaleCatalog, load_catalog, load_default_catalog, find_config_file, find_locales_dir};

fn shipped() -> (I18nConfig, LocaleCatalog) {
    load_default_catalog().expect("shipped catalog loads")
}

#[test]
/// What: Declaration order of the shipped config is preserved.
fn shipped_catalog_order() {
    let (config, catalog) = shipped();
    assert_eq!(
        catalog.supported_locales(),
        vec!["en-US", "zh-CN", "zh-HK", "zh-TW", "fr-FR", "tr-TR", "ja-JP"]
    );
    assert_eq!(config.tags(), catalog.supported_locales());
    assert_eq!(config.query_param, "lang");
    assert_eq!(config.display_name("ja-JP"), Some("日本語"));
}

#[test]
/// What: Partial locales are completed from English.
fn partial_locales_are_completed() {
    let (_, catalog) = shipped();
    let hk = catalog.resolve_dictionary("zh-HK");
    assert_eq!(hk.translate("app.nav.home"), "主頁");
    assert_eq!(hk.translate("app.search.placeholder"), "Search the docs");
    assert!(hk.lookup("weekdays").is_some());

    let tr = catalog.resolve_dictionary("tr");
    assert_eq!(tr.translate("actions.cancel"), "İptal");
    assert_eq!(tr.translate("app.search.empty"), "No results");
}

#[test]
fn shipped_fallbacks() {
    let (_, catalog) = shipped();
    assert_eq!(catalog.resolve("zh").tag(), "zh-CN");
    assert_eq!(catalog.resolve("zh_hk").tag(), "zh-HK");
    assert_eq!(catalog.resolve("de-DE").tag(), "en-US");
    assert_eq!(
        catalog.resolve_dictionary("de-DE").translate("app.title"),
        "Documentation"
    );
}

#[test]
/// What: Loading through the explicit paths matches the default loader.
fn explicit_paths_match_default_loader() {
    let config_path = find_config_file("i18n.yml").expect("shipped config");
    let locales_dir = find_locales_dir().expect("shipped locales");
    let config = I18nConfig::load(&config_path).expect("valid config");
    let catalog = load_catalog(&config, &locales_dir).expect("valid catalog");
    let (_, default_catalog) = shipped();
    assert_eq!(
        catalog.resolve_dictionary("ja-JP"),
        default_catalog.resolve_dictionary("ja-JP")
    );
}
