//! Integration tests for the sync controller against real and in-memory collaborators.

use std::cell::RefCell;

use langsync::{
    Dictionary, FilePreferenceStore, FixedLocale, MemoryPreferenceStore, NoQuery,
    PreferenceStore, QueryString, SyncController, SyncOutcome,
};
use tempfile::TempDir;

use super::resolution::seven_locale_catalog;

/// Records every host callback.
#[derive(Default)]
struct Host {
    langs: RefCell<Vec<String>>,
    states: RefCell<Vec<Dictionary>>,
}

impl Host {
    fn run(&self, controller: &SyncController<'_>, lang: &str, state: &Dictionary) -> SyncOutcome {
        controller.sync(
            lang,
            state,
            |l| self.langs.borrow_mut().push(l.to_string()),
            |d| self.states.borrow_mut().push(d),
        )
    }
}

#[test]
/// What: A persisted preference switches the host and the dictionary on first sync.
fn persisted_preference_applies_on_first_sync() {
    let catalog = seven_locale_catalog();
    let store = MemoryPreferenceStore::with_value("ja-JP");
    let platform = FixedLocale::new("fr-FR");
    let controller = SyncController::new(&catalog, &NoQuery, &store, &platform);
    let host = Host::default();

    let english = catalog.resolve_dictionary("en-US");
    let outcome = host.run(&controller, "en-US", &english);

    assert_eq!(outcome, SyncOutcome::Updated { lang: "ja-JP".into() });
    assert_eq!(*host.langs.borrow(), vec!["ja-JP".to_string()]);
    assert_eq!(*host.states.borrow(), vec![catalog.resolve_dictionary("ja-JP")]);
    assert_eq!(store.get().as_deref(), Some("ja-JP"));
}

#[test]
/// What: A repeated sync with identical inputs calls `set_lang` again but not `set_locale_state`.
fn second_sync_does_not_update_state() {
    let catalog = seven_locale_catalog();
    let store = MemoryPreferenceStore::with_value("ja-JP");
    let platform = FixedLocale::default();
    let controller = SyncController::new(&catalog, &NoQuery, &store, &platform);
    let host = Host::default();

    let first = host.run(&controller, "en-US", &catalog.resolve_dictionary("en-US"));
    assert!(matches!(first, SyncOutcome::Updated { .. }));

    let current = host.states.borrow().last().cloned().expect("first sync updated state");
    let second = host.run(&controller, "ja-JP", &current);

    assert_eq!(second, SyncOutcome::Unchanged { lang: "ja-JP".into() });
    assert_eq!(host.langs.borrow().len(), 2);
    assert_eq!(host.states.borrow().len(), 1);
}

#[test]
/// What: A query override wins over a persisted preference and is persisted itself.
fn query_override_wins_and_persists() {
    let catalog = seven_locale_catalog();
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let store = FilePreferenceStore::new(temp_dir.path().join("settings.conf"), "lang");
    store.save("ja-JP").expect("seed preference");
    let platform = FixedLocale::new("tr-TR");
    let query = QueryString::parse("?lang=zh_TW");
    let controller = SyncController::new(&catalog, &query, &store, &platform);
    let host = Host::default();

    let outcome = host.run(&controller, "en-US", &Dictionary::new());

    assert_eq!(outcome.lang(), Some("zh_TW"));
    assert_eq!(host.states.borrow()[0].translate("a"), "甲-台");
    assert_eq!(store.load().expect("readable").as_deref(), Some("zh_TW"));
}

#[test]
/// What: With no stored preference the platform language is used, and the next run reads it back.
fn platform_default_then_persisted() {
    let catalog = seven_locale_catalog();
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let store = FilePreferenceStore::new(temp_dir.path().join("settings.conf"), "lang");
    let platform = FixedLocale::new("fr-CA");
    let controller = SyncController::new(&catalog, &NoQuery, &store, &platform);
    let host = Host::default();

    let outcome = host.run(&controller, "en-US", &Dictionary::new());
    assert_eq!(outcome, SyncOutcome::Updated { lang: "fr-CA".into() });
    assert_eq!(host.states.borrow()[0], catalog.resolve_dictionary("fr-FR"));

    let other_platform = FixedLocale::new("tr-TR");
    let controller = SyncController::new(&catalog, &NoQuery, &store, &other_platform);
    assert_eq!(controller.detect_desired_lang().as_deref(), Some("fr-CA"));
}

#[test]
/// What: Switching between tags that resolve to the same dictionary does not notify state.
fn equal_dictionaries_skip_state_update() {
    let catalog = seven_locale_catalog();
    let store = MemoryPreferenceStore::with_value("de-DE");
    let platform = FixedLocale::default();
    let controller = SyncController::new(&catalog, &NoQuery, &store, &platform);
    let host = Host::default();

    let outcome = host.run(&controller, "en-US", &catalog.resolve_dictionary("en-US"));
    assert_eq!(outcome, SyncOutcome::Unchanged { lang: "de-DE".into() });
    assert_eq!(*host.langs.borrow(), vec!["de-DE".to_string()]);
    assert!(host.states.borrow().is_empty());
}

#[test]
/// What: A host without the required capabilities sees no effects at all.
fn capability_guard_blocks_everything() {
    let catalog = seven_locale_catalog();
    let store = MemoryPreferenceStore::with_value("ja-JP");
    let platform = FixedLocale::new("fr-FR");
    let controller =
        SyncController::new(&catalog, &NoQuery, &store, &platform).with_capability(|| false);
    let host = Host::default();

    assert_eq!(
        host.run(&controller, "en-US", &Dictionary::new()),
        SyncOutcome::Skipped
    );
    assert!(host.langs.borrow().is_empty());
    assert!(host.states.borrow().is_empty());
    assert_eq!(store.get().as_deref(), Some("ja-JP"));
}

#[test]
/// What: An encoded line break in the query cannot inject extra settings lines.
fn query_with_line_break_is_not_persisted() {
    let catalog = seven_locale_catalog();
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let path = temp_dir.path().join("settings.conf");
    std::fs::write(&path, "theme = dark\n").expect("Failed to write test settings file");
    let store = FilePreferenceStore::new(&path, "lang");
    let platform = FixedLocale::new("fr-FR");
    let query = QueryString::parse("?lang=ja-JP%0Atheme%3Dlight");
    let controller = SyncController::new(&catalog, &query, &store, &platform);
    let host = Host::default();

    let outcome = host.run(&controller, "en-US", &Dictionary::new());

    assert_eq!(outcome, SyncOutcome::Updated { lang: "fr-FR".into() });
    assert_eq!(*host.langs.borrow(), vec!["fr-FR".to_string()]);
    assert_eq!(
        std::fs::read_to_string(&path).expect("file readable"),
        "theme = dark\nlang = fr-FR\n"
    );
}
