//! Locale resolution and language synchronization.
//!
//! # Overview
//!
//! - **Catalog**: an ordered set of supported locales with exactly one English entry
//! - **Resolution**: exact `language-region` match, then first entry of the same language, then English
//! - **Deep Merge**: the matched dictionary is merged over English so every English key is present
//! - **Sync**: picks the desired language from a query parameter, the persisted preference, or the
//!   platform default, persists it, and notifies the host only when the dictionary actually changes
//!
//! # Locale Files
//!
//! `config/i18n.yml` declares the supported locales in order; each has a
//! `config/locales/{tag}.yml` file with a nested structure:
//!
//! ```yaml
//! app:
//!   titles:
//!     search: "Search"
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use langsync::{EnvLocale, FilePreferenceStore, NoQuery, SyncController, load_default_catalog};
//!
//! # fn main() -> Result<(), langsync::CatalogError> {
//! let (config, catalog) = load_default_catalog()?;
//! let store = FilePreferenceStore::in_config_dir("myapp", &config.preference_key)
//!     .expect("HOME is set");
//! let platform = EnvLocale::default();
//! let controller = SyncController::new(&catalog, &NoQuery, &store, &platform).with_config(&config);
//!
//! let mut lang = String::from("en-US");
//! let mut dict = catalog.resolve_dictionary(&lang);
//! let current = dict.clone();
//! controller.sync(&lang.clone(), &current, |l| lang = l.to_string(), |d| dict = d);
//! println!("{}", dict.translate("app.titles.search"));
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - Catalog problems (no English entry, duplicate tags, unreadable locale files) are
//!   `CatalogError`s returned at startup
//! - Resolution never fails; unknown tags resolve to English
//! - Collaborator failures during sync are logged and treated as missing values

pub mod catalog;
pub mod config;
pub mod detection;
pub mod dictionary;
pub mod error;
pub mod loader;
pub mod merge;
pub mod ports;
pub mod query;
pub mod resolver;
pub mod store;
pub mod sync;

pub use catalog::{LocaleCatalog, LocaleEntry};
pub use config::I18nConfig;
pub use detection::EnvLocale;
pub use dictionary::{Dictionary, Entry};
pub use error::{CatalogError, PortError};
pub use loader::{find_config_file, find_locales_dir, load_catalog, load_default_catalog, load_locale_file};
pub use merge::merge;
pub use ports::{FixedLocale, MemoryPreferenceStore, NoQuery, PlatformLocale, PreferenceStore, QuerySource};
pub use query::QueryString;
pub use resolver::{LocaleTag, resolve, resolve_dictionary};
pub use store::FilePreferenceStore;
pub use sync::{SyncController, SyncOutcome};

#[cfg(test)]
/// Process-wide mutex serializing tests that mutate environment variables.
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
