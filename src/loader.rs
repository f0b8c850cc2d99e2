//! Locale file loading and catalog construction.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::LocaleCatalog;
use crate::config::I18nConfig;
use crate::dictionary::Dictionary;
use crate::error::CatalogError;

/// File extensions tried for a locale file, in order.
const LOCALE_EXTENSIONS: [&str; 3] = ["yml", "yaml", "json"];

/// Installed data directory checked after the development tree.
const INSTALLED_DIR: &str = "/usr/share/langsync";

/// What: Find a config file in development and installed locations.
///
/// Inputs:
/// - `relative_path`: Relative path from config directory (e.g., "i18n.yml")
///
/// Output:
/// - `Some(PathBuf)` pointing to the first existing file found, or `None` if not found
///
/// Details:
/// - Tries `CARGO_MANIFEST_DIR/config/{relative_path}` first, then `/usr/share/langsync/config/{relative_path}`
#[must_use]
pub fn find_config_file(relative_path: &str) -> Option<PathBuf> {
    let dev_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join(relative_path);
    if dev_path.is_file() {
        return Some(dev_path);
    }

    let installed_path = Path::new(INSTALLED_DIR).join("config").join(relative_path);
    installed_path.is_file().then_some(installed_path)
}

/// What: Find the locales directory in development and installed locations.
///
/// Output:
/// - `Some(PathBuf)` pointing to the first existing locales directory found, or `None` if not found
#[must_use]
pub fn find_locales_dir() -> Option<PathBuf> {
    let dev_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join("locales");
    if dev_path.is_dir() {
        return Some(dev_path);
    }

    let installed_path = Path::new(INSTALLED_DIR).join("locales");
    installed_path.is_dir().then_some(installed_path)
}

/// What: Load one locale file into a `Dictionary`.
///
/// Inputs:
/// - `tag`: Locale tag (e.g., "zh-CN")
/// - `locales_dir`: Directory holding `{tag}.yml`, `{tag}.yaml` or `{tag}.json`
///
/// Output:
/// - Parsed dictionary
///
/// # Errors
/// - `CatalogError::Io` when no file exists for `tag` or it cannot be read
/// - `CatalogError::Parse` when the file is empty, malformed, or not a mapping
///
/// Details:
/// - A document of the form `{tag}: { ... }` is unwrapped to its inner mapping
pub fn load_locale_file(tag: &str, locales_dir: &Path) -> Result<Dictionary, CatalogError> {
    let Some(path) = LOCALE_EXTENSIONS
        .iter()
        .map(|ext| locales_dir.join(format!("{tag}.{ext}")))
        .find(|p| p.is_file())
    else {
        return Err(CatalogError::Io {
            path: locales_dir.join(format!("{tag}.yml")),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "locale file not found"),
        });
    };

    let contents = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;
    if contents.trim().is_empty() {
        return Err(CatalogError::Parse {
            path,
            message: "locale file is empty".to_string(),
        });
    }

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let parsed = if is_json {
        parse_locale_json(&contents)
    } else {
        parse_locale_yaml(&contents)
    };
    let dictionary = parsed.map_err(|message| CatalogError::Parse { path, message })?;

    Ok(unwrap_locale_root(tag, dictionary))
}

/// What: Load every locale declared in `config` and build the catalog.
///
/// # Errors
/// - Any `load_locale_file` error for a declared locale
/// - Any `LocaleCatalog::new` validation error
pub fn load_catalog(config: &I18nConfig, locales_dir: &Path) -> Result<LocaleCatalog, CatalogError> {
    let mut entries = Vec::with_capacity(config.locales.len());
    for (tag, _) in &config.locales {
        let dictionary = load_locale_file(tag, locales_dir)?;
        tracing::debug!("Loaded locale '{}' with {} top-level keys", tag, dictionary.len());
        entries.push((tag.clone(), dictionary));
    }
    LocaleCatalog::new(entries)
}

/// What: Locate `i18n.yml` and the locales directory, then load the catalog.
///
/// # Errors
/// - `CatalogError::Config` when either location cannot be found
/// - Any error from `I18nConfig::load` or `load_catalog`
pub fn load_default_catalog() -> Result<(I18nConfig, LocaleCatalog), CatalogError> {
    let config_path = find_config_file("i18n.yml")
        .ok_or_else(|| CatalogError::Config("i18n.yml not found".to_string()))?;
    let locales_dir = find_locales_dir()
        .ok_or_else(|| CatalogError::Config("locales directory not found".to_string()))?;
    let config = I18nConfig::load(&config_path)?;
    let catalog = load_catalog(&config, &locales_dir)?;
    Ok((config, catalog))
}

/// Parse YAML text into a dictionary.
fn parse_locale_yaml(yaml_content: &str) -> Result<Dictionary, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("invalid YAML: {e}"))?;
    Dictionary::from_yaml_value(&doc).ok_or_else(|| "top level is not a mapping".to_string())
}

/// Parse JSON text into a dictionary.
fn parse_locale_json(json_content: &str) -> Result<Dictionary, String> {
    let doc: serde_json::Value =
        serde_json::from_str(json_content).map_err(|e| format!("invalid JSON: {e}"))?;
    Dictionary::from_json_value(&doc).ok_or_else(|| "top level is not an object".to_string())
}

/// Strip a single top-level key naming the locale itself.
fn unwrap_locale_root(tag: &str, dictionary: Dictionary) -> Dictionary {
    if dictionary.len() == 1
        && let Some((key, entry)) = dictionary.iter().next()
        && key.eq_ignore_ascii_case(tag)
        && let Some(inner) = entry.as_map()
    {
        return inner.clone();
    }
    dictionary
}
