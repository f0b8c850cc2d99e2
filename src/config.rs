//! i18n configuration (`config/i18n.yml`).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::store::DEFAULT_PREFERENCE_KEY;

/// Query parameter carrying an explicit locale override unless configured otherwise.
pub const DEFAULT_QUERY_PARAM: &str = "lang";

/// What: Parsed `i18n.yml`.
///
/// Details:
/// - `locales` keeps the file's key order, which becomes catalog declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
    /// Query parameter name read for explicit overrides.
    pub query_param: String,
    /// Settings key the effective locale is persisted under.
    pub preference_key: String,
    /// `(tag, display name)` pairs in declaration order.
    pub locales: Vec<(String, String)>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            preference_key: DEFAULT_PREFERENCE_KEY.to_string(),
            locales: Vec::new(),
        }
    }
}

/// On-disk shape of `i18n.yml`.
#[derive(Debug, Deserialize)]
struct RawConfig {
    /// See [`I18nConfig::query_param`].
    #[serde(default = "default_query_param")]
    query_param: String,
    /// See [`I18nConfig::preference_key`].
    #[serde(default = "default_preference_key")]
    preference_key: String,
    /// Ordered `tag: display name` mapping.
    #[serde(default)]
    locales: serde_norway::Mapping,
}

/// Serde default for `query_param`.
fn default_query_param() -> String {
    DEFAULT_QUERY_PARAM.to_string()
}

/// Serde default for `preference_key`.
fn default_preference_key() -> String {
    DEFAULT_PREFERENCE_KEY.to_string()
}

impl I18nConfig {
    /// What: Parse config from YAML text.
    ///
    /// # Errors
    /// - `CatalogError::Config` when the YAML is invalid or a `locales` key is not a string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let raw: RawConfig = serde_norway::from_str(yaml)
            .map_err(|e| CatalogError::Config(format!("failed to parse YAML: {e}")))?;

        let mut locales = Vec::with_capacity(raw.locales.len());
        for (key, value) in &raw.locales {
            let Some(tag) = key.as_str() else {
                return Err(CatalogError::Config(format!(
                    "locale keys must be strings, found {key:?}"
                )));
            };
            let name = value.as_str().unwrap_or(tag).to_string();
            locales.push((tag.to_string(), name));
        }

        Ok(Self {
            query_param: raw.query_param,
            preference_key: raw.preference_key,
            locales,
        })
    }

    /// What: Read and parse config from `path`.
    ///
    /// # Errors
    /// - `CatalogError::Io` when the file cannot be read
    /// - `CatalogError::Config` when its content is invalid
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&contents)?;
        tracing::debug!(
            "Loaded {} locales from {}: {:?}",
            config.locales.len(),
            path.display(),
            config.locales.iter().map(|(tag, _)| tag).collect::<Vec<_>>()
        );
        Ok(config)
    }

    /// Declared tags in order.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        self.locales.iter().map(|(tag, _)| tag.as_str()).collect()
    }

    /// What: Display name for `tag`, as written in the config.
    #[must_use]
    pub fn display_name(&self, tag: &str) -> Option<&str> {
        self.locales
            .iter()
            .find(|(t, _)| t.eq_ignore_ascii_case(tag))
            .map(|(_, name)| name.as_str())
    }
}
