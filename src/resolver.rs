//! Locale tag parsing and resolution with fallback chain support.

use std::fmt;

use crate::catalog::{LocaleCatalog, LocaleEntry};
use crate::dictionary::Dictionary;
use crate::merge::merge;

/// Language subtag of the catalog's universal fallback entry.
pub const FALLBACK_LANGUAGE: &str = "en";

/// What: A locale tag split into language and optional region.
///
/// Details:
/// - Language is stored lowercase, region uppercase, so comparisons are case-insensitive
/// - Parsing never fails; junk input yields a language that simply matches nothing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag {
    language: String,
    region: Option<String>,
}

impl LocaleTag {
    /// What: Parse a raw tag such as "zh-CN", "zh_cn", "de_DE.UTF-8" or "fr".
    ///
    /// Inputs:
    /// - `raw`: Arbitrary string
    ///
    /// Output:
    /// - Parsed tag; region is `None` when missing or empty
    ///
    /// Details:
    /// - Strips an encoding suffix (".UTF-8") and modifier ("@euro")
    /// - Splits on `-` or `_`; subtags after the region are ignored
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let core = trimmed.split(['.', '@']).next().unwrap_or_default();
        let mut parts = core.split(['-', '_']);
        let language = parts.next().unwrap_or_default().trim().to_lowercase();
        let region = parts
            .next()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_uppercase);
        Self { language, region }
    }

    /// Lowercased language subtag; empty for empty input.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercased region subtag.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => f.write_str(&self.language),
        }
    }
}

/// What: Pick the catalog entry to use for a raw tag.
///
/// Inputs:
/// - `raw_tag`: Arbitrary tag string (may be empty or malformed)
/// - `catalog`: Validated catalog
///
/// Output:
/// - The matched entry; never fails
///
/// Details:
/// - Exact `language-region` match first (skipped when no region is given)
/// - Then the first declared entry with the same language subtag
/// - Then the English entry
#[must_use]
pub fn resolve<'a>(raw_tag: &str, catalog: &'a LocaleCatalog) -> &'a LocaleEntry {
    let tag = LocaleTag::parse(raw_tag);

    if tag.region.is_some()
        && let Some(entry) = catalog.entries().iter().find(|e| e.matches_exactly(&tag))
    {
        tracing::debug!("Locale '{}' matched exactly: {}", raw_tag, entry.tag());
        return entry;
    }

    if !tag.language.is_empty()
        && let Some(entry) = catalog
            .entries()
            .iter()
            .find(|e| e.language() == tag.language)
    {
        tracing::debug!(
            "Locale '{}' matched by language '{}': {}",
            raw_tag,
            tag.language,
            entry.tag()
        );
        return entry;
    }

    let fallback = catalog.english();
    tracing::debug!(
        "Locale '{}' has no match, falling back to {}",
        raw_tag,
        fallback.tag()
    );
    fallback
}

/// What: Resolve a raw tag and merge its dictionary over English.
///
/// Inputs:
/// - `raw_tag`: Arbitrary tag string
/// - `catalog`: Validated catalog
///
/// Output:
/// - Fresh dictionary containing every English key; recomputed on each call
#[must_use]
pub fn resolve_dictionary(raw_tag: &str, catalog: &LocaleCatalog) -> Dictionary {
    let entry = resolve(raw_tag, catalog);
    merge(catalog.english().dictionary(), entry.dictionary())
}
