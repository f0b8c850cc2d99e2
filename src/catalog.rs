//! Immutable, ordered registry of supported locales.

use crate::dictionary::Dictionary;
use crate::error::CatalogError;
use crate::resolver::{self, LocaleTag};

/// A supported locale: its declared tag and its dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    tag: String,
    parsed: LocaleTag,
    dictionary: Dictionary,
}

impl LocaleEntry {
    /// Tag as declared (e.g., "zh-CN").
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Lowercased language subtag (e.g., "zh").
    #[must_use]
    pub fn language(&self) -> &str {
        self.parsed.language()
    }

    /// Uppercased region subtag, if declared.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.parsed.region()
    }

    /// Raw dictionary for this locale, before merging over English.
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Whether this entry matches `tag` exactly, ignoring case and separator.
    pub(crate) fn matches_exactly(&self, tag: &LocaleTag) -> bool {
        self.parsed == *tag
    }
}

/// What: Ordered catalog of supported locales with exactly one English entry.
///
/// Details:
/// - Declaration order is the tie-break for language-prefix matches
/// - Built once at startup; there is no way to mutate it afterwards
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    entries: Vec<LocaleEntry>,
    english: usize,
}

impl LocaleCatalog {
    /// What: Build and validate a catalog.
    ///
    /// Inputs:
    /// - `entries`: `(tag, dictionary)` pairs in declaration order
    ///
    /// Output:
    /// - `Ok(LocaleCatalog)` or the first configuration error found
    ///
    /// # Errors
    /// - `CatalogError::Empty` when no entries are given
    /// - `CatalogError::InvalidTag` when a tag is not `language[-region]`
    /// - `CatalogError::DuplicateTag` when two tags are equal ignoring case and separator
    /// - `CatalogError::MissingEnglish` / `CatalogError::MultipleEnglish` unless exactly one `en*` entry exists
    pub fn new<I, T>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (T, Dictionary)>,
        T: Into<String>,
    {
        let mut built: Vec<LocaleEntry> = Vec::new();
        for (tag, dictionary) in entries {
            let tag = tag.into();
            if !is_valid_tag(&tag) {
                return Err(CatalogError::InvalidTag(tag));
            }
            let parsed = LocaleTag::parse(&tag);
            if built.iter().any(|e| e.parsed == parsed) {
                return Err(CatalogError::DuplicateTag(tag));
            }
            built.push(LocaleEntry {
                tag,
                parsed,
                dictionary,
            });
        }

        if built.is_empty() {
            return Err(CatalogError::Empty);
        }

        let english: Vec<usize> = built
            .iter()
            .enumerate()
            .filter(|(_, e)| e.language() == resolver::FALLBACK_LANGUAGE)
            .map(|(i, _)| i)
            .collect();
        match english.as_slice() {
            [] => Err(CatalogError::MissingEnglish),
            [index] => {
                tracing::debug!(
                    "Built locale catalog with {} locales (fallback: {})",
                    built.len(),
                    built[*index].tag
                );
                Ok(Self {
                    english: *index,
                    entries: built,
                })
            }
            many => Err(CatalogError::MultipleEnglish(
                many.iter().map(|&i| built[i].tag.clone()).collect(),
            )),
        }
    }

    /// Entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[LocaleEntry] {
        &self.entries
    }

    /// What: Declared tags in declaration order.
    #[must_use]
    pub fn supported_locales(&self) -> Vec<&str> {
        self.entries.iter().map(LocaleEntry::tag).collect()
    }

    /// What: Find an entry by tag, ignoring case and `-`/`_` differences.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&LocaleEntry> {
        let wanted = LocaleTag::parse(tag);
        self.entries.iter().find(|e| e.matches_exactly(&wanted))
    }

    /// The English entry used as fallback and completeness floor.
    #[must_use]
    pub fn english(&self) -> &LocaleEntry {
        &self.entries[self.english]
    }

    /// Number of supported locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a validated catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// What: Pick the entry to use for `raw_tag` (see [`resolver::resolve`]).
    #[must_use]
    pub fn resolve(&self, raw_tag: &str) -> &LocaleEntry {
        resolver::resolve(raw_tag, self)
    }

    /// What: Resolve `raw_tag` and merge its dictionary over English (see [`resolver::resolve_dictionary`]).
    #[must_use]
    pub fn resolve_dictionary(&self, raw_tag: &str) -> Dictionary {
        resolver::resolve_dictionary(raw_tag, self)
    }
}

/// What: Validate a declared locale tag.
///
/// Inputs:
/// - `tag`: Tag to validate
///
/// Output:
/// - `true` if the tag looks like `language[-region]`
///
/// Details:
/// - Accepts `-` or `_` separators
/// - Rejects empty tags, spaces, other punctuation, and empty subtags
/// - Rejects a third subtag (`zh-Hans-CN`), which exact matching could not tell apart
fn is_valid_tag(tag: &str) -> bool {
    if tag.is_empty() || tag.len() > 20 {
        return false;
    }
    tag.split(['-', '_']).count() <= 2
        && tag
            .split(['-', '_'])
            .all(|part| !part.is_empty() && part.chars().all(char::is_alphanumeric))
}
