//! Nested string dictionary model and lookup utilities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One value in a [`Dictionary`]: a string leaf, a composite leaf, or a nested map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// Translated string.
    Text(String),
    /// Composite leaf; replaced wholesale when merged.
    List(Vec<Entry>),
    /// Nested section.
    Map(Dictionary),
}

impl Entry {
    /// What: Borrow the string leaf, if this entry is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// What: Borrow the nested map, if this entry is one.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Dictionary> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Dictionary> for Entry {
    fn from(value: Dictionary) -> Self {
        Self::Map(value)
    }
}

/// Mapping from string keys to [`Entry`] values.
///
/// Equality is structural and ignores insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(BTreeMap<String, Entry>);

impl Dictionary {
    /// What: Create an empty dictionary.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// What: Insert or replace the entry at `key`, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<Entry>) -> Option<Entry> {
        self.0.insert(key.into(), entry.into())
    }

    /// What: Borrow the entry stored directly under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.0.get(key)
    }

    /// What: Whether `key` is present at the top level.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the dictionary has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate top-level `(key, entry)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.0.iter()
    }

    /// Iterate top-level keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// What: Look up an entry by dot-notation path.
    ///
    /// Inputs:
    /// - `path`: Dot-notation key (e.g., "app.titles.search")
    ///
    /// Output:
    /// - The entry at the end of the path, or `None` if any segment is missing
    ///   or crosses a non-map value.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Entry> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }

    /// What: Translate a dot-notation key.
    ///
    /// Inputs:
    /// - `key`: Dot-notation key
    ///
    /// Output:
    /// - The string leaf at `key`, or the key itself when absent or not a string
    ///
    /// Details:
    /// - Returning the key keeps missing translations visible in the UI.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        if let Some(text) = self.lookup(key).and_then(Entry::as_text) {
            return text.to_string();
        }
        tracing::debug!(
            "Missing translation key: '{}'. Returning key as-is. Please add this key to locale files.",
            key
        );
        key.to_string()
    }

    /// What: Convert a YAML value into a dictionary.
    ///
    /// Inputs:
    /// - `value`: Parsed YAML document or sub-document
    ///
    /// Output:
    /// - `Some(Dictionary)` when `value` is a mapping, `None` otherwise
    ///
    /// Details:
    /// - Non-string keys are skipped
    /// - Numbers and booleans become string leaves; nulls are dropped
    #[must_use]
    pub fn from_yaml_value(value: &serde_norway::Value) -> Option<Self> {
        let mapping = value.as_mapping()?;
        let mut dict = Self::new();
        for (key, val) in mapping {
            if let Some(key_str) = key.as_str()
                && let Some(entry) = yaml_entry(val)
            {
                dict.insert(key_str, entry);
            }
        }
        Some(dict)
    }

    /// What: Convert a JSON value into a dictionary.
    ///
    /// Inputs:
    /// - `value`: Parsed JSON document or sub-document
    ///
    /// Output:
    /// - `Some(Dictionary)` when `value` is an object, `None` otherwise
    ///
    /// Details:
    /// - Same leaf conversion rules as [`Dictionary::from_yaml_value`]
    #[must_use]
    pub fn from_json_value(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;
        let mut dict = Self::new();
        for (key, val) in object {
            if let Some(entry) = json_entry(val) {
                dict.insert(key.as_str(), entry);
            }
        }
        Some(dict)
    }
}

impl FromIterator<(String, Entry)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, Entry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a Entry);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Convert one YAML node; `None` for nulls and tagged values.
fn yaml_entry(value: &serde_norway::Value) -> Option<Entry> {
    use serde_norway::Value;
    match value {
        Value::Mapping(_) => Dictionary::from_yaml_value(value).map(Entry::Map),
        Value::Sequence(seq) => Some(Entry::List(seq.iter().filter_map(yaml_entry).collect())),
        Value::String(s) => Some(Entry::Text(s.clone())),
        Value::Number(n) => Some(Entry::Text(n.to_string())),
        Value::Bool(b) => Some(Entry::Text(b.to_string())),
        Value::Null | Value::Tagged(_) => None,
    }
}

/// Convert one JSON node; `None` for nulls.
fn json_entry(value: &serde_json::Value) -> Option<Entry> {
    use serde_json::Value;
    match value {
        Value::Object(_) => Dictionary::from_json_value(value).map(Entry::Map),
        Value::Array(items) => Some(Entry::List(items.iter().filter_map(json_entry).collect())),
        Value::String(s) => Some(Entry::Text(s.clone())),
        Value::Number(n) => Some(Entry::Text(n.to_string())),
        Value::Bool(b) => Some(Entry::Text(b.to_string())),
        Value::Null => None,
    }
}
