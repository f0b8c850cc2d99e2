//! Deep merge of locale dictionaries.

use crate::dictionary::{Dictionary, Entry};

/// What: Deep-merge `overlay` over `base` into a new dictionary.
///
/// Inputs:
/// - `base`: Completeness floor (the English dictionary)
/// - `overlay`: Dictionary whose values win
///
/// Output:
/// - New dictionary containing every key of `base` and of `overlay`
///
/// Details:
/// - Recurses only where both sides hold a nested map at the same key
/// - Any other `overlay` value (string, list, or a map over a non-map) replaces the base value wholesale
/// - Lists are never concatenated or merged element-wise
/// - Neither input is mutated
#[must_use]
pub fn merge(base: &Dictionary, overlay: &Dictionary) -> Dictionary {
    let mut merged = base.clone();
    for (key, value) in overlay {
        let entry = match (base.get(key), value) {
            (Some(Entry::Map(base_map)), Entry::Map(overlay_map)) => {
                Entry::Map(merge(base_map, overlay_map))
            }
            _ => value.clone(),
        };
        merged.insert(key.as_str(), entry);
    }
    merged
}
