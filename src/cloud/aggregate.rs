//! Frequency aggregation: raw tag records → normalized tag counts.

use std::collections::HashMap;

/// Mapping from normalized tag text to occurrence count (always ≥ 1).
pub type TagFrequency = HashMap<String, u32>;

/// Normalize a raw tag: trim surrounding whitespace and lowercase.
/// Returns `None` when nothing usable remains.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Count tag occurrences after normalization.
///
/// Blank and whitespace-only entries are dropped. An empty result is the
/// "no data" condition, not an error; this function never fails.
pub fn aggregate<I, S>(tags: I) -> TagFrequency
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = TagFrequency::new();
    for raw in tags {
        if let Some(tag) = normalize_tag(raw.as_ref()) {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }
    counts
}
