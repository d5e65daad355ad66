//! Content signatures for change detection.
//!
//! A signature is a canonical serialization of the `(text, size)` pairs of a
//! word set. Two sets with the same pairs produce the same signature
//! regardless of order, so a poll that returns identical data can be skipped
//! without disturbing an in-progress layout animation.

use super::WordCloudWord;

/// Build the canonical signature for a word set.
pub fn signature(words: &[WordCloudWord]) -> String {
    let mut pairs: Vec<(&str, u32)> = words.iter().map(|w| (w.text.as_str(), w.size)).collect();
    pairs.sort();
    let parts: Vec<String> = pairs
        .iter()
        .map(|(text, size)| format!("{}:{}", text, size))
        .collect();
    parts.join("|")
}
