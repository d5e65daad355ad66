//! Log-scale size mapping: tag counts → font sizes in pixels.
//!
//! Feedback tag counts are long-tailed (a handful of tags dominate), so a
//! linear scale would shrink everything but the top tag to illegibility.
//! The log scale compresses the tail into the readable [30, 80] px band.

use super::aggregate::TagFrequency;
use super::color::color_for;
use super::WordCloudWord;

/// Smallest rendered font size (px).
pub const SIZE_MIN: u32 = 30;
/// Largest rendered font size (px).
pub const SIZE_MAX: u32 = 80;

/// Map tag counts to sized, colored words, sorted by size descending.
///
/// The log-scale domain is `[max(1, min_count), max(2, max_count)]`, which
/// keeps the endpoints apart in the common single-count case. When every
/// count is equal beyond that guard the domain collapses; all words then map
/// to the range midpoint. Output is always clamped to `[SIZE_MIN, SIZE_MAX]`.
///
/// Descending size order matters downstream: the spiral packer places big
/// words first so late large words never fail to fit.
pub fn map_sizes(counts: &TagFrequency) -> Vec<WordCloudWord> {
    if counts.is_empty() {
        return Vec::new();
    }

    let min_count = counts.values().copied().min().unwrap_or(1);
    let max_count = counts.values().copied().max().unwrap_or(1);
    let d0 = f64::from(min_count.max(1));
    let d1 = f64::from(max_count.max(2));

    let log_span = d1.ln() - d0.ln();
    let range = f64::from(SIZE_MAX - SIZE_MIN);

    let mut words: Vec<WordCloudWord> = counts
        .iter()
        .map(|(text, &count)| {
            let t = if log_span > f64::EPSILON {
                ((f64::from(count).ln() - d0.ln()) / log_span).clamp(0.0, 1.0)
            } else {
                // Degenerate domain (all counts equal): midpoint weight.
                0.5
            };
            let size = (f64::from(SIZE_MIN) + t * range).round() as u32;
            WordCloudWord {
                text: text.clone(),
                size: size.clamp(SIZE_MIN, SIZE_MAX),
                color: color_for(text),
            }
        })
        .collect();

    // Stable tie-break on text keeps the ordering reproducible.
    words.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.text.cmp(&b.text)));
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::aggregate::aggregate;

    #[test]
    fn sizes_stay_within_range() {
        let mut counts = TagFrequency::new();
        counts.insert("rare".into(), 1);
        counts.insert("common".into(), 10_000);
        for word in map_sizes(&counts) {
            assert!(word.size >= SIZE_MIN && word.size <= SIZE_MAX);
        }
    }

    #[test]
    fn equal_counts_map_to_midpoint() {
        let mut counts = TagFrequency::new();
        counts.insert("a".into(), 5);
        counts.insert("b".into(), 5);
        for word in map_sizes(&counts) {
            assert_eq!(word.size, 55);
        }
    }

    #[test]
    fn single_tag_maps_to_minimum() {
        // Domain guard gives [1, 2]; one occurrence sits at the bottom.
        let mut counts = TagFrequency::new();
        counts.insert("solo".into(), 1);
        let words = map_sizes(&counts);
        assert_eq!(words[0].size, SIZE_MIN);
    }

    #[test]
    fn more_frequent_tag_is_larger() {
        let counts = aggregate(["Helpful", "helpful ", "Practical"]);
        let words = map_sizes(&counts);
        assert_eq!(words[0].text, "helpful");
        assert_eq!(words[1].text, "practical");
        assert!(words[0].size > words[1].size);
    }

    #[test]
    fn output_sorted_descending_by_size() {
        let mut counts = TagFrequency::new();
        counts.insert("a".into(), 1);
        counts.insert("b".into(), 3);
        counts.insert("c".into(), 9);
        let words = map_sizes(&counts);
        for pair in words.windows(2) {
            assert!(pair[0].size >= pair[1].size);
        }
    }

    #[test]
    fn empty_counts_yield_no_words() {
        assert!(map_sizes(&TagFrequency::new()).is_empty());
    }
}
