//! The tag-cloud data pipeline: normalization, counting, size mapping,
//! color assignment, change detection, and the poll-state machine.
//!
//! Everything in this module is GUI-free and deterministic so the whole
//! pipeline can be driven by tests with fake tag sources.

pub mod aggregate;
pub mod color;
pub mod scale;
pub mod session;
pub mod signature;

/// Text shown when no real tag data is available.
pub const PLACEHOLDER_TEXT: &str = "Add tags in your feedback form to see them here";

/// Font size (px) of the fallback placeholder word.
pub const PLACEHOLDER_SIZE: u32 = 34;

/// A word ready for layout: normalized text, a log-scaled font size in
/// pixels, and a deterministic palette color.
///
/// Instances are rebuilt from scratch on every poll that detects a change;
/// they are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCloudWord {
    pub text: String,
    /// Font size in pixels, always within [30, 80].
    pub size: u32,
    /// Hex color like `"#4e79a7"`, a pure function of `text`.
    pub color: &'static str,
}

/// The single-entry word set shown in the Fallback phase.
pub fn placeholder_words() -> Vec<WordCloudWord> {
    vec![WordCloudWord {
        text: PLACEHOLDER_TEXT.to_string(),
        size: PLACEHOLDER_SIZE,
        color: color::color_for(PLACEHOLDER_TEXT),
    }]
}
