//! The tag-cloud pipeline: Fetch → Aggregate → Scale → Words.
//!
//! `poll` is the network entry point; `build_words` is the pure tail of the
//! pipeline, kept public so tests can drive it without a backend.

use log::debug;

use crate::cloud::aggregate::aggregate;
use crate::cloud::scale::map_sizes;
use crate::cloud::WordCloudWord;
use crate::net::source::{FetchError, TagSource};

/// Runs one poll cycle against a tag source.
pub struct CloudEngine;

impl CloudEngine {
    pub fn new() -> Self {
        Self
    }

    /// Fetch tags from `source` and build the sized word set.
    pub fn poll(&self, source: &dyn TagSource) -> Result<Vec<WordCloudWord>, FetchError> {
        let tags = source.fetch_tags()?;
        self.build_words(&tags)
    }

    /// Aggregate raw tags and map counts to sized words.
    ///
    /// Zero usable tags after normalization is reported as `EmptyData` so
    /// the session can pattern-match it alongside transport failures.
    pub fn build_words(&self, tags: &[String]) -> Result<Vec<WordCloudWord>, FetchError> {
        let counts = aggregate(tags);
        if counts.is_empty() {
            return Err(FetchError::EmptyData);
        }
        let words = map_sizes(&counts);
        debug!("pipeline: {} raw tags -> {} words", tags.len(), words.len());
        Ok(words)
    }
}

impl Default for CloudEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSource(Result<Vec<String>, FetchError>);

    impl TagSource for FakeSource {
        fn fetch_tags(&self) -> Result<Vec<String>, FetchError> {
            self.0.clone()
        }
    }

    fn strings(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn builds_words_end_to_end() {
        let engine = CloudEngine::new();
        let words = engine
            .build_words(&strings(&["Helpful", "helpful ", "Practical"]))
            .unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text, "helpful");
        assert!(words[0].size > words[1].size);
    }

    #[test]
    fn empty_input_is_empty_data() {
        let engine = CloudEngine::new();
        assert_eq!(engine.build_words(&[]), Err(FetchError::EmptyData));
        assert_eq!(
            engine.build_words(&strings(&["  ", ""])),
            Err(FetchError::EmptyData)
        );
    }

    #[test]
    fn poll_drives_an_injected_source() {
        let engine = CloudEngine::new();
        let source = FakeSource(Ok(strings(&["Fun", "fun", "Hard"])));
        let words = engine.poll(&source).unwrap();
        assert_eq!(words[0].text, "fun");
    }

    #[test]
    fn poll_propagates_source_errors() {
        let engine = CloudEngine::new();
        let source = FakeSource(Err(FetchError::Network("down".into())));
        assert!(matches!(
            engine.poll(&source),
            Err(FetchError::Network(_))
        ));
    }
}
