//! The poll-state machine.
//!
//! `CloudSession` owns the triple the rest of the viewer reads: the current
//! word set, its signature, and the last-updated badge text. Fetch outcomes
//! are applied through [`CloudSession::apply`], which reports whether
//! anything actually changed — the renderer only re-runs layout when it did.

use log::{info, warn};

use super::signature::signature;
use super::{placeholder_words, WordCloudWord};
use crate::net::source::FetchError;

/// Where the viewer is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudPhase {
    /// Before the first fetch outcome; the UI shows a spinner.
    Loading,
    /// Last fetch produced at least one usable tag.
    Live,
    /// Last fetch failed or produced zero usable tags; the placeholder
    /// word set is shown instead.
    Fallback,
}

/// Owns the current word set, signature, phase, and last-updated stamp.
pub struct CloudSession {
    phase: CloudPhase,
    words: Vec<WordCloudWord>,
    sig: String,
    last_updated: Option<String>,
}

impl CloudSession {
    pub fn new() -> Self {
        Self {
            phase: CloudPhase::Loading,
            words: Vec::new(),
            sig: String::new(),
            last_updated: None,
        }
    }

    pub fn phase(&self) -> CloudPhase {
        self.phase
    }

    pub fn words(&self) -> &[WordCloudWord] {
        &self.words
    }

    /// Badge text of the last accepted update, e.g. `"14:02:31"`.
    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    /// Apply one fetch outcome. Returns `true` when the word set (and
    /// therefore the layout) changed.
    ///
    /// A successful poll whose signature matches the stored one is a no-op:
    /// no re-layout, no `last_updated` write. A failure while already in
    /// Fallback is likewise a no-op, so a dead backend does not re-trigger
    /// the placeholder animation every five seconds.
    pub fn apply(&mut self, outcome: Result<Vec<WordCloudWord>, FetchError>) -> bool {
        match outcome {
            Ok(words) => {
                let sig = signature(&words);
                if self.phase == CloudPhase::Live && sig == self.sig {
                    return false;
                }
                self.phase = CloudPhase::Live;
                self.words = words;
                self.sig = sig;
                self.touch();
                true
            }
            Err(err) => {
                // Indistinguishable to the user, distinguished in the log:
                // a dead backend is an operator problem, an empty one is not.
                match &err {
                    FetchError::EmptyData => info!("tag source returned no usable tags"),
                    other => warn!("tag fetch failed: {}", other),
                }
                if self.phase == CloudPhase::Fallback {
                    return false;
                }
                self.phase = CloudPhase::Fallback;
                self.words = placeholder_words();
                self.sig = signature(&self.words);
                self.touch();
                true
            }
        }
    }

    fn touch(&mut self) {
        self.last_updated = Some(chrono::Local::now().format("%H:%M:%S").to_string());
    }
}

impl Default for CloudSession {
    fn default() -> Self {
        Self::new()
    }
}
