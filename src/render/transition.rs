//! Enter/update transition animation.
//!
//! Builds a time-parameterized animation from the previous frame's word
//! placements to a freshly computed layout: surviving words glide from
//! where they were, new words fade in at their final spot, and start times
//! are staggered by index so the cloud never pops in all at once. Purely
//! cosmetic — once the animation completes, every word sits exactly where
//! the layout engine put it.

use std::collections::HashMap;
use std::time::Duration;

use super::layout::PlacedWord;

/// Per-word animation duration.
pub const WORD_DURATION: Duration = Duration::from_millis(600);
/// Start-time stagger between consecutive words.
pub const WORD_STAGGER: Duration = Duration::from_millis(40);

/// A placement carried across frames, keyed by word text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub rotate_deg: f32,
    pub font_px: f32,
}

impl Placement {
    fn of(word: &PlacedWord) -> Self {
        Self {
            x: word.x,
            y: word.y,
            rotate_deg: word.rotate_deg,
            font_px: word.font_px,
        }
    }
}

/// One word's animation track.
#[derive(Debug, Clone)]
pub struct AnimWord {
    pub text: String,
    pub color: &'static str,
    pub from: Placement,
    pub to: Placement,
    /// New words fade in; surviving words stay opaque while they move.
    pub fade_in: bool,
    pub delay: Duration,
}

/// A word sampled at a point in time, ready to draw.
#[derive(Debug, Clone)]
pub struct FrameWord {
    pub text: String,
    pub color: &'static str,
    pub x: f32,
    pub y: f32,
    pub rotate_deg: f32,
    pub font_px: f32,
    pub alpha: f32,
}

/// The full transition for one layout pass.
pub struct Transition {
    words: Vec<AnimWord>,
    total: Duration,
}

impl Transition {
    /// Build a transition into `placed`, starting surviving words from
    /// their entry in `previous` (keyed by text).
    pub fn build(previous: &HashMap<String, Placement>, placed: &[PlacedWord]) -> Self {
        let words: Vec<AnimWord> = placed
            .iter()
            .enumerate()
            .map(|(index, word)| {
                let to = Placement::of(word);
                let (from, fade_in) = match previous.get(&word.text) {
                    Some(prev) => (*prev, false),
                    None => (to, true),
                };
                AnimWord {
                    text: word.text.clone(),
                    color: word.color,
                    from,
                    to,
                    fade_in,
                    delay: WORD_STAGGER * index as u32,
                }
            })
            .collect();

        let total = match words.last() {
            Some(last) => last.delay + WORD_DURATION,
            None => Duration::ZERO,
        };
        Self { words, total }
    }

    /// The final placements of this transition, keyed by text. Feed this
    /// back in as `previous` for the next layout pass.
    pub fn final_placements(&self) -> HashMap<String, Placement> {
        self.words
            .iter()
            .map(|w| (w.text.clone(), w.to))
            .collect()
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total
    }

    /// Sample every word at `elapsed` since the transition started.
    pub fn sample(&self, elapsed: Duration) -> Vec<FrameWord> {
        self.words
            .iter()
            .map(|word| {
                let local = elapsed.saturating_sub(word.delay);
                let t = (local.as_secs_f32() / WORD_DURATION.as_secs_f32()).clamp(0.0, 1.0);
                let p = ease_out_cubic(t);
                FrameWord {
                    text: word.text.clone(),
                    color: word.color,
                    x: lerp(word.from.x, word.to.x, p),
                    y: lerp(word.from.y, word.to.y, p),
                    rotate_deg: lerp(word.from.rotate_deg, word.to.rotate_deg, p),
                    font_px: lerp(word.from.font_px, word.to.font_px, p),
                    alpha: if word.fade_in { p } else { 1.0 },
                }
            })
            .collect()
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
