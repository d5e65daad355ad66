//! Spiral word-cloud layout.
//!
//! Pure geometry, no GUI types: `compute_layout` turns a sized word list
//! into per-word `(x, y, rotation)` placements around the canvas center.
//! Words walk an Archimedean spiral outward until their rotated bounding
//! box stops colliding with everything already placed. The input is sorted
//! by size descending (see `cloud::scale`), so the biggest words claim the
//! center first and late words only have to squeeze into the fringe.

use log::debug;

use crate::cloud::WordCloudWord;

/// Discrete rotation steps (degrees) a word may be drawn at.
pub const ROTATION_STEPS: [f32; 4] = [-30.0, 0.0, 30.0, 60.0];

/// Fraction of the viewport width used as canvas.
const CANVAS_WIDTH_FRACTION: f32 = 0.95;
/// Fraction of the viewport height used as canvas.
const CANVAS_HEIGHT_FRACTION: f32 = 0.92;

/// Minimum font size (px) after viewport rescaling.
const FONT_FLOOR: f32 = 20.0;

/// Spiral growth rate (px of radius per radian).
const SPIRAL_GROWTH: f32 = 3.5;
/// Spiral angle increment per probe (radians).
const SPIRAL_STEP: f32 = 0.12;
/// Probe budget per word before it is dropped from the frame.
const SPIRAL_BUDGET: usize = 4000;

/// Inputs the layout needs besides the words themselves.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    /// Host viewport size in pixels.
    pub viewport: (f32, f32),
    /// Pin every word to 0° — used for the single-entry placeholder,
    /// which must stay horizontal.
    pub force_horizontal: bool,
}

/// A word with its final placement for one render pass.
///
/// `x`/`y` are the word's center relative to the canvas center.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    /// Font size in pixels after viewport rescaling.
    pub font_px: f32,
    pub color: &'static str,
    pub x: f32,
    pub y: f32,
    pub rotate_deg: f32,
}

/// Padding (px) between placed words. Denser tag sets pack tighter.
pub fn padding_for(word_count: usize) -> f32 {
    match word_count {
        0..=5 => 30.0,
        6..=10 => 25.0,
        11..=20 => 20.0,
        _ => 15.0,
    }
}

/// Rotation step for a word, derived from a hash of its text so a tag
/// keeps its angle across refreshes.
pub fn rotation_for(text: &str) -> f32 {
    let hash: u32 = text
        .chars()
        .fold(0u32, |acc, c| acc.wrapping_mul(31).wrapping_add(c as u32));
    ROTATION_STEPS[(hash % ROTATION_STEPS.len() as u32) as usize]
}

/// Axis-aligned half-extents of a word's rotated bounding box.
///
/// Text metrics are estimated (average glyph width ≈ 0.55 em); the renderer
/// centers real galleys on the same coordinates, so a slightly generous
/// estimate only costs whitespace, never overlap.
pub fn word_half_extents(text: &str, font_px: f32, rotate_deg: f32) -> (f32, f32) {
    let width = text.chars().count() as f32 * font_px * 0.55;
    let height = font_px * 1.15;
    let rad = rotate_deg.to_radians();
    let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
    let hw = (width * cos + height * sin) / 2.0;
    let hh = (width * sin + height * cos) / 2.0;
    (hw, hh)
}

#[derive(Clone, Copy)]
struct Box2 {
    cx: f32,
    cy: f32,
    hw: f32,
    hh: f32,
}

impl Box2 {
    /// Whether two boxes are closer than `gap` on both axes.
    fn collides(&self, other: &Box2, gap: f32) -> bool {
        (self.cx - other.cx).abs() < self.hw + other.hw + gap
            && (self.cy - other.cy).abs() < self.hh + other.hh + gap
    }

    fn inside(&self, half_w: f32, half_h: f32) -> bool {
        self.cx.abs() + self.hw <= half_w && self.cy.abs() + self.hh <= half_h
    }
}

/// Place words on the canvas.
///
/// The first (largest) word always lands on the center, so the fallback
/// placeholder can never be dropped. Every later word probes the spiral;
/// a word that exhausts its probe budget is skipped for this frame.
pub fn compute_layout(words: &[WordCloudWord], params: &LayoutParams) -> Vec<PlacedWord> {
    let (vw, vh) = params.viewport;
    let half_w = vw * CANVAS_WIDTH_FRACTION / 2.0;
    let half_h = vh * CANVAS_HEIGHT_FRACTION / 2.0;

    // Adapt font sizes to the viewport, floored so text stays legible.
    let scale = (vw / 1000.0).min(vh / 800.0);

    let padding = padding_for(words.len());
    let mut placed: Vec<PlacedWord> = Vec::with_capacity(words.len());
    let mut boxes: Vec<Box2> = Vec::with_capacity(words.len());

    for word in words {
        let font_px = (word.size as f32 * scale).max(FONT_FLOOR);
        let rotate_deg = if params.force_horizontal {
            0.0
        } else {
            rotation_for(&word.text)
        };
        let (hw, hh) = word_half_extents(&word.text, font_px, rotate_deg);

        let spot = if boxes.is_empty() {
            // Center seed.
            Some((0.0, 0.0))
        } else {
            probe_spiral(&boxes, hw, hh, half_w, half_h, padding)
        };

        match spot {
            Some((x, y)) => {
                boxes.push(Box2 {
                    cx: x,
                    cy: y,
                    hw,
                    hh,
                });
                placed.push(PlacedWord {
                    text: word.text.clone(),
                    font_px,
                    color: word.color,
                    x,
                    y,
                    rotate_deg,
                });
            }
            None => {
                debug!("no room for word '{}', skipping this frame", word.text);
            }
        }
    }

    placed
}

/// Walk the spiral until a collision-free, in-canvas spot is found.
fn probe_spiral(
    boxes: &[Box2],
    hw: f32,
    hh: f32,
    half_w: f32,
    half_h: f32,
    padding: f32,
) -> Option<(f32, f32)> {
    let mut t = 0.0f32;
    for _ in 0..SPIRAL_BUDGET {
        t += SPIRAL_STEP;
        let r = SPIRAL_GROWTH * t;
        let candidate = Box2 {
            cx: r * t.cos(),
            cy: r * t.sin(),
            hw,
            hh,
        };
        if !candidate.inside(half_w, half_h) {
            continue;
        }
        if boxes.iter().all(|b| !candidate.collides(b, padding)) {
            return Some((candidate.cx, candidate.cy));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::color::color_for;

    fn word(text: &str, size: u32) -> WordCloudWord {
        WordCloudWord {
            text: text.to_string(),
            size,
            color: color_for(text),
        }
    }

    fn params() -> LayoutParams {
        LayoutParams {
            viewport: (1600.0, 1000.0),
            force_horizontal: false,
        }
    }

    fn sample_words() -> Vec<WordCloudWord> {
        vec![
            word("helpful", 80),
            word("practical", 68),
            word("fun", 61),
            word("hands-on", 55),
            word("fast", 48),
            word("dense", 44),
            word("clear", 40),
            word("hard", 36),
            word("long", 33),
            word("great", 30),
        ]
    }

    #[test]
    fn first_word_sits_at_center() {
        let placed = compute_layout(&sample_words(), &params());
        assert_eq!(placed[0].text, "helpful");
        assert_eq!((placed[0].x, placed[0].y), (0.0, 0.0));
    }

    #[test]
    fn placed_words_never_overlap() {
        let placed = compute_layout(&sample_words(), &params());
        assert!(placed.len() >= 2, "expected several words to fit");
        for i in 0..placed.len() {
            for j in (i + 1)..placed.len() {
                let a = &placed[i];
                let b = &placed[j];
                let (ahw, ahh) = word_half_extents(&a.text, a.font_px, a.rotate_deg);
                let (bhw, bhh) = word_half_extents(&b.text, b.font_px, b.rotate_deg);
                let separated = (a.x - b.x).abs() >= ahw + bhw
                    || (a.y - b.y).abs() >= ahh + bhh;
                assert!(separated, "'{}' overlaps '{}'", a.text, b.text);
            }
        }
    }

    #[test]
    fn force_horizontal_pins_rotation() {
        let words = vec![word("Add tags in your feedback form to see them here", 34)];
        let placed = compute_layout(
            &words,
            &LayoutParams {
                viewport: (1280.0, 800.0),
                force_horizontal: true,
            },
        );
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].rotate_deg, 0.0);
    }

    #[test]
    fn rotation_is_deterministic_and_discrete() {
        for text in ["fun", "hard", "useful", "great workshop"] {
            let rot = rotation_for(text);
            assert_eq!(rot, rotation_for(text));
            assert!(ROTATION_STEPS.contains(&rot));
        }
    }

    #[test]
    fn padding_shrinks_with_word_count() {
        assert_eq!(padding_for(3), 30.0);
        assert_eq!(padding_for(5), 30.0);
        assert_eq!(padding_for(8), 25.0);
        assert_eq!(padding_for(15), 20.0);
        assert_eq!(padding_for(40), 15.0);
    }

    #[test]
    fn font_never_drops_below_floor() {
        let words = vec![word("tiny", 30)];
        let placed = compute_layout(
            &words,
            &LayoutParams {
                viewport: (320.0, 240.0),
                force_horizontal: false,
            },
        );
        assert!(placed[0].font_px >= 20.0);
    }

    #[test]
    fn fonts_scale_down_on_small_viewports() {
        let words = vec![word("big", 80)];
        let small = compute_layout(
            &words,
            &LayoutParams {
                viewport: (500.0, 400.0),
                force_horizontal: false,
            },
        );
        let large = compute_layout(&words, &params());
        assert!(small[0].font_px < large[0].font_px);
    }
}
