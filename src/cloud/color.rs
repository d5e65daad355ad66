//! Deterministic tag coloring.
//!
//! Identical tag text must always render the same color, across polls and
//! across sessions, so the cloud never recolors on a refresh.

/// Fixed 8-color ordinal palette (hex).
pub const PALETTE: [&str; 8] = [
    "#4e79a7", // blue
    "#f28e2b", // orange
    "#e15759", // red
    "#76b7b2", // teal
    "#59a14f", // green
    "#edc948", // yellow
    "#b07aa1", // purple
    "#ff9da7", // pink
];

/// Palette index for a tag: sum of character codes modulo the palette size.
pub fn palette_index(text: &str) -> usize {
    let sum: u32 = text.chars().map(|c| c as u32).fold(0, u32::wrapping_add);
    (sum % PALETTE.len() as u32) as usize
}

/// Look up the palette color for a tag. Pure function of `text`.
pub fn color_for(text: &str) -> &'static str {
    PALETTE[palette_index(text)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_is_stable_across_calls() {
        let first = color_for("helpful");
        let second = color_for("helpful");
        assert_eq!(first, second);
    }

    #[test]
    fn index_always_within_palette() {
        for text in ["", "a", "Helpful", "日本語タグ", "a much longer tag string"] {
            assert!(palette_index(text) < PALETTE.len());
        }
    }

    #[test]
    fn colors_are_hex_strings() {
        for color in PALETTE {
            assert!(color.starts_with('#'));
            assert_eq!(color.len(), 7);
        }
    }
}
