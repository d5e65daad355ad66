//! Word-cloud painting for `CloudApp`.
//!
//! Draws the current transition frame onto the central panel: a soft glow
//! layer behind each word, the foreground text on top, both rotated via
//! `TextShape`. Hover enlarges and brightens a word; a corner badge shows
//! the live/fallback status.

use std::time::Instant;

use eframe::egui;
use egui::epaint::TextShape;

use tagcloud::cloud::session::CloudPhase;
use tagcloud::render::layout::{compute_layout, word_half_extents, LayoutParams};
use tagcloud::render::transition::{FrameWord, Transition};

use super::CloudApp;

/// Hover scale factor applied to a word's font size.
const HOVER_SCALE: f32 = 1.08;

impl CloudApp {
    pub fn draw_cloud(&mut self, ui: &mut egui::Ui) {
        let rect = ui.available_rect_before_wrap();

        // A resize re-lays-out the current word set without a new fetch.
        let size = rect.size();
        if (size.x - self.last_canvas.x).abs() > 1.0 || (size.y - self.last_canvas.y).abs() > 1.0
        {
            self.last_canvas = size;
            if !self.session.words().is_empty() {
                self.layout_dirty = true;
            }
        }

        if self.session.phase() == CloudPhase::Loading {
            ui.centered_and_justified(|ui| {
                ui.add(egui::Spinner::new().size(36.0));
            });
            return;
        }

        if self.layout_dirty {
            self.relayout(size);
        }

        self.draw_badge(ui, rect);

        let elapsed = self.transition_start.elapsed();
        let hover_pos = ui.input(|i| i.pointer.hover_pos());

        if let Some(transition) = &self.transition {
            let painter = ui.painter_at(rect);
            let center = rect.center();

            for word in transition.sample(elapsed) {
                let hovered = hover_pos
                    .map(|p| word_hit(&word, center, p))
                    .unwrap_or(false);
                draw_word(&painter, center, &word, hovered);
            }

            if !transition.is_finished(elapsed) {
                ui.ctx().request_repaint();
            }
        }
    }

    /// Run the layout engine on the current word set and start a new
    /// transition from the previous frame's placements.
    fn relayout(&mut self, canvas: egui::Vec2) {
        let params = LayoutParams {
            viewport: (canvas.x, canvas.y),
            force_horizontal: self.session.phase() == CloudPhase::Fallback,
        };
        let placed = compute_layout(self.session.words(), &params);

        let transition = Transition::build(&self.prev_placements, &placed);
        self.prev_placements = transition.final_placements();
        self.transition = Some(transition);
        self.transition_start = Instant::now();
        self.layout_dirty = false;
    }

    fn draw_badge(&self, ui: &mut egui::Ui, rect: egui::Rect) {
        let painter = ui.painter_at(rect);
        let anchor = rect.right_top() + egui::vec2(-12.0, 10.0);
        let (text, color) = match self.session.phase() {
            CloudPhase::Live => (
                format!(
                    "● live — updated {}",
                    self.session.last_updated().unwrap_or("–")
                ),
                egui::Color32::from_rgb(89, 161, 79),
            ),
            CloudPhase::Fallback => (
                "○ no tags yet".to_string(),
                egui::Color32::GRAY,
            ),
            CloudPhase::Loading => return,
        };
        painter.text(
            anchor,
            egui::Align2::RIGHT_TOP,
            text,
            egui::FontId::proportional(13.0),
            color,
        );
    }
}

/// Hit-test the pointer against a word's rotated bounding box (axis-aligned
/// approximation, same metrics the layout used).
fn word_hit(word: &FrameWord, center: egui::Pos2, pointer: egui::Pos2) -> bool {
    let (hw, hh) = word_half_extents(&word.text, word.font_px, word.rotate_deg);
    let cx = center.x + word.x;
    let cy = center.y + word.y;
    (pointer.x - cx).abs() <= hw && (pointer.y - cy).abs() <= hh
}

/// Paint one word: glow layer first, foreground on top.
fn draw_word(painter: &egui::Painter, center: egui::Pos2, word: &FrameWord, hovered: bool) {
    let font_px = if hovered {
        word.font_px * HOVER_SCALE
    } else {
        word.font_px
    };
    let mut color = hex_color(word.color);
    if hovered {
        color = brighten(color);
    }
    let pos = center + egui::vec2(word.x, word.y);
    let angle = word.rotate_deg.to_radians();

    // Soft background duplicate, slightly larger and translucent.
    paint_text(
        painter,
        pos,
        &word.text,
        font_px + 3.0,
        angle,
        color.gamma_multiply(0.25 * word.alpha),
    );
    paint_text(
        painter,
        pos,
        &word.text,
        font_px,
        angle,
        color.gamma_multiply(word.alpha),
    );
}

/// Lay out and add one rotated text shape centered on `center`.
fn paint_text(
    painter: &egui::Painter,
    center: egui::Pos2,
    text: &str,
    font_px: f32,
    angle: f32,
    color: egui::Color32,
) {
    let galley = painter.layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(font_px),
        color,
    );
    // TextShape rotates around its anchor; shift the anchor so the
    // rotation pivots on the text center.
    let rot = egui::emath::Rot2::from_angle(angle);
    let pos = center - rot * (galley.size() / 2.0);
    painter.add(TextShape::new(pos, galley, color).with_angle(angle));
}

fn hex_color(hex: &str) -> egui::Color32 {
    let value = u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0x80_80_80);
    egui::Color32::from_rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

fn brighten(color: egui::Color32) -> egui::Color32 {
    egui::Color32::from_rgb(
        color.r().saturating_add(40),
        color.g().saturating_add(40),
        color.b().saturating_add(40),
    )
}
