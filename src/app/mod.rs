//! `CloudApp` — the top-level egui application state.
//!
//! This module declares the `CloudApp` struct; its methods are split across
//! the sibling sub-modules:
//!
//! - `poll`    — poll scheduling and the async fetch lifecycle
//! - `content` — word-cloud painting, hover, badge, spinner

pub mod content;
pub mod poll;

use std::collections::HashMap;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use eframe::egui;

use tagcloud::cloud::session::CloudSession;
use tagcloud::cloud::WordCloudWord;
use tagcloud::net::source::FetchError;
use tagcloud::render::transition::{Placement, Transition};

/// How often the tag source is re-queried.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

pub struct CloudApp {
    pub endpoint: String,
    /// Current word set, signature, phase, and last-updated stamp.
    pub session: CloudSession,
    pub fetch_rx: Option<mpsc::Receiver<Result<Vec<WordCloudWord>, FetchError>>>,
    pub last_poll: Option<Instant>,
    // Render state for the current layout pass.
    pub transition: Option<Transition>,
    pub transition_start: Instant,
    /// Final placements of the previous pass, keyed by word text; the next
    /// transition starts surviving words from here.
    pub prev_placements: HashMap<String, Placement>,
    pub last_canvas: egui::Vec2,
    pub layout_dirty: bool,
}

impl CloudApp {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            session: CloudSession::new(),
            fetch_rx: None,
            last_poll: None,
            transition: None,
            transition_start: Instant::now(),
            prev_placements: HashMap::new(),
            last_canvas: egui::Vec2::ZERO,
            layout_dirty: false,
        }
    }
}

impl eframe::App for CloudApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_fetch();
        self.schedule_poll(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_cloud(ui);
        });
    }
}
