//! Poll-loop methods for `CloudApp`.
//!
//! One fetch at a time: a background thread runs the pipeline against the
//! HTTP tag source and sends the outcome over an mpsc channel; the UI
//! thread drains it with `try_recv` each frame. A failed fetch is not
//! retried — the next 5-second tick simply polls again.

use std::sync::mpsc;
use std::time::Instant;

use eframe::egui;

use tagcloud::engine::pipeline::CloudEngine;
use tagcloud::net::source::HttpTagSource;

use super::{CloudApp, POLL_INTERVAL};

impl CloudApp {
    /// Start a background fetch when the poll interval has elapsed, and
    /// keep a repaint queued for the next tick otherwise.
    pub fn schedule_poll(&mut self, ctx: &egui::Context) {
        if self.fetch_rx.is_some() {
            return;
        }

        let due = match self.last_poll {
            None => true,
            Some(at) => at.elapsed() >= POLL_INTERVAL,
        };
        if !due {
            if let Some(at) = self.last_poll {
                ctx.request_repaint_after(POLL_INTERVAL.saturating_sub(at.elapsed()));
            }
            return;
        }

        self.last_poll = Some(Instant::now());
        let (tx, rx) = mpsc::channel();
        self.fetch_rx = Some(rx);

        let endpoint = self.endpoint.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let engine = CloudEngine::new();
            let outcome =
                HttpTagSource::new(&endpoint).and_then(|source| engine.poll(&source));
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });
    }

    /// Drain the fetch channel and apply the outcome to the session.
    /// A changed word set marks the layout dirty; an unchanged one is a
    /// no-op beyond the signature comparison itself.
    pub fn check_fetch(&mut self) {
        if let Some(rx) = &self.fetch_rx {
            if let Ok(outcome) = rx.try_recv() {
                if self.session.apply(outcome) {
                    self.layout_dirty = true;
                }
                self.fetch_rx = None;
            }
        }
    }
}
