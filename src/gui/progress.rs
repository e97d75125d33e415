// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    label: String,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, label: s!() }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, label: &str) {
        self.label = s!(label);
        self.set_status(format!("Loading {label}…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(format!("{}: {}", self.label, msg));
    }
    fn records_done(&mut self, count: usize) {
        self.set_status(format!("{}: {} records", self.label, count));
    }
}
