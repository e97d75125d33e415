// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::sync::Arc;

use eframe::egui::ViewportBuilder;
use lab_feeds::{
    config::{
        consts::{WINDOW_H, WINDOW_W, WINDOW_TITLE},
        options::FeedConfig,
    },
    core::net::HttpSource,
    gui,
};

fn main() {
    if let Err(e) = lab_feeds::log::init() {
        eprintln!("Logging disabled: {e}");
    }

    let source = match HttpSource::new() {
        Ok(s) => Arc::new(s),
        Err(e) => {
            eprintln!("HTTP client failed: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, FeedConfig::from_env(), source) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
