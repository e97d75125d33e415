// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        consts::WINDOW_TITLE,
        options::{ContentKind, FeedConfig},
        state::AppState,
    },
    core::net::FeedSource,
};

use super::{
    actions,
    components,
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions, config: FeedConfig, source: Arc<dyn FeedSource>) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new(config), source)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub pages: Vec<Box<dyn Page>>,
    pub source: Arc<dyn FeedSource>,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,

    // first frame triggers the initial load of the start tab
    started: bool,
}

impl App {
    pub fn new(state: AppState, source: Arc<dyn FeedSource>) -> Self {
        let configured: Vec<&str> = ContentKind::ALL
            .iter()
            .filter(|k| state.config.url(**k).is_some())
            .map(|k| k.label())
            .collect();
        logf!("Init: feeds configured for [{}]", configured.join(", "));

        Self {
            state,
            pages: router::build_pages(),
            source,
            status: Arc::new(Mutex::new(s!("Idle"))),
            started: false,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn current_page_kind(&self) -> ContentKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &dyn Page { &*self.pages[self.current_index()] }

    #[inline]
    pub fn current_page_mut(&mut self) -> &mut dyn Page {
        let ix = self.current_index();
        &mut *self.pages[ix]
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Leave the current tab (cancelling its load) and enter `idx` (reloading it).
    pub fn switch_to(&mut self, idx: usize, ctx: &egui::Context) {
        if idx == self.current_index() || idx >= self.pages.len() {
            return;
        }
        let prev = self.current_page_kind();
        self.current_page_mut().cancel();
        self.state.gui.current_page_index = idx;
        logf!("UI: Tab switch {} → {}", prev, self.current_page_kind());
        actions::reload(self, ctx);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.started {
            self.started = true;
            actions::reload(self, ctx);
        }

        for page in self.pages.iter_mut() {
            page.poll();
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_panel::draw_status_line(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::filter_bar::draw(ui, self);

            components::status_panel::draw(ui, self);

            ui.separator();

            components::record_table::draw(ui, self);
        });
    }
}
