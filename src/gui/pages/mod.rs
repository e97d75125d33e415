// src/gui/pages/mod.rs
//
// One page per content kind. Every page is the same generic `FeedPage<S>`;
// the schema decides columns, categories and records. Pages own their load
// state and a channel that workers report back on.

use std::marker::PhantomData;
use std::sync::{
    Arc, Mutex,
    mpsc::{self, Receiver, Sender},
};
use std::thread;

use eframe::egui;

use crate::{
    config::options::{ContentKind, FeedConfig},
    core::net::FeedSource,
    feed::{self, Diagnostics, FeedState, LoadOutcome, LoadTicket},
    gui::progress::GuiProgress,
    specs::{Record, Schema},
    view::{self, CategorySelector, Filter},
};

/// Rows for the table, already filtered.
pub struct PageView {
    pub total: usize,
    pub rows: Vec<Vec<String>>,
}

pub trait Page: Send {
    fn kind(&self) -> ContentKind;
    fn title(&self) -> &'static str { self.kind().label() }

    /// Table headers, one per cell a record renders.
    fn columns(&self) -> &'static [&'static str];

    /// `All` followed by the type's categories; just `All` if it has none.
    fn category_tabs(&self) -> Vec<CategorySelector>;

    /// Start a load on a worker thread. Supersedes any load in flight.
    fn reload(&mut self, config: &FeedConfig, source: Arc<dyn FeedSource>, ctx: &egui::Context, status: Arc<Mutex<String>>);

    /// Tab left: whatever is in flight must not land.
    fn cancel(&mut self);

    /// Drain finished loads. True when the shown state changed.
    fn poll(&mut self) -> bool;

    fn view(&self, filter: &Filter) -> PageView;

    fn error(&self) -> Option<&str>;
    fn diagnostics(&self) -> Option<&Diagnostics>;
    fn is_loading(&self) -> bool;
    fn has_loaded(&self) -> bool;
}

type Delivery<R> = (LoadTicket, LoadOutcome<R>);

pub struct FeedPage<S: Schema> {
    state: FeedState<S::Record>,
    tx: Sender<Delivery<S::Record>>,
    rx: Receiver<Delivery<S::Record>>,
    loaded_once: bool,
    _schema: PhantomData<fn() -> S>,
}

impl<S: Schema> FeedPage<S> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { state: FeedState::new(), tx, rx, loaded_once: false, _schema: PhantomData }
    }
}

impl<S: Schema> Default for FeedPage<S> {
    fn default() -> Self { Self::new() }
}

impl<S: Schema> Page for FeedPage<S> {
    fn kind(&self) -> ContentKind { S::KIND }

    fn columns(&self) -> &'static [&'static str] { S::COLUMNS }

    fn category_tabs(&self) -> Vec<CategorySelector> {
        view::category_tabs(&S::CATEGORIES)
    }

    fn reload(&mut self, config: &FeedConfig, source: Arc<dyn FeedSource>, ctx: &egui::Context, status: Arc<Mutex<String>>) {
        let ticket = self.state.begin_load();
        let tx = self.tx.clone();
        let config = config.clone();
        let ctx = ctx.clone();
        logf!("Reload: {} ({:?})", S::KIND, ticket);

        thread::spawn(move || {
            let mut prog = GuiProgress::new(status, ctx.clone());
            let outcome = feed::load::<S>(&config, source.as_ref(), Some(&mut prog));
            // Receiver gone means the app is shutting down.
            let _ = tx.send((ticket, outcome));
            ctx.request_repaint();
        });
    }

    fn cancel(&mut self) {
        if self.state.is_loading() {
            logd!("Reload: {} cancelled", S::KIND);
        }
        self.state.cancel();
    }

    fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok((ticket, outcome)) = self.rx.try_recv() {
            if self.state.finish(ticket, outcome) {
                self.loaded_once = true;
                changed = true;
            }
        }
        changed
    }

    fn view(&self, filter: &Filter) -> PageView {
        let v = filter.apply(self.state.records());
        PageView { total: v.total, rows: v.shown.iter().map(|r| r.cells()).collect() }
    }

    fn error(&self) -> Option<&str> { self.state.error() }
    fn diagnostics(&self) -> Option<&Diagnostics> { self.state.diagnostics() }
    fn is_loading(&self) -> bool { self.state.is_loading() }
    fn has_loaded(&self) -> bool { self.loaded_once }
}
