// src/gui/actions/reload.rs
use eframe::egui;

use crate::gui::app::App;

/// Kick off a fresh load of the current tab. An older load still in flight
/// for this tab is superseded and its result dropped on arrival.
pub fn reload(app: &mut App, ctx: &egui::Context) {
    let kind = app.current_page_kind();

    if app.state.config.url(kind).is_none() {
        logw!("Reload: {} has no feed URL ({})", kind, kind.env_var());
    }

    let config = app.state.config.clone();
    let source = app.source.clone();
    let status = app.status.clone();
    app.current_page_mut().reload(&config, source, ctx, status);
}
