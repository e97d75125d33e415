// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv::rows_to_string, gui::app::App};

/// Copy the rows currently shown (after filtering) as TSV.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let page = app.current_page();
    let filter = app.state.gui.filter(page.kind());
    let view = page.view(&filter);

    if view.rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let headers: Vec<String> = page.columns().iter().map(|c| s!(*c)).collect();
    logf!("Copy: page={}, rows={}, headers={}", page.kind(), view.rows.len(), headers.len());

    match rows_to_string(&headers, &view.rows, b'\t') {
        Ok(txt) => {
            ui_ctx.copy_text(txt);
            app.status(format!("Copied {} rows to clipboard", view.rows.len()));
        }
        Err(e) => {
            loge!("Copy: {}", e);
            app.status(format!("Copy failed: {e}"));
        }
    }
}
