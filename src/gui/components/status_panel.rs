// src/gui/components/status_panel.rs
//
// Error banner + diagnostics for the current page, and the bottom status line.

use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;

const ERROR_RED: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let Some(err) = page.error() else { return };

    ui.add_space(4.0);
    ui.label(RichText::new(err).color(ERROR_RED).strong());

    let lines = page.diagnostics().map(|d| d.lines()).unwrap_or_default();
    if lines.is_empty() {
        return;
    }

    let show = &mut app.state.gui.show_diagnostics;
    ui.checkbox(show, "Show diagnostics");
    if *show {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            for line in &lines {
                ui.monospace(line);
            }
        });
    }
}

pub fn draw_status_line(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        ui.label(app.status_text());
    });
}
