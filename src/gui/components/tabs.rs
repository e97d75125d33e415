// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.
// Leaving a tab cancels its load; entering one reloads it.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut switch_to: Option<usize> = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        for (idx, page) in app.pages.iter().enumerate() {
            let selected = idx == cur;
            let label = if page.is_loading() {
                format!("{} …", page.title())
            } else {
                s!(page.title())
            };
            if ui.selectable_label(selected, label).clicked() && !selected {
                switch_to = Some(idx);
            }
        }
    });

    if let Some(idx) = switch_to {
        let ctx = ui.ctx().clone();
        app.switch_to(idx, &ctx);
    }
}
