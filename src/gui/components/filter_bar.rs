// src/gui/components/filter_bar.rs
//
// Category tabs, search box, reload and copy. Edits go straight into the
// page's `Filter`; the table recomputes from it every frame.

use eframe::egui::{self, widgets::Spinner};

use crate::{
    gui::{actions, app::App},
    view::CategorySelector,
};

fn tab_label(sel: &CategorySelector) -> String {
    match sel {
        CategorySelector::All => s!("All"),
        CategorySelector::Key(k) => {
            let mut c = k.chars();
            match c.next() {
                Some(first) => first.to_uppercase().chain(c).collect(),
                None => s!(),
            }
        }
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let kind = app.current_page_kind();
    let tabs = app.current_page().category_tabs();
    let loading = app.current_page().is_loading();

    let mut do_reload = false;
    let mut do_copy = false;

    {
        let filter = app.state.gui.filter_mut(kind);

        if tabs.len() > 1 {
            ui.horizontal_wrapped(|ui| {
                for sel in &tabs {
                    let label = tab_label(sel);
                    if ui.selectable_label(filter.category == *sel, label).clicked()
                        && filter.category != *sel
                    {
                        logd!("UI: {} category → {}", kind, sel);
                        filter.category = sel.clone();
                    }
                }
            });
        }

        ui.horizontal(|ui| {
            ui.label("Search:");
            let resp = ui.add(
                egui::TextEdit::singleline(&mut filter.query)
                    .hint_text("title, tags, people…")
                    .desired_width(260.0),
            );
            if resp.changed() {
                logd!("UI: {} query → {:?}", kind, filter.query);
            }
            if !filter.query.is_empty() && ui.small_button("✕").clicked() {
                filter.query.clear();
            }

            ui.separator();

            do_reload = ui.add_enabled(!loading, egui::Button::new("Reload")).clicked();
            do_copy = ui.button("Copy").clicked();
            if loading {
                ui.add(Spinner::new());
            }
        });
    }

    let ctx = ui.ctx().clone();
    if do_reload {
        logf!("UI: Reload {}", kind);
        actions::reload(app, &ctx);
    }
    if do_copy {
        actions::copy(app, &ctx);
    }
}
