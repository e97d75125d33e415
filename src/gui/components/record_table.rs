// src/gui/components/record_table.rs
//
// Draws the filtered records. Purely a view; the page hands over rows that
// already passed the category + query filter, in base order.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::{CELL_PREVIEW_CHARS, ROW_HEIGHT},
    core::sanitize::ellipsize,
    gui::app::App,
};

fn initial_width(header: &str) -> f32 {
    match header {
        "Title" | "Name" => 260.0,
        "Year" | "Date" | "Created" => 90.0,
        "Summary" | "Description" | "Authors" => 320.0,
        _ => 140.0,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let kind = page.kind();
    let filter = app.state.gui.filter(kind);
    let view = page.view(&filter);
    let columns = page.columns();

    ui.horizontal(|ui| {
        ui.label(format!("Showing {} of {}", view.rows.len(), view.total));
    });

    if view.rows.is_empty() {
        ui.add_space(12.0);
        let msg = if page.is_loading() {
            "Loading…"
        } else if page.error().is_some() {
            "No records."
        } else if view.total > 0 {
            "No records match the current filter."
        } else if page.has_loaded() {
            "This feed has no records."
        } else {
            "Not loaded yet."
        };
        ui.label(RichText::new(msg).italics());
        return;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt(("record_table_hscroll", kind))
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("record_table", kind));
            for h in columns {
                table = table.column(Column::initial(initial_width(h)).resizable(true).clip(true).at_least(40.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in columns {
                        header.col(|ui| {
                            ui.strong(*h);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, view.rows.len(), |mut row| {
                        let Some(cells) = view.rows.get(row.index()) else { return };
                        for ci in 0..columns.len() {
                            let cell = cells.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                let resp = ui.label(ellipsize(cell, CELL_PREVIEW_CHARS));
                                if cell.chars().count() > CELL_PREVIEW_CHARS {
                                    resp.on_hover_text(cell);
                                }
                            });
                        }
                    });
                });
        });
}
