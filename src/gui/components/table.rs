// src/gui/components/table.rs
//
// Draws the live table over the visible (season-filtered) records.
// Purely a view; empty cells display as "(Unknown)".

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::view;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let headers = view::table_headers(app.state.options.export.metric);

    // Reserve space for the scroll bar instead of floating it over content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::initial(90.0).resizable(true).at_least(40.0))
        .column(Column::remainder().resizable(true).clip(true).at_least(140.0))
        .column(Column::initial(90.0).resizable(true).at_least(40.0))
        .header(24.0, |mut header| {
            for h in &headers {
                header.col(|ui| {
                    ui.scope(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                    });
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.visible.len(), |mut row| {
                let row_idx = row.index();
                if let Some(rec) = app.visible.records().get(row_idx) {
                    for cell in [&rec.season, &rec.location, &rec.metric] {
                        row.col(|ui| {
                            ui.scope(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.label(view::display_cell(cell));
                                });
                            });
                        });
                    }
                }
            });
        });
}
