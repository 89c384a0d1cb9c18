// src/gui/components/toolbar.rs
//
// Season selector, map toggle, and the export controls. Applies changes
// directly to `app`; derived views are rebuilt only when the selector
// actually changes.

use eframe::egui;

use crate::{
    config::consts::ALL_SEASONS,
    config::options::ExportFormat,
    file,
    view,
};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Season:");

        let selected_text = if app.state.gui.selected_season == ALL_SEASONS {
            s!("All seasons")
        } else {
            app.state.gui.selected_season.clone()
        };

        let mut changed = false;
        egui::ComboBox::from_id_salt("season_select")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                changed |= ui
                    .selectable_value(
                        &mut app.state.gui.selected_season,
                        s!(ALL_SEASONS),
                        "All seasons",
                    )
                    .changed();
                for season in app.seasons.clone() {
                    changed |= ui
                        .selectable_value(
                            &mut app.state.gui.selected_season,
                            season.clone(),
                            season,
                        )
                        .changed();
                }
            });
        if changed {
            logf!("UI: Season → {}", app.state.gui.selected_season);
            app.refresh_visible();
            app.set_status(format!(
                "Showing {} of {} game(s)",
                app.visible.len(),
                app.dataset.len()
            ));
        }

        ui.checkbox(&mut app.state.gui.show_map, "Map");

        ui.separator();
        ui.label(format!("{} of {} game(s)", app.visible.len(), app.dataset.len()));
    });

    ui.horizontal(|ui| {
        {
            let export = &mut app.state.options.export;

            let prev_fmt = export.format;
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            if export.format != prev_fmt {
                logf!("UI: Export format → {:?}", export.format);
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }

            ui.checkbox(&mut export.include_headers, "Include headers");
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .lost_focus()
        {
            app.state.options.export.set_path(&app.out_path_text);
            app.out_path_text = app
                .state
                .options
                .export
                .out_path()
                .to_string_lossy()
                .into_owned();
        }

        if ui.button("Export").clicked() {
            if app.visible.is_empty() {
                app.set_status("Nothing to export");
                logd!("Export: Clicked, but there's nothing to export");
            } else {
                app.state.options.export.set_path(&app.out_path_text);

                match file::write_export(&app.state.options.export, &app.visible) {
                    Ok(path) => {
                        logf!("Export: OK rows={} → {}", app.visible.len(), path.display());
                        app.set_status(format!("Exported {}", path.display()));
                    }
                    Err(e) => {
                        loge!("Export: Error: {}", e);
                        app.set_status(format!("Export error: {e}"));
                    }
                }
            }
        }

        // Copy the visible table in the current export format
        if ui.button("Copy").clicked() {
            if app.visible.is_empty() {
                app.set_status("Nothing to copy");
            } else {
                let export = &app.state.options.export;
                let mut buf: Vec<u8> = Vec::new();
                let _ = view::write_table(
                    &mut buf,
                    &app.visible,
                    export.metric,
                    export.delim(),
                    export.include_headers,
                );
                ui.ctx().copy_text(String::from_utf8_lossy(&buf).into_owned());
                app.set_status("Copied to clipboard");
            }
        }
    });

    ui.horizontal(|ui| {
        ui.label(format!("Status: {}", app.status));
    });
}
