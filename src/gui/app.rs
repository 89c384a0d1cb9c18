// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::AppState,
    csv::Diagnostic,
    data::Dataset,
    load,
    view::{self, Marker},
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Gridiron Map",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // canonical data, built once at startup, read-only afterwards
    pub dataset: Dataset,
    pub diagnostics: Vec<Diagnostic>,

    // derived views
    pub seasons: Vec<String>,
    pub visible: Dataset,
    pub markers: Vec<Marker>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let source = state.options.load.source.clone();

        // One-shot load before first render; a failed load degrades to
        // empty views plus a status line, never a crash.
        let (dataset, diagnostics, status) = match load::load_dataset(&source) {
            Ok((ds, diags)) => {
                logf!("Load: {} record(s) from {}", ds.len(), source);
                for d in &diags {
                    logd!("Parse: {}", d);
                }
                let status = if diags.is_empty() {
                    format!("Loaded {} record(s)", ds.len())
                } else {
                    format!(
                        "Loaded {} record(s), {} row(s) skipped or padded",
                        ds.len(),
                        diags.len()
                    )
                };
                (ds, diags, status)
            }
            Err(e) => {
                loge!("Load: {} ({})", source, e);
                (Dataset::default(), Vec::new(), format!("Load failed: {}", e))
            }
        };

        let seasons = view::distinct_sorted_seasons(&dataset);
        let visible = view::visible_records(&dataset, &state.gui.selected_season);
        let markers = view::marker_data(&dataset);

        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        Self {
            state,
            dataset,
            diagnostics,
            seasons,
            visible,
            markers,
            out_path_text,
            status,
        }
    }

    /* ---------- tiny helpers ---------- */

    /// Re-derive the visible records after a selector change.
    pub fn refresh_visible(&mut self) {
        self.visible = view::visible_records(&self.dataset, &self.state.gui.selected_season);
    }

    #[inline]
    pub fn set_status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            components::toolbar::draw(ui, self);
        });

        if self.state.gui.show_map {
            egui::TopBottomPanel::bottom("map")
                .resizable(true)
                .default_height(260.0)
                .show(ctx, |ui| {
                    components::map_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            components::table::draw(ui, self);
        });
    }
}
