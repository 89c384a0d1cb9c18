// src/gui/components/map_panel.rs
//
// Painted map pane: projects the continental-US lat/lon extent onto the
// panel rect (equirectangular) and draws one circle per resolved
// location, radius scaled by game count. Hover shows label + count.

use eframe::egui::{
    self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind,
};

use crate::config::consts::{MAP_LAT_MAX, MAP_LAT_MIN, MAP_LON_MAX, MAP_LON_MIN};
use crate::geo::Coord;
use crate::gui::app::App;

fn project(coord: Coord, rect: Rect) -> Pos2 {
    let fx = (coord.lon - MAP_LON_MIN) / (MAP_LON_MAX - MAP_LON_MIN);
    let fy = (MAP_LAT_MAX - coord.lat) / (MAP_LAT_MAX - MAP_LAT_MIN);
    Pos2::new(
        rect.left() + fx as f32 * rect.width(),
        rect.top() + fy as f32 * rect.height(),
    )
}

fn marker_radius(count: usize) -> f32 {
    4.0 + (count as f32).sqrt() * 3.0
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 4.0, Color32::from_rgb(0x1B, 0x26, 0x30));
    painter.rect_stroke(rect, 4.0, Stroke::new(1.0, Color32::from_gray(90)), StrokeKind::Inside);

    if app.markers.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No mappable locations",
            FontId::proportional(14.0),
            Color32::GRAY,
        );
        return;
    }

    // Keep markers off the frame edge
    let inner = rect.shrink(14.0);
    let hover = response.hover_pos();

    for (ix, m) in app.markers.iter().enumerate() {
        let pos = project(m.coord, inner);
        let radius = marker_radius(m.count);

        painter.circle_filled(pos, radius, Color32::from_rgb(0x64, 0xB4, 0xFF));
        painter.circle_stroke(pos, radius, Stroke::new(1.0, Color32::WHITE));

        if let Some(hp) = hover {
            if hp.distance(pos) <= radius + 2.0 {
                egui::show_tooltip_at_pointer(
                    ui.ctx(),
                    response.layer_id,
                    egui::Id::new(("map_marker", ix)),
                    |ui| {
                        ui.label(format!("{} — {} game(s)", m.label, m.count));
                    },
                );
            }
        }
    }
}
