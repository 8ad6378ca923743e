use crate::app::HitOxide;
use crate::constants::layout::TABLE_ROW_HEIGHT;
use crate::data::format_time;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

/// Render the top tracks table; clicking a row copies its search query
pub fn render_top_list(app: &mut HitOxide, ui: &mut egui::Ui) {
    profiling::scope!("render_top_list");

    let tracks = &app.state.derived.top_tracks;
    if tracks.is_empty() {
        ui.label("No tracks in this selection.");
        return;
    }

    ui.label(format!("Top {} tracks by popularity · click a row to copy it", tracks.len()));
    ui.separator();

    let mut copied = None;
    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(36.0))
        .column(Column::initial(220.0).resizable(true).clip(true))
        .column(Column::initial(180.0).resizable(true).clip(true))
        .column(Column::initial(120.0).resizable(true).clip(true))
        .columns(Column::auto(), 4)
        .sense(egui::Sense::click())
        .header(22.0, |mut header| {
            for title in ["#", "Track", "Artist", "Genre", "Year", "Popularity", "Duration", "BPM"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(TABLE_ROW_HEIGHT, tracks.len(), |mut row| {
                let idx = row.index();
                let Some(track) = tracks.get(idx) else {
                    return;
                };
                row.col(|ui| {
                    ui.label(format!("{}", idx + 1));
                });
                row.col(|ui| {
                    ui.strong(&track.track);
                });
                row.col(|ui| {
                    ui.label(&track.artist);
                });
                row.col(|ui| {
                    ui.label(&track.genre);
                });
                row.col(|ui| {
                    ui.label(track.year.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.0}", track.popularity));
                });
                row.col(|ui| {
                    ui.label(format_time(track.duration));
                });
                row.col(|ui| {
                    ui.label(track.tempo.map_or_else(|| "-".to_string(), |t| format!("{:.0}", t)));
                });
                if row.response().clicked() {
                    copied = Some(track.search_query());
                }
            });
        });

    if let Some(query) = copied {
        ui.ctx().copy_text(query);
    }
}
