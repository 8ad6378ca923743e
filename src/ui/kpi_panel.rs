use crate::app::HitOxide;
use crate::data::format_time;
use eframe::egui;

fn kpi(ui: &mut egui::Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.small(label);
        ui.heading(value);
    });
    ui.separator();
}

/// Headline figures for the current region/year selection
pub fn render_kpi_panel(app: &HitOxide, ui: &mut egui::Ui) {
    let kpis = &app.state.derived.kpis;
    let countries = app.state.derived.countries.len();
    let filters = &app.state.filters;

    ui.horizontal(|ui| {
        kpi(ui, "Tracks", kpis.total_songs.to_string());
        kpi(ui, "Artists", kpis.distinct_artists.to_string());
        kpi(ui, "Countries", countries.to_string());
        kpi(
            ui,
            "Top region",
            kpis.top_region.clone().unwrap_or_else(|| "-".to_string()),
        );
        kpi(
            ui,
            "Mean duration",
            kpis.avg_duration.map(format_time).unwrap_or_else(|| "--:--".to_string()),
        );

        let scope = match (&filters.region, filters.year) {
            (Some(region), Some(year)) => format!("{} · {}", region, year),
            (Some(region), None) => region.clone(),
            (None, Some(year)) => year.to_string(),
            (None, None) => "All regions · all years".to_string(),
        };
        ui.label(scope);
    });
}
