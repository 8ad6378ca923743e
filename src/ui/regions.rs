use super::genres::{category_chart, category_label, SERIES_COLORS};
use crate::analysis::RegionGenres;
use crate::app::HitOxide;
use crate::constants::analysis::REGION_GENRES_TOP_N;
use crate::constants::layout::CHART_HEIGHT;
use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, Legend, Plot};

/// Countries shown in the country grid
const COUNTRY_KPIS: usize = 12;

pub fn render_regions_tab(app: &mut HitOxide, ui: &mut egui::Ui) {
    profiling::scope!("render_regions_tab");

    let derived = &app.state.derived;
    if derived.regions.is_empty() {
        ui.label("No region information in this selection.");
        return;
    }

    let names: Vec<String> = derived.regions.iter().map(|r| r.name.clone()).collect();
    let counts: Vec<f64> = derived.regions.iter().map(|r| r.count as f64).collect();
    let popularity: Vec<f64> = derived.regions.iter().map(|r| r.avg_popularity).collect();

    ui.columns(2, |cols| {
        cols[0].strong("Tracks per region");
        category_chart(
            &mut cols[0],
            "region_volume",
            "Tracks",
            names.clone(),
            &counts,
            Color32::from_rgb(31, 119, 180),
            false,
        );

        cols[1].strong("Mean popularity per region");
        category_chart(
            &mut cols[1],
            "region_popularity",
            "Mean popularity",
            names,
            &popularity,
            Color32::from_rgb(255, 127, 14),
            false,
        );
    });

    ui.separator();
    render_region_genres(&derived.region_genres, ui);

    ui.separator();
    ui.strong("Top countries");
    if derived.countries.is_empty() {
        ui.label("No country codes in this selection.");
        return;
    }
    egui::Grid::new("country_kpis")
        .num_columns(4)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            for (i, (code, count)) in derived.countries.iter().take(COUNTRY_KPIS).enumerate() {
                ui.vertical(|ui| {
                    ui.heading(code);
                    ui.small(format!("{} tracks", count));
                });
                if i % 4 == 3 {
                    ui.end_row();
                }
            }
        });
}

/// Best genres by mean popularity, grouped by region; one series per rank
fn render_region_genres(region_genres: &[RegionGenres], ui: &mut egui::Ui) {
    let group_width = 0.8 / REGION_GENRES_TOP_N as f64;

    ui.strong(format!(
        "Top {} genres by mean popularity in the largest regions",
        REGION_GENRES_TOP_N
    ));
    let charts: Vec<BarChart> = (0..REGION_GENRES_TOP_N)
        .map(|rank| {
            let offset = (rank as f64 - (REGION_GENRES_TOP_N as f64 - 1.0) / 2.0) * group_width;
            let bars = region_genres
                .iter()
                .enumerate()
                .filter_map(|(ri, region)| {
                    let (genre, avg) = region.genres.get(rank)?;
                    Some(
                        Bar::new(ri as f64 + offset, *avg)
                            .width(group_width * 0.9)
                            .name(format!("{} · {}", region.region, genre.to_uppercase())),
                    )
                })
                .collect();
            BarChart::new(format!("Genre #{}", rank + 1), bars)
                .color(SERIES_COLORS[rank % SERIES_COLORS.len()])
        })
        .collect();

    let labels: Vec<String> = region_genres.iter().map(|r| r.region.clone()).collect();
    Plot::new("region_genres")
        .height(CHART_HEIGHT)
        .include_y(0.0)
        .include_y(100.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .legend(Legend::default())
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
