use crate::analysis::genres::{top_by_hits, top_by_volume};
use crate::app::HitOxide;
use crate::constants::analysis::{HITS_TOP_N, PROFILE_TOP_N, VOLUME_TOP_N};
use crate::constants::dataset::{MIN_YEAR, RACE_LAST_YEAR};
use crate::constants::layout::CHART_HEIGHT;
use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, Legend, Plot};

pub(crate) const SERIES_COLORS: [Color32; 3] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(44, 160, 44),
];

/// Label for an integer axis position, empty between categories
pub(crate) fn category_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// Bar chart with one named bar per category
pub(crate) fn category_chart(
    ui: &mut egui::Ui,
    id: &str,
    series: &str,
    labels: Vec<String>,
    values: &[f64],
    color: Color32,
    horizontal: bool,
) {
    let bars: Vec<Bar> = values
        .iter()
        .zip(&labels)
        .enumerate()
        .map(|(i, (&v, label))| Bar::new(i as f64, v).width(0.7).name(label))
        .collect();
    let mut chart = BarChart::new(series, bars).color(color);
    if horizontal {
        chart = chart.horizontal();
    }

    let mut plot = Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false);
    plot = if horizontal {
        plot.y_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
    } else {
        plot.x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
    };

    plot.show(ui, |plot_ui| plot_ui.bar_chart(chart));
}

pub fn render_genres_tab(app: &mut HitOxide, ui: &mut egui::Ui) {
    profiling::scope!("render_genres_tab");

    let summaries = &app.state.derived.genres;
    if summaries.is_empty() {
        ui.label("No genre has enough tracks in this selection.");
    } else {
        ui.columns(2, |cols| {
            // Ascending so the leader sits at the top of the horizontal chart
            let mut hits = top_by_hits(summaries, HITS_TOP_N);
            hits.reverse();
            cols[0].strong(format!("Top {} genres by hits", HITS_TOP_N));
            category_chart(
                &mut cols[0],
                "genre_hits",
                "Hits",
                hits.iter().map(|g| g.name.clone()).collect(),
                &hits.iter().map(|g| g.hits as f64).collect::<Vec<_>>(),
                Color32::from_rgb(29, 185, 84),
                true,
            );

            let volume = top_by_volume(summaries, VOLUME_TOP_N);
            cols[1].strong(format!("Top {} genres by volume", VOLUME_TOP_N));
            category_chart(
                &mut cols[1],
                "genre_volume",
                "Tracks",
                volume.iter().map(|g| g.name.clone()).collect(),
                &volume.iter().map(|g| g.count as f64).collect::<Vec<_>>(),
                Color32::from_rgb(31, 119, 180),
                false,
            );
        });

        ui.separator();
        render_profile(app, ui);
    }

    ui.separator();
    render_race(app, ui);
}

/// Danceability, energy and popularity of the biggest genres, side by side
fn render_profile(app: &HitOxide, ui: &mut egui::Ui) {
    let top = top_by_volume(&app.state.derived.genres, PROFILE_TOP_N);
    let metrics = ["Danceability", "Energy", "Popularity"];
    let group_width = 0.8 / top.len().max(1) as f64;

    ui.strong(format!("Profile of the top {} genres", top.len()));
    let charts: Vec<BarChart> = top
        .iter()
        .enumerate()
        .map(|(gi, genre)| {
            let values = [
                genre.avg_danceability * 100.0,
                genre.avg_energy * 100.0,
                genre.avg_popularity,
            ];
            let offset = (gi as f64 - (top.len() as f64 - 1.0) / 2.0) * group_width;
            let bars = values
                .iter()
                .enumerate()
                .map(|(mi, &v)| {
                    Bar::new(mi as f64 + offset, v)
                        .width(group_width * 0.9)
                        .name(format!("{} · {}", genre.name, metrics[mi]))
                })
                .collect();
            BarChart::new(genre.name.clone(), bars).color(SERIES_COLORS[gi % SERIES_COLORS.len()])
        })
        .collect();

    let labels: Vec<String> = metrics.iter().map(|m| m.to_string()).collect();
    Plot::new("genre_profile")
        .height(CHART_HEIGHT * 0.8)
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

fn render_race(app: &mut HitOxide, ui: &mut egui::Ui) {
    let race = &mut app.state.view.race;

    ui.horizontal(|ui| {
        ui.strong("Genre race");
        let label = if race.playing { "⏸ Pause" } else { "▶ Play" };
        if ui.button(label).clicked() {
            race.toggle();
        }
        let mut year = race.year;
        if ui
            .add(egui::Slider::new(&mut year, MIN_YEAR..=RACE_LAST_YEAR).text("Year"))
            .changed()
        {
            race.seek(year);
        }
    });

    let Some(frame) = app.state.race_frame() else {
        return;
    };
    if frame.entries.is_empty() {
        ui.label(format!("No tracks for {}", frame.year));
        return;
    }

    let labels: Vec<String> = frame.entries.iter().map(|e| e.genre.clone()).collect();
    let values: Vec<f64> = frame.entries.iter().map(|e| e.value).collect();
    category_chart(
        ui,
        "genre_race",
        &format!("Mean popularity {}", frame.year),
        labels,
        &values,
        Color32::from_rgb(227, 119, 194),
        true,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        let labels = vec!["pop".to_string(), "rock".to_string()];
        assert_eq!(category_label(&labels, 0.0), "pop");
        assert_eq!(category_label(&labels, 1.0000001), "rock");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }
}
