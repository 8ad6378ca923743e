use crate::analysis::{YearDurations, HISTORY_EVENTS};
use crate::app::HitOxide;
use crate::constants::layout::CHART_HEIGHT;
use crate::constants::plot::FIXED_SCALE_MAX;
use crate::data::format_time;
use crate::perf::Severity;
use eframe::egui::{self, Color32, RichText};
use egui_plot::{Legend, Line, Plot, PlotBounds, VLine};

const HIGH_LINE: Color32 = Color32::from_rgb(29, 185, 84);
const LOW_LINE: Color32 = Color32::from_rgb(214, 39, 40);
const EVENT_COLOR: Color32 = Color32::from_rgb(148, 103, 189);

pub fn severity_color(severity: Severity, ui: &egui::Ui) -> Color32 {
    match severity {
        Severity::Good => Color32::from_rgb(44, 160, 44),
        Severity::Alert => Color32::from_rgb(255, 165, 0),
        Severity::Neutral => ui.visuals().weak_text_color(),
    }
}

/// Scatter of popularity by year, then the duration timeline
pub fn render_timeline_tab(app: &mut HitOxide, ui: &mut egui::Ui) {
    profiling::scope!("render_timeline_tab");

    if let Some(status) = app.state.scatter.status() {
        let color = severity_color(status.severity(), ui);
        ui.label(RichText::new(status.message()).color(color));
    }
    app.state.scatter.show(ui, CHART_HEIGHT);

    ui.separator();
    render_duration_timeline(app, ui);
}

/// Points of one series split where a year has no value, so the line breaks there
fn line_runs(
    timeline: &[YearDurations],
    value: impl Fn(&YearDurations) -> Option<f64>,
) -> Vec<Vec<[f64; 2]>> {
    let mut runs: Vec<Vec<[f64; 2]>> = Vec::new();
    let mut current = Vec::new();
    for entry in timeline {
        match value(entry) {
            Some(v) => current.push([entry.year as f64, v]),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Bounds of the fixed scale: every year of the series, 0..6 minutes
fn fixed_scale_bounds(timeline: &[YearDurations]) -> PlotBounds {
    let first = timeline.first().map_or(0.0, |y| y.year as f64);
    let last = timeline.last().map_or(1.0, |y| y.year as f64);
    PlotBounds::from_min_max([first - 0.5, 0.0], [last + 0.5, FIXED_SCALE_MAX])
}

fn render_duration_timeline(app: &mut HitOxide, ui: &mut egui::Ui) {
    let threshold = app.state.filters.line_popularity;
    let timeline = &app.state.derived.timeline;

    ui.strong("Track duration by year");

    let high = line_runs(timeline, |y| y.high);
    let low = line_runs(timeline, |y| y.low);
    let fixed_bounds = app.state.filters.fixed_scale.then(|| fixed_scale_bounds(timeline));

    let mut plot = Plot::new("duration_timeline")
        .height(ui.available_height().max(200.0))
        .legend(Legend::default().position(egui_plot::Corner::RightTop))
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .y_axis_formatter(|mark, _range| format_time(mark.value))
        .label_formatter(|name, value| {
            if name.is_empty() {
                format!("{:.0}\n{}", value.x, format_time(value.y))
            } else {
                format!("{}\n{:.0}: {}", name, value.x, format_time(value.y))
            }
        });

    if fixed_bounds.is_some() {
        plot = plot.allow_zoom(false).allow_drag(false).allow_scroll(false);
    }

    plot.show(ui, |plot_ui| {
        if let Some(bounds) = fixed_bounds {
            plot_ui.set_plot_bounds(bounds);
        }
        let high_name = format!("Popularity > {:.0}", threshold);
        for run in high {
            plot_ui.line(Line::new(high_name.clone(), run).color(HIGH_LINE).width(2.0));
        }
        let low_name = format!("Popularity ≤ {:.0}", threshold);
        for run in low {
            plot_ui.line(Line::new(low_name.clone(), run).color(LOW_LINE).width(2.0));
        }
        for event in &HISTORY_EVENTS {
            plot_ui.vline(
                VLine::new(event.label, event.year as f64)
                    .color(EVENT_COLOR)
                    .style(egui_plot::LineStyle::dashed_loose()),
            );
        }
    });
}
