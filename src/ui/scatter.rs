//! Popularity-by-year scatter chart
//!
//! `ScatterView` owns the drawable for the scatter: every call to
//! [`ScatterView::render`] throws the previous points away, runs the sample
//! reducer over the new selection and rebuilds the jittered point set.

use eframe::egui::{self, Color32};
use egui_plot::{Plot, PlotPoint, Points};
use rand::Rng;

use crate::constants::plot::{POINT_RADIUS, SCATTER_X_MAX, SCATTER_X_MIN, SCATTER_Y_MAX};
use crate::constants::sampling::YEAR_JITTER;
use crate::data::{format_time, Record};
use crate::perf::{reduce, ReductionStatus, SampleBudget};
use crate::state::FilterConfig;

const HIGH_COLOR: Color32 = Color32::from_rgb(29, 185, 84);
const LOW_COLOR: Color32 = Color32::from_rgb(120, 120, 140);

/// Squared normalized distance under which the pointer is "on" a point
const PICK_RADIUS_SQ: f64 = 0.0004;

/// One drawn point
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    /// Release year plus horizontal jitter
    pub x: f64,
    pub y: f64,
    /// `popularity > threshold` at render time
    pub high: bool,
    pub record: Record,
}

impl ScatterPoint {
    pub fn tooltip(&self) -> String {
        format!(
            "[{}] {} - {} ({})",
            self.record.genre,
            self.record.artist,
            self.record.track,
            format_time(self.record.duration)
        )
    }
}

#[derive(Debug, Default)]
pub struct ScatterView {
    points: Vec<ScatterPoint>,
    status: Option<ReductionStatus>,
    threshold: f64,
}

impl ScatterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the drawable from `records`, disposing the previous one first.
    pub fn render<R: Rng + ?Sized>(
        &mut self,
        records: &[&Record],
        filters: &FilterConfig,
        budget: &SampleBudget,
        rng: &mut R,
    ) {
        profiling::scope!("scatter_render");
        self.dispose();

        let sample = reduce(records, budget, filters.optimization_enabled, rng);
        self.status = Some(ReductionStatus::assess(
            records.len(),
            sample.len(),
            budget,
            filters.optimization_enabled,
        ));
        self.threshold = filters.scatter_popularity;

        self.points = sample
            .into_iter()
            .map(|record| ScatterPoint {
                x: record.year as f64 + (rng.random::<f64>() - 0.5) * YEAR_JITTER,
                y: record.popularity,
                high: record.popularity > filters.scatter_popularity,
                record: record.clone(),
            })
            .collect();
    }

    /// Release the current drawable
    pub fn dispose(&mut self) {
        self.points.clear();
        self.points.shrink_to_fit();
        self.status = None;
    }

    pub fn points(&self) -> &[ScatterPoint] {
        &self.points
    }

    pub fn status(&self) -> Option<&ReductionStatus> {
        self.status.as_ref()
    }

    /// Index of the point closest to `at`, if within picking distance.
    /// `width` and `height` are the visible plot bounds used to normalize.
    pub fn nearest(&self, at: PlotPoint, width: f64, height: f64) -> Option<usize> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let dx = (p.x - at.x) / width;
                let dy = (p.y - at.y) / height;
                (i, dx * dx + dy * dy)
            })
            .filter(|(_, d)| *d < PICK_RADIUS_SQ)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Draw the chart. Clicking a point copies its search query to the clipboard.
    pub fn show(&self, ui: &mut egui::Ui, height: f32) {
        profiling::scope!("scatter_show");

        let (high, low): (Vec<&ScatterPoint>, Vec<&ScatterPoint>) =
            self.points.iter().partition(|p| p.high);
        let to_xy = |pts: Vec<&ScatterPoint>| -> Vec<[f64; 2]> {
            pts.into_iter().map(|p| [p.x, p.y]).collect()
        };
        let threshold = self.threshold;

        let plot_response = Plot::new("popularity_scatter")
            .height(height)
            .include_x(SCATTER_X_MIN)
            .include_x(SCATTER_X_MAX)
            .include_y(0.0)
            .include_y(SCATTER_Y_MAX)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_x(false)
            .show_y(false)
            .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
            .legend(egui_plot::Legend::default().position(egui_plot::Corner::LeftTop))
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(format!("Popularity ≤ {:.0}", threshold), to_xy(low))
                        .radius(POINT_RADIUS)
                        .color(LOW_COLOR.gamma_multiply(0.6)),
                );
                plot_ui.points(
                    Points::new(format!("Popularity > {:.0}", threshold), to_xy(high))
                        .radius(POINT_RADIUS)
                        .color(HIGH_COLOR),
                );
            });

        let bounds = plot_response.transform.bounds();
        let (width, height) = (bounds.width(), bounds.height());
        let response = plot_response.response;

        if response.clicked() {
            let picked = response
                .interact_pointer_pos()
                .map(|pos| plot_response.transform.value_from_position(pos))
                .and_then(|at| self.nearest(at, width, height));
            if let Some(idx) = picked {
                let query = self.points[idx].record.search_query();
                tracing::debug!(query = %query, "copied search query");
                ui.ctx().copy_text(query);
            }
        }

        if let Some(pos) = response.hover_pos() {
            let at = plot_response.transform.value_from_position(pos);
            if let Some(idx) = self.nearest(at, width, height) {
                let point = &self.points[idx];
                response.on_hover_ui(|ui| {
                    ui.label(point.tooltip());
                    ui.small(format!("Popularity {:.0} · click to copy", point.y));
                });
            }
        }
    }
}
