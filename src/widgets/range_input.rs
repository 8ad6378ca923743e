//! Dual-handle range input for duration filtering

use crate::data::format_time;
use egui::{Response, Ui};

/// Two sliders over the same bounds; the ends may cross, consumers order them
pub struct RangeInput<'a> {
    label: &'a str,
    min: &'a mut f64,
    max: &'a mut f64,
    lower_bound: f64,
    upper_bound: f64,
    step: f64,
}

impl<'a> RangeInput<'a> {
    /// Create a new range input widget
    pub fn new(label: &'a str, min: &'a mut f64, max: &'a mut f64) -> Self {
        Self {
            label,
            min,
            max,
            lower_bound: 0.0,
            upper_bound: 10.0,
            step: 0.25,
        }
    }

    /// Set the slider bounds
    pub fn bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    /// Show the widget
    pub fn show(self, ui: &mut Ui) -> Response {
        let range = self.lower_bound..=self.upper_bound;
        ui.vertical(|ui| {
            let (lo, hi) = if *self.min > *self.max {
                (*self.max, *self.min)
            } else {
                (*self.min, *self.max)
            };
            ui.label(format!("{}: {} - {}", self.label, format_time(lo), format_time(hi)));

            let from = ui.add(
                egui::Slider::new(self.min, range.clone())
                    .step_by(self.step)
                    .custom_formatter(|v, _| format_time(v))
                    .text("from"),
            );
            let to = ui.add(
                egui::Slider::new(self.max, range)
                    .step_by(self.step)
                    .custom_formatter(|v, _| format_time(v))
                    .text("to"),
            );
            from | to
        })
        .inner
    }
}
