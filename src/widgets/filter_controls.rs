//! Region/year selection and chart controls widget

use super::RangeInput;
use crate::constants::filters::DURATION_SLIDER_MAX;
use crate::state::FilterConfig;
use egui::{ComboBox, Response, Ui};

/// A reusable widget for the filter panel
pub struct FilterControls<'a> {
    config: &'a mut FilterConfig,
    regions: &'a [String],
    years: &'a [i32],
}

impl<'a> FilterControls<'a> {
    /// Create a new filter controls widget over the offered regions and years
    pub fn new(config: &'a mut FilterConfig, regions: &'a [String], years: &'a [i32]) -> Self {
        Self {
            config,
            regions,
            years,
        }
    }

    /// Show the filter controls
    pub fn show(self, ui: &mut Ui) -> Response {
        ui.vertical(|ui| {
            ui.strong("Selection");

            ComboBox::from_label("Region")
                .selected_text(self.config.region.as_deref().unwrap_or("All regions"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.config.region, None, "All regions");
                    for region in self.regions {
                        ui.selectable_value(&mut self.config.region, Some(region.clone()), region);
                    }
                });

            ComboBox::from_label("Year")
                .selected_text(
                    self.config
                        .year
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| "All years".to_string()),
                )
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.config.year, None, "All years");
                    for &year in self.years {
                        ui.selectable_value(&mut self.config.year, Some(year), year.to_string());
                    }
                });

            if ui
                .add_enabled(self.config.has_selection(), egui::Button::new("✖ Clear selection"))
                .clicked()
            {
                self.config.clear_selection();
            }

            ui.separator();
            ui.strong("Scatter");
            ui.add(
                egui::Slider::new(&mut self.config.scatter_popularity, 0.0..=100.0)
                    .step_by(1.0)
                    .text("Hit threshold"),
            );
            RangeInput::new(
                "Duration",
                &mut self.config.duration_min,
                &mut self.config.duration_max,
            )
            .bounds(0.0, DURATION_SLIDER_MAX)
            .show(ui);
            ui.checkbox(&mut self.config.optimization_enabled, "Smart sampling")
                .on_hover_text("Thin recent tracks when the scatter gets large");

            ui.separator();
            ui.strong("Timeline");
            ui.add(
                egui::Slider::new(&mut self.config.line_popularity, 0.0..=100.0)
                    .step_by(1.0)
                    .text("Popularity split"),
            );
            ui.checkbox(&mut self.config.fixed_scale, "Fixed scale (0-6 min)");
        })
        .response
    }
}
