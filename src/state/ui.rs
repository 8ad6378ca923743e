//! UI interaction state

use super::FilterConfig;
use crate::perf::SampleBudget;

/// Inputs every non-scatter chart is computed from
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ChartInputs {
    region: Option<String>,
    year: Option<i32>,
    line_popularity: f64,
    max_year: i32,
}

impl ChartInputs {
    pub(super) fn new(filters: &FilterConfig, max_year: i32) -> Self {
        Self {
            region: filters.region.clone(),
            year: filters.year,
            line_popularity: filters.line_popularity,
            max_year,
        }
    }
}

/// Inputs the sampled scatter is rendered from
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ScatterInputs {
    region: Option<String>,
    year: Option<i32>,
    duration: (f64, f64),
    threshold: f64,
    optimization_enabled: bool,
    budget: SampleBudget,
    max_year: i32,
}

impl ScatterInputs {
    pub(super) fn new(filters: &FilterConfig, budget: &SampleBudget, max_year: i32) -> Self {
        Self {
            region: filters.region.clone(),
            year: filters.year,
            duration: filters.duration_range(),
            threshold: filters.scatter_popularity,
            optimization_enabled: filters.optimization_enabled,
            budget: *budget,
            max_year,
        }
    }
}

/// UI state: error reporting and change tracking for derived data
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Error message to display in UI (title, message)
    pub error_message: Option<(String, String)>,

    /// Data version counter (increments on load)
    pub data_version: u64,

    /// Inputs and data version the charts were last computed for
    charts_key: Option<(ChartInputs, u64)>,

    /// Inputs and data version the scatter was last rendered for
    scatter_key: Option<(ScatterInputs, u64)>,
}

impl UiState {
    /// Increment data version (call after loading new data)
    pub fn on_data_loaded(&mut self) {
        self.data_version += 1;
        self.charts_key = None;
        self.scatter_key = None;
    }

    pub(super) fn charts_stale(&self, inputs: &ChartInputs) -> bool {
        self.charts_key
            .as_ref()
            .is_none_or(|(key, version)| *version != self.data_version || key != inputs)
    }

    pub(super) fn mark_charts(&mut self, inputs: ChartInputs) {
        self.charts_key = Some((inputs, self.data_version));
    }

    pub(super) fn scatter_stale(&self, inputs: &ScatterInputs) -> bool {
        self.scatter_key
            .as_ref()
            .is_none_or(|(key, version)| *version != self.data_version || key != inputs)
    }

    pub(super) fn mark_scatter(&mut self, inputs: ScatterInputs) {
        self.scatter_key = Some((inputs, self.data_version));
    }

    /// Set an error message
    pub fn set_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.error_message = Some((title.into(), message.into()));
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_and_scatter_keys() {
        let mut ui = UiState::default();
        let mut filters = FilterConfig::default();
        let budget = SampleBudget::default();

        let charts = ChartInputs::new(&filters, 2022);
        let scatter = ScatterInputs::new(&filters, &budget, 2022);
        assert!(ui.charts_stale(&charts));
        assert!(ui.scatter_stale(&scatter));
        ui.mark_charts(charts);
        ui.mark_scatter(scatter);

        // Scatter colouring only touches the scatter
        filters.scatter_popularity = 70.0;
        assert!(!ui.charts_stale(&ChartInputs::new(&filters, 2022)));
        assert!(ui.scatter_stale(&ScatterInputs::new(&filters, &budget, 2022)));
        ui.mark_scatter(ScatterInputs::new(&filters, &budget, 2022));

        // Timeline split only touches the charts
        filters.line_popularity = 30.0;
        assert!(ui.charts_stale(&ChartInputs::new(&filters, 2022)));
        assert!(!ui.scatter_stale(&ScatterInputs::new(&filters, &budget, 2022)));

        // Drawing-only flag touches neither
        ui.mark_charts(ChartInputs::new(&filters, 2022));
        filters.fixed_scale = true;
        assert!(!ui.charts_stale(&ChartInputs::new(&filters, 2022)));
        assert!(!ui.scatter_stale(&ScatterInputs::new(&filters, &budget, 2022)));

        // Year window and a new dataset touch both
        assert!(ui.charts_stale(&ChartInputs::new(&filters, 2010)));
        assert!(ui.scatter_stale(&ScatterInputs::new(&filters, &budget, 2010)));
        ui.on_data_loaded();
        assert!(ui.charts_stale(&ChartInputs::new(&filters, 2022)));
        assert!(ui.scatter_stale(&ScatterInputs::new(&filters, &budget, 2022)));
    }
}
