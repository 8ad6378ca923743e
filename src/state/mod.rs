//! Application state management
//!
//! Loaded data, filter and view state, and the chart data derived from them.
//! Chart data is recomputed only when the region/year selection, the timeline
//! split, the year window or the dataset change. The sampled scatter has its
//! own inputs and is re-rendered only when those change.

mod filters;
mod ui;
mod view;

pub use filters::FilterConfig;
pub use ui::UiState;
pub use view::{ActiveTab, ViewState};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;

use crate::analysis::{genres, regions, timeline, top};
use crate::analysis::{GenreSummary, Kpis, RaceFrame, RegionGenres, RegionSummary, YearDurations};
use crate::config::ExplorerConfig;
use crate::constants::analysis::{
    RACE_TOP_N, REGION_GENRES_REGIONS, REGION_GENRES_TOP_N, TOP_TRACKS,
};
use crate::constants::dataset::{MIN_YEAR, RACE_LAST_YEAR};
use crate::data::{DataSource, Record};
use crate::ui::scatter::ScatterView;
use self::ui::{ChartInputs, ScatterInputs};

/// Maximum number of entries in the recent files menu
const MAX_RECENT_FILES: usize = 5;

/// Chart data computed from the current selection
#[derive(Debug, Default)]
pub struct Derived {
    pub kpis: Kpis,
    pub timeline: Vec<YearDurations>,
    pub genres: Vec<GenreSummary>,
    pub race: Vec<RaceFrame>,
    pub regions: Vec<RegionSummary>,
    pub region_genres: Vec<RegionGenres>,
    pub countries: Vec<(String, usize)>,
    pub top_tracks: Vec<Record>,
}

/// Main application state container
pub struct AppState {
    /// Current dataset
    pub data: Option<DataSource>,

    /// Persisted settings
    pub config: ExplorerConfig,

    pub filters: FilterConfig,
    pub view: ViewState,
    pub ui: UiState,

    /// Currently loaded file path
    pub current_file: Option<PathBuf>,

    /// Recently opened files
    pub recent_files: Vec<PathBuf>,

    /// Regions offered by the region filter
    pub regions: Vec<String>,

    /// Years offered by the year filter, newest first
    pub years: Vec<i32>,

    /// Loaded records released after the year window
    pub outside_window: usize,

    pub derived: Derived,
    pub scatter: ScatterView,

    /// Random source for the scatter reducer and jitter
    pub rng: SmallRng,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(ExplorerConfig::default(), SmallRng::from_rng(&mut rand::rng()))
    }
}

impl AppState {
    /// State seeded from `config`, drawing randomness from `rng`
    pub fn with_config(config: ExplorerConfig, rng: SmallRng) -> Self {
        let mut state = Self {
            data: None,
            config,
            filters: FilterConfig::default(),
            view: ViewState::default(),
            ui: UiState::default(),
            current_file: None,
            recent_files: Vec::new(),
            regions: Vec::new(),
            years: Vec::new(),
            outside_window: 0,
            derived: Derived::default(),
            scatter: ScatterView::new(),
            rng,
        };
        state.apply_config();
        state
    }

    /// Copy persisted settings into the live filter/view state
    pub fn apply_config(&mut self) {
        self.filters.scatter_popularity = self.config.scatter_popularity;
        self.filters.line_popularity = self.config.line_popularity;
        self.filters.optimization_enabled = self.config.optimization_enabled;
        self.filters.validate();
        self.view.dark_mode = self.config.dark_mode;
        self.refresh_window();
    }

    /// Year filter choices and out-of-window count for the current `max_year`
    fn refresh_window(&mut self) {
        let max_year = self.config.max_year;
        if self.filters.year.is_some_and(|year| year > max_year) {
            self.filters.year = None;
        }
        match &self.data {
            Some(data) => {
                self.years = data.years(max_year);
                self.outside_window = data.count_after(max_year);
            }
            None => {
                self.years.clear();
                self.outside_window = 0;
            }
        }
    }

    /// Copy live filter/view state back into the persisted settings
    pub fn sync_config(&mut self) {
        self.config.scatter_popularity = self.filters.scatter_popularity;
        self.config.line_popularity = self.filters.line_popularity;
        self.config.optimization_enabled = self.filters.optimization_enabled;
        self.config.dark_mode = self.view.dark_mode;
    }

    /// Check if data is loaded
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Install a freshly loaded dataset
    pub fn set_data(&mut self, data: DataSource, path: PathBuf) {
        self.regions = data.regions();
        self.data = Some(data);

        // A stale region/year may not exist in the new dataset
        self.filters.clear_selection();
        self.refresh_window();
        self.view.race.seek(MIN_YEAR);

        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path.clone());
        self.recent_files.truncate(MAX_RECENT_FILES);
        self.current_file = Some(path);

        self.ui.on_data_loaded();
    }

    /// Recompute chart data and re-render the scatter where their inputs
    /// changed; returns true when anything was recomputed
    pub fn refresh_derived(&mut self) -> bool {
        self.filters.validate();
        let max_year = self.config.max_year;
        let budget = self.config.sampling;
        let chart_inputs = ChartInputs::new(&self.filters, max_year);
        let scatter_inputs = ScatterInputs::new(&self.filters, &budget, max_year);
        let charts_stale = self.ui.charts_stale(&chart_inputs);
        let scatter_stale = self.ui.scatter_stale(&scatter_inputs);
        if !charts_stale && !scatter_stale {
            return false;
        }

        let Some(data) = &self.data else {
            self.derived = Derived::default();
            self.scatter.dispose();
            self.ui.mark_charts(chart_inputs);
            self.ui.mark_scatter(scatter_inputs);
            return true;
        };

        profiling::scope!("refresh_derived");
        let filters = &self.filters;

        let selection: Vec<Record> = data
            .records()
            .iter()
            .filter(|r| filters.matches_region_year(r, max_year))
            .cloned()
            .collect();

        if scatter_stale {
            let scatter_input: Vec<&Record> = selection
                .iter()
                .filter(|r| filters.matches_duration(r))
                .collect();
            self.scatter
                .render(&scatter_input, filters, &budget, &mut self.rng);
            self.ui.mark_scatter(scatter_inputs);
        }

        if charts_stale {
            // Region only; the race spans 1980..=2023 whatever the window
            let regional: Vec<Record> = data
                .records()
                .iter()
                .filter(|r| filters.matches_region(r))
                .cloned()
                .collect();

            self.derived = Derived {
                kpis: Kpis::compute(&selection),
                timeline: timeline::duration_by_year(&selection, filters.line_popularity),
                genres: genres::genre_summaries(&selection),
                race: genres::genre_race(&regional, MIN_YEAR, RACE_LAST_YEAR, RACE_TOP_N),
                regions: regions::region_breakdown(&selection),
                region_genres: regions::top_genres_by_region(
                    &selection,
                    REGION_GENRES_REGIONS,
                    REGION_GENRES_TOP_N,
                ),
                countries: regions::country_counts(&selection),
                top_tracks: top::top_tracks(&selection, TOP_TRACKS)
                    .into_iter()
                    .cloned()
                    .collect(),
            };
            self.ui.mark_charts(chart_inputs);
        }

        tracing::debug!(
            selection = selection.len(),
            charts = charts_stale,
            scatter = scatter_stale,
            points = self.scatter.points().len(),
            "derived chart data refreshed"
        );
        true
    }

    /// Race frame for the current race year
    pub fn race_frame(&self) -> Option<&RaceFrame> {
        self.derived
            .race
            .iter()
            .find(|frame| frame.year == self.view.race.year)
    }
}
