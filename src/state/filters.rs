//! Filter controls state

use crate::constants::dataset::MIN_YEAR;
use crate::constants::filters::*;
use crate::data::Record;

/// Filter configuration for the region/year selection and the scatter controls
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Selected region, `None` for all regions
    pub region: Option<String>,

    /// Selected year, `None` for the whole window
    pub year: Option<i32>,

    /// Scatter duration range in minutes (either end may be the larger one)
    pub duration_min: f64,
    pub duration_max: f64,

    /// Popularity split for the scatter colouring
    pub scatter_popularity: f64,

    /// Popularity split for the duration timeline
    pub line_popularity: f64,

    /// Let the reducer thin large scatter selections
    pub optimization_enabled: bool,

    /// Pin the timeline y axis to 0..6 minutes
    pub fixed_scale: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            region: None,
            year: None,
            duration_min: DEFAULT_DURATION_MIN,
            duration_max: DEFAULT_DURATION_MAX,
            scatter_popularity: DEFAULT_SCATTER_POPULARITY,
            line_popularity: DEFAULT_LINE_POPULARITY,
            optimization_enabled: true,
            fixed_scale: false,
        }
    }
}

impl FilterConfig {
    /// Clear the region/year selection
    pub fn clear_selection(&mut self) {
        self.region = None;
        self.year = None;
    }

    /// Check if a region or year is selected
    pub fn has_selection(&self) -> bool {
        self.region.is_some() || self.year.is_some()
    }

    /// Duration range ordered as (min, max)
    pub fn duration_range(&self) -> (f64, f64) {
        if self.duration_min > self.duration_max {
            (self.duration_max, self.duration_min)
        } else {
            (self.duration_min, self.duration_max)
        }
    }

    /// Region and year predicate; "all years" means the dataset window
    pub fn matches_region_year(&self, record: &Record, max_year: i32) -> bool {
        let region_ok = match &self.region {
            Some(region) => record.region.as_deref() == Some(region.as_str()),
            None => true,
        };
        let year_ok = match self.year {
            Some(year) => record.year == year,
            None => (MIN_YEAR..=max_year).contains(&record.year),
        };
        region_ok && year_ok
    }

    /// Region predicate only (the genre race spans every year)
    pub fn matches_region(&self, record: &Record) -> bool {
        self.region
            .as_deref()
            .is_none_or(|region| record.region.as_deref() == Some(region))
    }

    /// Inclusive duration predicate
    pub fn matches_duration(&self, record: &Record) -> bool {
        let (min, max) = self.duration_range();
        record.duration >= min && record.duration <= max
    }

    /// Validate and fix any invalid filter values
    pub fn validate(&mut self) {
        let (min, max) = self.duration_range();
        self.duration_min = min.max(0.0);
        self.duration_max = max.max(0.0);

        self.scatter_popularity = self.scatter_popularity.clamp(0.0, 100.0);
        self.line_popularity = self.line_popularity.clamp(0.0, 100.0);
    }
}
