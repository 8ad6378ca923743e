//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// Scatter sampling defaults
pub mod sampling {
    /// Point count above which the scatter reducer kicks in
    pub const DEFAULT_TRIGGER_THRESHOLD: usize = 2000;

    /// Records released before this year are never sampled away
    pub const DEFAULT_PROTECTED_YEAR: i32 = 2000;

    /// Expected number of points kept from the recent (unprotected) range
    pub const DEFAULT_RECENT_QUOTA: usize = 1500;

    /// Horizontal jitter applied around each point's year
    pub const YEAR_JITTER: f64 = 0.7;
}

/// Dataset window and cleaning defaults
pub mod dataset {
    /// First year offered by the year filter
    pub const MIN_YEAR: i32 = 1980;

    /// Last year of the default window (later releases are incomplete)
    pub const MAX_YEAR: i32 = 2022;

    /// Last year shown in the genre race
    pub const RACE_LAST_YEAR: i32 = 2023;

    /// Genre label used when a record has none
    pub const UNKNOWN_GENRE: &str = "Unknown";

    /// Region labels treated as "no region"
    pub const UNKNOWN_REGIONS: [&str; 3] = ["Inconnu", "Unknown", ""];
}

/// Filtering defaults
pub mod filters {
    /// Default popularity split for the scatter colouring
    pub const DEFAULT_SCATTER_POPULARITY: f64 = 50.0;

    /// Default popularity split for the duration timeline
    pub const DEFAULT_LINE_POPULARITY: f64 = 50.0;

    /// Default duration range (minutes)
    pub const DEFAULT_DURATION_MIN: f64 = 0.0;
    pub const DEFAULT_DURATION_MAX: f64 = 10.0;

    /// Upper bound of the duration slider (minutes)
    pub const DURATION_SLIDER_MAX: f64 = 10.0;
}

/// Aggregation thresholds
pub mod analysis {
    /// A track with popularity above this counts as a hit
    pub const HIT_POPULARITY: f64 = 75.0;

    /// Genres with this many tracks or fewer are left out of genre charts
    pub const MIN_GENRE_COUNT: usize = 10;

    /// Number of genres shown per year in the race
    pub const RACE_TOP_N: usize = 10;

    /// Number of genres in the hits chart
    pub const HITS_TOP_N: usize = 10;

    /// Number of genres in the volume chart
    pub const VOLUME_TOP_N: usize = 20;

    /// Number of genres compared in the profile chart
    pub const PROFILE_TOP_N: usize = 3;

    /// Regions compared in the genre-by-region chart
    pub const REGION_GENRES_REGIONS: usize = 5;

    /// Genres per region in the genre-by-region chart
    pub const REGION_GENRES_TOP_N: usize = 3;

    /// Length of the top tracks list
    pub const TOP_TRACKS: usize = 50;
}

/// Plotting and visualization defaults
pub mod plot {
    /// Scatter x axis bounds (years)
    pub const SCATTER_X_MIN: f64 = 1979.0;
    pub const SCATTER_X_MAX: f64 = 2023.0;

    /// Scatter y axis bounds (popularity)
    pub const SCATTER_Y_MAX: f64 = 100.0;

    /// Fixed duration scale of the timeline (minutes)
    pub const FIXED_SCALE_MAX: f64 = 6.0;

    /// Seconds between two genre race frames
    pub const RACE_STEP_SECS: f32 = 3.0;

    /// Point radius in the scatter chart
    pub const POINT_RADIUS: f32 = 3.0;
}

/// UI layout defaults
pub mod layout {
    /// Left panel (filters) default width
    pub const FILTER_PANEL_WIDTH: f32 = 240.0;

    /// Height of a single chart when several are stacked
    pub const CHART_HEIGHT: f32 = 320.0;

    /// Table row height
    pub const TABLE_ROW_HEIGHT: f32 = 20.0;
}

/// Configuration file paths
pub mod config {
    /// Configuration file name
    pub const CONFIG_FILE: &str = "hit-oxide.json";
}
