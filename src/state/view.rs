//! View and visualization state

use crate::constants::dataset::{MIN_YEAR, RACE_LAST_YEAR};
use crate::constants::plot::RACE_STEP_SECS;

/// Page shown in the central panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Timeline,
    Genres,
    Regions,
    TopTracks,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 4] = [
        ActiveTab::Timeline,
        ActiveTab::Genres,
        ActiveTab::Regions,
        ActiveTab::TopTracks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Timeline => "⏱ Timeline",
            ActiveTab::Genres => "🎸 Genres",
            ActiveTab::Regions => "🌍 Regions",
            ActiveTab::TopTracks => "🏆 Top 50",
        }
    }
}

/// Genre race playback
#[derive(Debug, Clone, PartialEq)]
pub struct RaceState {
    pub year: i32,
    pub playing: bool,
    /// Seconds spent on the current year while playing
    elapsed: f32,
}

impl Default for RaceState {
    fn default() -> Self {
        Self {
            year: MIN_YEAR,
            playing: false,
            elapsed: 0.0,
        }
    }
}

impl RaceState {
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
        self.elapsed = 0.0;
    }

    /// Manual year change stops playback
    pub fn seek(&mut self, year: i32) {
        self.year = year.clamp(MIN_YEAR, RACE_LAST_YEAR);
        self.playing = false;
        self.elapsed = 0.0;
    }

    /// Advance playback by `dt` seconds; returns true when the year changed
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.playing {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed < RACE_STEP_SECS {
            return false;
        }
        self.elapsed -= RACE_STEP_SECS;
        self.year = if self.year >= RACE_LAST_YEAR {
            MIN_YEAR
        } else {
            self.year + 1
        };
        true
    }
}

/// View state manages display options
#[derive(Debug, Clone)]
pub struct ViewState {
    pub active_tab: ActiveTab,

    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Show help panel
    pub show_help: bool,

    pub race: RaceState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_tab: ActiveTab::default(),
            dark_mode: true,
            show_help: false,
            race: RaceState::default(),
        }
    }
}

impl ViewState {
    /// Toggle dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}
