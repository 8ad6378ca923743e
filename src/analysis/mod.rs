//! Group-by/aggregate computations behind the charts

pub mod aggregate;
pub mod genres;
pub mod kpi;
pub mod regions;
pub mod timeline;
pub mod top;

pub use genres::{GenreSummary, RaceFrame};
pub use kpi::Kpis;
pub use regions::{RegionGenres, RegionSummary};
pub use timeline::{YearDurations, HISTORY_EVENTS};
