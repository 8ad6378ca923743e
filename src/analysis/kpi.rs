//! Headline figures for the dataset header

use std::collections::{HashMap, HashSet};

use super::timeline::mean_duration;
use crate::data::record::split_artists;
use crate::data::Record;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kpis {
    pub total_songs: usize,
    pub distinct_artists: usize,
    /// Region with the most tracks
    pub top_region: Option<String>,
    /// Minutes
    pub avg_duration: Option<f64>,
}

impl Kpis {
    pub fn compute(records: &[Record]) -> Self {
        profiling::scope!("Kpis::compute");

        let artists: HashSet<&str> = records
            .iter()
            .flat_map(|r| split_artists(&r.artist))
            .collect();

        let mut region_counts: HashMap<&str, usize> = HashMap::new();
        for region in records.iter().filter_map(Record::known_region) {
            *region_counts.entry(region).or_default() += 1;
        }
        // Ties resolve to the alphabetically first region
        let top_region = region_counts
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, _)| name.to_string());

        Self {
            total_songs: records.len(),
            distinct_artists: artists.len(),
            top_region,
            avg_duration: mean_duration(records),
        }
    }
}
