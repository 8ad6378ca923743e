//! Mean track duration per year, split by a popularity threshold

use super::aggregate::{group_and_aggregate, Mean};
use crate::data::Record;

/// A labelled year marker drawn over the timeline
#[derive(Debug, Clone, Copy)]
pub struct HistoryEvent {
    pub year: i32,
    pub label: &'static str,
}

pub const HISTORY_EVENTS: [HistoryEvent; 3] = [
    HistoryEvent { year: 1982, label: "CD (74min)" },
    HistoryEvent { year: 1999, label: "Napster" },
    HistoryEvent { year: 2008, label: "Spotify" },
];

/// Mean durations (minutes) for one year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearDurations {
    pub year: i32,
    /// Tracks with popularity above the threshold
    pub high: Option<f64>,
    /// Tracks at or below the threshold
    pub low: Option<f64>,
}

pub fn duration_by_year(records: &[Record], popularity_threshold: f64) -> Vec<YearDurations> {
    profiling::scope!("duration_by_year");

    group_and_aggregate(
        records,
        |r| Some(r.year),
        || (Mean::default(), Mean::default()),
        |(high, low), r| {
            if r.popularity > popularity_threshold {
                high.add(r.duration);
            } else {
                low.add(r.duration);
            }
        },
        |(high, low)| (high.value(), low.value()),
    )
    .into_iter()
    .map(|(year, (high, low))| YearDurations { year, high, low })
    .collect()
}

/// Mean duration of all records, `None` when empty
pub fn mean_duration(records: &[Record]) -> Option<f64> {
    records.iter().map(|r| r.duration).collect::<Mean>().value()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(year: i32, popularity: f64, duration: f64) -> Record {
        Record::new(year, popularity, duration, "t", "a", "g")
    }

    #[test]
    fn test_duration_by_year() {
        let records = vec![
            track(2001, 80.0, 3.0),
            track(1999, 20.0, 4.0),
            track(2001, 90.0, 4.0),
            track(2001, 50.0, 5.0),
            track(1999, 50.0, 2.0),
        ];

        let years = duration_by_year(&records, 50.0);
        assert_eq!(years.len(), 2);

        assert_eq!(years[0], YearDurations { year: 1999, high: None, low: Some(3.0) });
        assert_eq!(years[1], YearDurations { year: 2001, high: Some(3.5), low: Some(5.0) });
    }

    #[test]
    fn test_mean_duration() {
        assert_eq!(mean_duration(&[]), None);
        assert_eq!(mean_duration(&[track(2000, 1.0, 3.0), track(2000, 1.0, 4.0)]), Some(3.5));
    }
}
