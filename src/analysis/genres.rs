//! Per-genre summaries and the yearly genre race

use std::cmp::Ordering;

use super::aggregate::{group_and_aggregate, Mean};
use crate::constants::analysis::{HIT_POPULARITY, MIN_GENRE_COUNT};
use crate::data::Record;

/// Aggregated figures for one genre
#[derive(Debug, Clone, PartialEq)]
pub struct GenreSummary {
    pub name: String,
    pub count: usize,
    /// Tracks above the hit popularity
    pub hits: usize,
    pub avg_popularity: f64,
    pub avg_danceability: f64,
    pub avg_energy: f64,
}

#[derive(Default)]
struct GenreAcc {
    hits: usize,
    popularity: Mean,
    danceability: Mean,
    energy: Mean,
}

/// Summaries of genres with more than `MIN_GENRE_COUNT` tracks, by name
pub fn genre_summaries(records: &[Record]) -> Vec<GenreSummary> {
    profiling::scope!("genre_summaries");

    group_and_aggregate(
        records,
        |r| Some(r.genre.clone()),
        GenreAcc::default,
        |acc, r| {
            acc.popularity.add(r.popularity);
            // Missing audio features count as zero
            acc.danceability.add(r.danceability.unwrap_or(0.0));
            acc.energy.add(r.energy.unwrap_or(0.0));
            if r.popularity > HIT_POPULARITY {
                acc.hits += 1;
            }
        },
        |acc| acc,
    )
    .into_iter()
    .filter(|(_, acc)| acc.popularity.count() > MIN_GENRE_COUNT)
    .map(|(name, acc)| GenreSummary {
        name,
        count: acc.popularity.count(),
        hits: acc.hits,
        avg_popularity: acc.popularity.value().unwrap_or(0.0),
        avg_danceability: acc.danceability.value().unwrap_or(0.0),
        avg_energy: acc.energy.value().unwrap_or(0.0),
    })
    .collect()
}

/// The `n` largest genres, most tracks first
pub fn top_by_volume(summaries: &[GenreSummary], n: usize) -> Vec<GenreSummary> {
    let mut sorted = summaries.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted.truncate(n);
    sorted
}

/// The `n` genres with the most hits
pub fn top_by_hits(summaries: &[GenreSummary], n: usize) -> Vec<GenreSummary> {
    let mut sorted = summaries.to_vec();
    sorted.sort_by(|a, b| b.hits.cmp(&a.hits));
    sorted.truncate(n);
    sorted
}

/// One bar of the race
#[derive(Debug, Clone, PartialEq)]
pub struct RaceEntry {
    pub genre: String,
    /// Mean popularity rounded to one decimal
    pub value: f64,
}

/// Race standings for one year, ascending so the leader is drawn last
#[derive(Debug, Clone, PartialEq)]
pub struct RaceFrame {
    pub year: i32,
    pub entries: Vec<RaceEntry>,
}

/// Per-year top genres by mean popularity, for every year in the range
pub fn genre_race(records: &[Record], first_year: i32, last_year: i32, top_n: usize) -> Vec<RaceFrame> {
    profiling::scope!("genre_race");

    let by_year_genre = group_and_aggregate(
        records.iter().filter(|r| (first_year..=last_year).contains(&r.year)),
        |r| Some((r.year, r.genre.clone())),
        Mean::default,
        |m, r| m.add(r.popularity),
        |m| m.value().unwrap_or(0.0),
    );

    (first_year..=last_year)
        .map(|year| {
            let mut entries: Vec<RaceEntry> = by_year_genre
                .range((year, String::new())..(year + 1, String::new()))
                .map(|((_, genre), &avg)| RaceEntry {
                    genre: genre.clone(),
                    value: (avg * 10.0).round() / 10.0,
                })
                .collect();
            entries.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
            let skip = entries.len().saturating_sub(top_n);
            RaceFrame {
                year,
                entries: entries.split_off(skip),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genre_tracks(genre: &str, year: i32, pops: &[f64]) -> Vec<Record> {
        pops.iter()
            .map(|&p| {
                let mut r = Record::new(year, p, 3.0, "t", "a", genre);
                r.danceability = Some(0.5);
                r.energy = Some(1.0);
                r
            })
            .collect()
    }

    #[test]
    fn test_genre_summaries_filter_and_hits() {
        let mut records = genre_tracks("pop", 2000, &[80.0; 11]);
        records.extend(genre_tracks("pop", 2001, &[20.0]));
        records.extend(genre_tracks("jazz", 2000, &[90.0; 10]));

        let summaries = genre_summaries(&records);
        assert_eq!(summaries.len(), 1);

        let pop = &summaries[0];
        assert_eq!(pop.name, "pop");
        assert_eq!(pop.count, 12);
        assert_eq!(pop.hits, 11);
        assert!((pop.avg_popularity - 75.0).abs() < 1e-9);
        assert_eq!(pop.avg_danceability, 0.5);
        assert_eq!(pop.avg_energy, 1.0);
    }

    #[test]
    fn test_top_orderings() {
        let make = |name: &str, count, hits| GenreSummary {
            name: name.to_string(),
            count,
            hits,
            avg_popularity: 0.0,
            avg_danceability: 0.0,
            avg_energy: 0.0,
        };
        let summaries = vec![make("a", 20, 1), make("b", 50, 0), make("c", 30, 9)];

        let volume: Vec<_> = top_by_volume(&summaries, 2).into_iter().map(|g| g.name).collect();
        assert_eq!(volume, vec!["b", "c"]);

        let hits: Vec<_> = top_by_hits(&summaries, 1).into_iter().map(|g| g.name).collect();
        assert_eq!(hits, vec!["c"]);
    }

    #[test]
    fn test_genre_race() {
        let mut records = genre_tracks("rock", 1980, &[40.0, 50.0]);
        records.extend(genre_tracks("pop", 1980, &[66.66]));
        records.extend(genre_tracks("jazz", 1980, &[10.0]));
        records.extend(genre_tracks("pop", 1982, &[70.0]));
        records.extend(genre_tracks("pop", 1990, &[99.0]));

        let frames = genre_race(&records, 1980, 1982, 2);
        assert_eq!(frames.len(), 3);

        assert_eq!(frames[0].year, 1980);
        let names: Vec<_> = frames[0].entries.iter().map(|e| e.genre.as_str()).collect();
        assert_eq!(names, vec!["rock", "pop"]);
        assert_eq!(frames[0].entries[1].value, 66.7);

        assert!(frames[1].entries.is_empty());
        assert_eq!(frames[2].entries.len(), 1);
    }
}
