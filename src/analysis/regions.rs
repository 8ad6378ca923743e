//! Region and country breakdowns

use super::aggregate::{group_and_aggregate, Mean};
use crate::data::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct RegionSummary {
    pub name: String,
    pub count: usize,
    pub avg_popularity: f64,
}

/// Track count and mean popularity per known region, by name
pub fn region_breakdown(records: &[Record]) -> Vec<RegionSummary> {
    group_and_aggregate(
        records,
        |r| r.known_region().map(str::to_string),
        Mean::default,
        |m, r| m.add(r.popularity),
        |m| m,
    )
    .into_iter()
    .map(|(name, m)| RegionSummary {
        name,
        count: m.count(),
        avg_popularity: m.value().unwrap_or(0.0),
    })
    .collect()
}

/// Best genres of one region by mean popularity
#[derive(Debug, Clone, PartialEq)]
pub struct RegionGenres {
    pub region: String,
    /// (genre, mean popularity rounded to one decimal), best first
    pub genres: Vec<(String, f64)>,
}

/// The `genres_n` most popular genres in each of the `regions_n` largest regions
pub fn top_genres_by_region(
    records: &[Record],
    regions_n: usize,
    genres_n: usize,
) -> Vec<RegionGenres> {
    let mut regions = region_breakdown(records);
    // Stable, so equal volumes stay alphabetical
    regions.sort_by(|a, b| b.count.cmp(&a.count));
    regions.truncate(regions_n);

    let by_region_genre = group_and_aggregate(
        records,
        |r| r.known_region().map(|region| (region.to_string(), r.genre.clone())),
        Mean::default,
        |m, r| m.add(r.popularity),
        |m| (m.value().unwrap_or(0.0) * 10.0).round() / 10.0,
    );

    regions
        .into_iter()
        .map(|summary| {
            let mut genres: Vec<(String, f64)> = by_region_genre
                .iter()
                .filter(|((region, _), _)| *region == summary.name)
                .map(|((_, genre), &avg)| (genre.clone(), avg))
                .collect();
            genres.sort_by(|a, b| b.1.total_cmp(&a.1));
            genres.truncate(genres_n);
            RegionGenres {
                region: summary.name,
                genres,
            }
        })
        .collect()
}

/// Tracks per country code, most represented first
pub fn country_counts(records: &[Record]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = group_and_aggregate(
        records.iter().filter(|r| r.known_region().is_some()),
        |r| r.country_code.clone(),
        || 0usize,
        |n, _| *n += 1,
        |n| n,
    )
    .into_iter()
    .collect();
    // Stable, so equal counts stay alphabetical
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(region: Option<&str>, country: Option<&str>, popularity: f64) -> Record {
        let mut r = Record::new(2000, popularity, 3.0, "t", "a", "g");
        r.region = region.map(str::to_string);
        r.country_code = country.map(str::to_string);
        r
    }

    #[test]
    fn test_region_breakdown() {
        let records = vec![
            track(Some("Europe"), Some("FR"), 60.0),
            track(Some("Europe"), Some("GB"), 80.0),
            track(Some("Asie"), Some("JP"), 50.0),
            track(Some("Inconnu"), Some("XX"), 10.0),
            track(None, None, 10.0),
        ];

        let regions = region_breakdown(&records);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0], RegionSummary { name: "Asie".into(), count: 1, avg_popularity: 50.0 });
        assert_eq!(regions[1], RegionSummary { name: "Europe".into(), count: 2, avg_popularity: 70.0 });
    }

    #[test]
    fn test_top_genres_by_region() {
        let mut records = Vec::new();
        for (genre, pop) in [("pop", 70.0), ("pop", 71.0), ("rock", 90.0), ("jazz", 40.0), ("folk", 55.0)] {
            let mut r = track(Some("Europe"), Some("FR"), pop);
            r.genre = genre.to_string();
            records.push(r);
        }
        let mut asia = track(Some("Asie"), Some("JP"), 66.66);
        asia.genre = "k-pop".to_string();
        records.push(asia);
        records.push(track(Some("Afrique"), Some("NG"), 50.0));
        records.push(track(Some("Inconnu"), Some("XX"), 99.0));

        let top = top_genres_by_region(&records, 2, 3);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].region, "Europe");
        assert_eq!(
            top[0].genres,
            vec![("rock".to_string(), 90.0), ("pop".to_string(), 70.5), ("folk".to_string(), 55.0)]
        );
        // One track each; alphabetical order breaks the tie
        assert_eq!(top[1].region, "Afrique");
        assert_eq!(top[1].genres, vec![("g".to_string(), 50.0)]);

        let all = top_genres_by_region(&records, 5, 3);
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].genres, vec![("k-pop".to_string(), 66.7)]);
    }

    #[test]
    fn test_country_counts() {
        let records = vec![
            track(Some("Europe"), Some("GB"), 1.0),
            track(Some("Europe"), Some("FR"), 1.0),
            track(Some("Europe"), Some("GB"), 1.0),
            track(Some("Inconnu"), Some("XX"), 1.0),
        ];

        let counts = country_counts(&records);
        assert_eq!(counts, vec![("GB".to_string(), 2), ("FR".to_string(), 1)]);
    }
}
