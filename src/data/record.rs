//! Track records and the small parsing helpers shared by the loaders

use crate::constants::dataset::UNKNOWN_GENRE;

/// Anything that can be placed on the release-year axis
pub trait Dated {
    fn year(&self) -> i32;
}

/// One catalogued track observation
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub year: i32,
    /// Popularity score, conceptually 0-100
    pub popularity: f64,
    /// Duration in minutes
    pub duration: f64,
    pub track: String,
    pub artist: String,
    pub genre: String,
    pub region: Option<String>,
    pub country_code: Option<String>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub tempo: Option<f64>,
}

impl Dated for Record {
    fn year(&self) -> i32 {
        self.year
    }
}

impl<T: Dated + ?Sized> Dated for &T {
    fn year(&self) -> i32 {
        (**self).year()
    }
}

impl Record {
    /// Build a record with only the fields every dataset provides
    pub fn new(
        year: i32,
        popularity: f64,
        duration: f64,
        track: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        let genre: String = genre.into();
        Self {
            year,
            popularity,
            duration,
            track: track.into(),
            artist: artist.into(),
            genre: normalize_genre(Some(genre.as_str())),
            region: None,
            country_code: None,
            danceability: None,
            energy: None,
            tempo: None,
        }
    }

    /// Region, or `None` when missing or one of the "unknown" labels
    pub fn known_region(&self) -> Option<&str> {
        self.region
            .as_deref()
            .filter(|r| !crate::constants::dataset::UNKNOWN_REGIONS.contains(r))
    }

    /// Text used as a search query for this track
    pub fn search_query(&self) -> String {
        format!("{} {}", self.artist, self.track)
    }
}

/// Parse an `m:ss` duration into minutes
pub fn parse_duration(s: &str) -> Option<f64> {
    let mut parts = s.trim().split(':');
    let (minutes, seconds) = match (parts.next(), parts.next(), parts.next()) {
        (Some(m), Some(s), None) => (m, s),
        _ => return None,
    };
    let minutes: f64 = minutes.trim().parse().ok()?;
    let seconds: f64 = seconds.trim().parse().ok()?;
    let total = minutes + seconds / 60.0;
    total.is_finite().then_some(total)
}

/// Format minutes as `m:ss`
pub fn format_time(minutes: f64) -> String {
    if !minutes.is_finite() {
        return "--:--".to_string();
    }
    let mut m = minutes.floor() as i64;
    let mut s = ((minutes - m as f64) * 60.0).round() as i64;
    if s == 60 {
        m += 1;
        s = 0;
    }
    format!("{}:{:02}", m, s)
}

/// Trimmed genre label, falling back to the unknown label
pub fn normalize_genre(genre: Option<&str>) -> String {
    match genre.map(str::trim) {
        Some(g) if !g.is_empty() => g.to_string(),
        _ => UNKNOWN_GENRE.to_string(),
    }
}

/// Split an artist credit into individual names
pub fn split_artists(credit: &str) -> Vec<&str> {
    let mut names = vec![credit];
    for sep in [" feat. ", " & ", ",", ";"] {
        names = names.into_iter().flat_map(|n| n.split(sep)).collect();
    }
    names
        .into_iter()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("3:30"), Some(3.5));
        assert_eq!(parse_duration("0:45"), Some(0.75));
        assert_eq!(parse_duration(" 4:00 "), Some(4.0));
        assert_eq!(parse_duration("3"), None);
        assert_eq!(parse_duration("1:02:03"), None);
        assert_eq!(parse_duration("a:bc"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(3.5), "3:30");
        assert_eq!(format_time(0.1), "0:06");
        assert_eq!(format_time(2.999), "3:00");
        assert_eq!(format_time(f64::NAN), "--:--");
    }

    #[test]
    fn test_split_artists() {
        assert_eq!(
            split_artists("Daft Punk feat. Pharrell Williams & Nile Rodgers"),
            vec!["Daft Punk", "Pharrell Williams", "Nile Rodgers"]
        );
        assert_eq!(split_artists("A, B;C"), vec!["A", "B", "C"]);
        assert!(split_artists("  ").is_empty());
    }

    #[test]
    fn test_known_region() {
        let mut r = Record::new(2001, 60.0, 3.0, "t", "a", " pop ");
        assert_eq!(r.genre, "pop");
        assert_eq!(r.known_region(), None);
        r.region = Some("Inconnu".to_string());
        assert_eq!(r.known_region(), None);
        r.region = Some("Europe".to_string());
        assert_eq!(r.known_region(), Some("Europe"));
    }
}
