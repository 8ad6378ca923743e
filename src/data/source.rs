use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::record::{parse_duration, Record};
use crate::constants::dataset::MIN_YEAR;
use crate::error::{HitError, Result};

/// Counts gathered while cleaning a freshly loaded file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows found in the file
    pub total_rows: usize,
    /// Rows with an unparseable year, popularity or duration
    pub dropped_invalid: usize,
}

impl LoadReport {
    pub fn kept(&self) -> usize {
        self.total_rows - self.dropped_invalid
    }
}

/// DataSource owns the cleaned track records of one dataset file
pub struct DataSource {
    records: Vec<Record>,
    /// Original file path
    file_path: Option<PathBuf>,
    report: LoadReport,
}

impl DataSource {
    /// Load tracks from a file (CSV or JSON), dropping rows that fail to parse
    pub fn load(path: &Path) -> Result<Self> {
        profiling::scope!("DataSource::load");

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| HitError::UnsupportedFormat {
                extension: String::new(),
            })?;

        let rows = match extension.to_lowercase().as_str() {
            "csv" => {
                // Every column as text; malformed values are dropped per row below
                let df = LazyCsvReader::new(path)
                    .with_has_header(true)
                    .with_infer_schema_length(Some(0))
                    .finish()?
                    .collect()?;
                rows_from_dataframe(&df)?
            }
            "json" => {
                let contents = std::fs::read_to_string(path)?;
                rows_from_json(&contents)?
            }
            ext => {
                return Err(HitError::UnsupportedFormat {
                    extension: ext.to_string(),
                })
            }
        };

        let mut source = Self::from_rows(rows)?;
        source.file_path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            rows = source.report.total_rows,
            kept = source.records.len(),
            "dataset loaded"
        );
        Ok(source)
    }

    /// Build a DataSource from already-decoded records
    #[cfg(test)]
    pub fn from_records(records: Vec<Record>, path: Option<PathBuf>) -> Result<Self> {
        if records.is_empty() {
            return Err(HitError::EmptyDataset);
        }
        let report = LoadReport {
            total_rows: records.len(),
            ..Default::default()
        };
        Ok(Self {
            records,
            file_path: path,
            report,
        })
    }

    fn from_rows(rows: Vec<RawRow>) -> Result<Self> {
        let mut report = LoadReport {
            total_rows: rows.len(),
            ..Default::default()
        };

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            match row.into_record() {
                Some(record) => records.push(record),
                None => report.dropped_invalid += 1,
            }
        }

        if report.dropped_invalid > 0 {
            tracing::warn!(
                invalid = report.dropped_invalid,
                "dropped unparseable rows while cleaning dataset"
            );
        }

        if records.is_empty() {
            return Err(HitError::EmptyDataset);
        }

        Ok(Self {
            records,
            file_path: None,
            report,
        })
    }

    /// All cleaned records
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get the number of records
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Get the file path
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    /// Distinct known regions, sorted
    pub fn regions(&self) -> Vec<String> {
        self.records
            .iter()
            .filter_map(Record::known_region)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Records released after `max_year`; kept for the genre race only
    pub fn count_after(&self, max_year: i32) -> usize {
        self.records.iter().filter(|r| r.year > max_year).count()
    }

    /// Distinct years between MIN_YEAR and `max_year`, most recent first
    pub fn years(&self, max_year: i32) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .filter(|y| (MIN_YEAR..=max_year).contains(y))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .rev()
            .collect()
    }
}

/// One undecoded row, shared by the CSV and JSON paths
#[derive(Debug, Default)]
struct RawRow {
    year: Option<String>,
    popularity: Option<f64>,
    duration: Option<String>,
    track: Option<String>,
    artist: Option<String>,
    genre: Option<String>,
    region: Option<String>,
    country_code: Option<String>,
    danceability: Option<f64>,
    energy: Option<f64>,
    tempo: Option<f64>,
}

impl RawRow {
    fn into_record(self) -> Option<Record> {
        let year = parse_year(self.year.as_deref()?)?;
        let popularity = self.popularity.filter(|p| p.is_finite())?;
        let duration = parse_duration_field(self.duration.as_deref()?)?;

        let mut record = Record::new(
            year,
            popularity,
            duration,
            self.track.unwrap_or_default(),
            self.artist.unwrap_or_default(),
            self.genre.unwrap_or_default(),
        );
        record.region = self.region;
        record.country_code = self.country_code;
        record.danceability = self.danceability;
        record.energy = self.energy;
        record.tempo = self.tempo;
        Some(record)
    }
}

/// Accepts `2019`, `2019.0` or a release date such as `2019-05-03`
fn parse_year(s: &str) -> Option<i32> {
    let trimmed = s.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return (value.is_finite() && value.fract() == 0.0).then_some(value as i32);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.year());
    }
    // Month precision release dates ("2019-05")
    trimmed.get(..4).and_then(|y| y.parse().ok())
}

/// `m:ss` strings, or plain minutes
fn parse_duration_field(s: &str) -> Option<f64> {
    parse_duration(s).or_else(|| s.trim().parse::<f64>().ok().filter(|d| d.is_finite()))
}

// --- CSV ---

fn rows_from_dataframe(df: &DataFrame) -> Result<Vec<RawRow>> {
    let height = df.height();

    let years = text_column(df, "year")?.ok_or_else(|| missing("year"))?;
    let popularity = numeric_column(df, "popularity")?.ok_or_else(|| missing("popularity"))?;
    let durations = match text_column(df, "duration")? {
        Some(col) => col,
        None => text_column(df, "duration_fmt")?.ok_or_else(|| missing("duration"))?,
    };
    let tracks = text_column(df, "track_name")?.ok_or_else(|| missing("track_name"))?;
    let artists = text_column(df, "artists")?.ok_or_else(|| missing("artists"))?;
    let genres = text_column(df, "track_genre")?;
    let regions = text_column(df, "region")?;
    let countries = text_column(df, "country_code")?;
    let danceability = numeric_column(df, "danceability")?;
    let energy = numeric_column(df, "energy")?;
    let tempo = numeric_column(df, "tempo")?;

    let text_at = |col: &Option<Vec<Option<String>>>, i: usize| {
        col.as_ref().and_then(|c| c.get(i).cloned().flatten())
    };
    let num_at = |col: &Option<Vec<Option<f64>>>, i: usize| {
        col.as_ref().and_then(|c| c.get(i).copied().flatten())
    };

    Ok((0..height)
        .map(|i| RawRow {
            year: years[i].clone(),
            popularity: popularity[i],
            duration: durations[i].clone(),
            track: tracks[i].clone(),
            artist: artists[i].clone(),
            genre: text_at(&genres, i),
            region: text_at(&regions, i),
            country_code: text_at(&countries, i),
            danceability: num_at(&danceability, i),
            energy: num_at(&energy, i),
            tempo: num_at(&tempo, i),
        })
        .collect())
}

fn missing(column: &str) -> HitError {
    HitError::ColumnNotFound {
        column: column.to_string(),
    }
}

/// Column values as strings, `None` when the column does not exist
fn text_column(df: &DataFrame, name: &str) -> Result<Option<Vec<Option<String>>>> {
    let Ok(column) = df.column(name) else {
        return Ok(None);
    };
    let series = column.as_materialized_series().cast(&DataType::String)?;
    let values = series
        .str()?
        .into_iter()
        .map(|opt| opt.map(str::to_string))
        .collect();
    Ok(Some(values))
}

/// Column values as f64, parsing string columns by hand
fn numeric_column(df: &DataFrame, name: &str) -> Result<Option<Vec<Option<f64>>>> {
    let Ok(column) = df.column(name) else {
        return Ok(None);
    };
    let series = column.as_materialized_series();

    let values = if matches!(series.dtype(), DataType::String) {
        series
            .str()?
            .into_iter()
            .map(|opt| opt.and_then(|s| s.trim().parse::<f64>().ok()))
            .collect()
    } else {
        series
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .collect()
    };
    Ok(Some(values))
}

// --- JSON ---

/// Numbers that the ETL sometimes writes as strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Flex {
    Num(f64),
    Text(String),
}

impl Flex {
    fn into_text(self) -> String {
        match self {
            Flex::Num(n) if n.fract() == 0.0 => format!("{}", n as i64),
            Flex::Num(n) => n.to_string(),
            Flex::Text(s) => s,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Flex::Num(n) => Some(*n),
            Flex::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonTrack {
    track_name: Option<String>,
    artists: Option<String>,
    year: Option<Flex>,
    popularity: Option<Flex>,
    duration_fmt: Option<String>,
    duration: Option<Flex>,
    track_genre: Option<String>,
    region: Option<String>,
    country_code: Option<String>,
    danceability: Option<f64>,
    energy: Option<f64>,
    tempo: Option<f64>,
}

impl From<JsonTrack> for RawRow {
    fn from(t: JsonTrack) -> Self {
        RawRow {
            year: t.year.map(Flex::into_text),
            popularity: t.popularity.as_ref().and_then(Flex::as_f64),
            duration: t.duration_fmt.or_else(|| t.duration.map(Flex::into_text)),
            track: t.track_name,
            artist: t.artists,
            genre: t.track_genre,
            region: t.region,
            country_code: t.country_code,
            danceability: t.danceability,
            energy: t.energy,
            tempo: t.tempo,
        }
    }
}

fn rows_from_json(contents: &str) -> Result<Vec<RawRow>> {
    let tracks: Vec<JsonTrack> = serde_json::from_str(contents)?;
    Ok(tracks.into_iter().map(RawRow::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2019"), Some(2019));
        assert_eq!(parse_year(" 1985.0 "), Some(1985));
        assert_eq!(parse_year("2008-11-04"), Some(2008));
        assert_eq!(parse_year("2001-03"), Some(2001));
        assert_eq!(parse_year("1985.5"), None);
        assert_eq!(parse_year("n/a"), None);
    }

    #[test]
    fn test_csv_loading_and_cleaning() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "track_name,artists,year,popularity,duration,track_genre").unwrap();
        writeln!(file, "Song A,Artist A,1985,70,3:30,rock").unwrap();
        writeln!(file, "Song B,Artist B,2010,40,4:00, pop ").unwrap();
        writeln!(file, "Song C,Artist C,2023,90,3:00,pop").unwrap();
        writeln!(file, "Song D,Artist D,2015,55,bad,pop").unwrap();
        writeln!(file, "Song E,Artist E,2012,60,2:15,").unwrap();
        file.flush().unwrap();

        let ds = DataSource::load(file.path()).unwrap();
        assert_eq!(ds.len(), 4);

        let report = ds.report();
        assert_eq!(report.total_rows, 5);
        assert_eq!(report.dropped_invalid, 1);
        assert_eq!(report.kept(), 4);
        assert_eq!(ds.count_after(2022), 1);
        assert_eq!(ds.years(2022), vec![2012, 2010, 1985]);

        let records = ds.records();
        assert_eq!(records[0].year, 1985);
        assert_eq!(records[0].duration, 3.5);
        assert_eq!(records[1].genre, "pop");
        assert_eq!(records[2].year, 2023);
        assert_eq!(records[3].genre, "Unknown");
        assert_eq!(ds.file_path(), Some(file.path()));
    }

    #[test]
    fn test_csv_malformed_value_after_inference_window() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "year,popularity,duration,track_name,artists,track_genre").unwrap();
        for i in 0..150 {
            writeln!(file, "{},{},3:30,Song {},Artist {},pop", 1990 + i % 30, i % 100, i, i).unwrap();
        }
        writeln!(file, "2011,n/a,3:30,Broken,Someone,pop").unwrap();
        writeln!(file, "unknown,40,3:30,Undated,Someone,pop").unwrap();
        file.flush().unwrap();

        let ds = DataSource::load(file.path()).unwrap();
        assert_eq!(ds.len(), 150);
        assert_eq!(ds.report().total_rows, 152);
        assert_eq!(ds.report().dropped_invalid, 2);
        assert_eq!(ds.records()[149].popularity, 49.0);
    }

    #[test]
    fn test_csv_missing_column() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "track_name,artists,year,duration").unwrap();
        writeln!(file, "Song,Artist,2000,3:00").unwrap();
        file.flush().unwrap();

        let err = DataSource::load(file.path()).err().unwrap();
        assert!(matches!(err, HitError::ColumnNotFound { ref column } if column == "popularity"));
    }

    #[test]
    fn test_json_loading() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[
                {{"track_name": "One", "artists": "A & B", "year": "1999", "region": "Europe",
                  "country_code": "FR", "duration_fmt": "3:45", "popularity": 81,
                  "danceability": 0.7, "energy": 0.8, "tempo": 120.0, "track_genre": "dance"}},
                {{"track_name": "Two", "artists": "C", "year": 2005, "region": "Inconnu",
                  "duration_fmt": "4:10", "popularity": 45, "track_genre": "rock"}},
                {{"track_name": "Three", "artists": "D", "year": null,
                  "duration_fmt": "2:10", "popularity": 33, "track_genre": "rock"}}
            ]"#
        )
        .unwrap();
        file.flush().unwrap();

        let ds = DataSource::load(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.report().dropped_invalid, 1);

        let first = &ds.records()[0];
        assert_eq!(first.year, 1999);
        assert_eq!(first.duration, 3.75);
        assert_eq!(first.country_code.as_deref(), Some("FR"));
        assert_eq!(first.tempo, Some(120.0));

        assert_eq!(ds.regions(), vec!["Europe".to_string()]);
        assert_eq!(ds.years(2022), vec![2005, 1999]);
    }

    #[test]
    fn test_unsupported_and_empty() {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        let err = DataSource::load(file.path()).err().unwrap();
        assert!(matches!(err, HitError::UnsupportedFormat { .. }));

        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "[]").unwrap();
        file.flush().unwrap();
        let err = DataSource::load(file.path()).err().unwrap();
        assert!(matches!(err, HitError::EmptyDataset));
    }
}
