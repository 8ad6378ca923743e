use std::cmp::Ordering;

use crate::data::Record;

/// The `n` most popular tracks, ties kept in input order
pub fn top_tracks(records: &[Record], n: usize) -> Vec<&Record> {
    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by(|a, b| {
        b.popularity
            .partial_cmp(&a.popularity)
            .unwrap_or(Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_tracks() {
        let records: Vec<Record> = [(40.0, "a"), (90.0, "b"), (60.0, "c"), (90.0, "d")]
            .iter()
            .map(|&(p, name)| Record::new(2000, p, 3.0, name, "x", "g"))
            .collect();

        let top: Vec<&str> = top_tracks(&records, 3).iter().map(|r| r.track.as_str()).collect();
        assert_eq!(top, vec!["b", "d", "c"]);
        assert!(top_tracks(&[], 5).is_empty());
    }
}
