//! Adaptive sample reducer for the scatter view
//!
//! Keeps every record from before a protected year and thins the more
//! voluminous recent range down to an expected quota, so large filtered
//! selections stay interactive.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::sampling::*;
use crate::data::Dated;

/// Thresholds that drive the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleBudget {
    /// Reduction only runs when the input is larger than this
    pub trigger_threshold: usize,
    /// Records with `year < protected_year_boundary` are never dropped
    pub protected_year_boundary: i32,
    /// Expected number of records kept from `year >= protected_year_boundary`
    pub recent_quota: usize,
}

impl Default for SampleBudget {
    fn default() -> Self {
        Self {
            trigger_threshold: DEFAULT_TRIGGER_THRESHOLD,
            protected_year_boundary: DEFAULT_PROTECTED_YEAR,
            recent_quota: DEFAULT_RECENT_QUOTA,
        }
    }
}

impl SampleBudget {
    /// Whether `reduce` would thin an input of `len` records
    pub fn triggers(&self, len: usize, optimization_enabled: bool) -> bool {
        optimization_enabled && len > self.trigger_threshold
    }

    pub fn is_protected<T: Dated>(&self, record: &T) -> bool {
        record.year() < self.protected_year_boundary
    }
}

/// Reduce `records` for rendering.
///
/// Below the trigger threshold, or with optimisation disabled, the input is
/// returned unchanged. Otherwise the protected range is kept in full and each
/// recent record survives an independent Bernoulli trial with probability
/// `recent_quota / |recent|`, so the recent count varies from run to run
/// around the quota. Protected records come first in the output.
pub fn reduce<T, R>(
    records: &[T],
    budget: &SampleBudget,
    optimization_enabled: bool,
    rng: &mut R,
) -> Vec<T>
where
    T: Clone + Dated,
    R: Rng + ?Sized,
{
    profiling::scope!("reduce");

    if !budget.triggers(records.len(), optimization_enabled) {
        return records.to_vec();
    }

    let (old, recent): (Vec<&T>, Vec<&T>) =
        records.iter().partition(|r| budget.is_protected(*r));

    let mut output: Vec<T> =
        Vec::with_capacity(old.len() + recent.len().min(budget.recent_quota));
    output.extend(old.iter().map(|r| (*r).clone()));

    if recent.len() <= budget.recent_quota {
        output.extend(recent.iter().map(|r| (*r).clone()));
    } else {
        let keep_ratio = budget.recent_quota as f64 / recent.len() as f64;
        output.extend(
            recent
                .iter()
                .filter(|_| rng.random::<f64>() < keep_ratio)
                .map(|r| (*r).clone()),
        );
    }

    tracing::debug!(
        input = records.len(),
        protected = old.len(),
        recent = recent.len(),
        kept = output.len(),
        "scatter sample reduced"
    );

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rows(year: i32, count: usize, offset: usize) -> Vec<Record> {
        (0..count)
            .map(|i| {
                Record::new(
                    year,
                    ((i + offset) % 101) as f64,
                    3.0,
                    format!("track-{}", i + offset),
                    "artist",
                    "pop",
                )
            })
            .collect()
    }

    fn scenario() -> Vec<Record> {
        let mut records = rows(1990, 1000, 0);
        records.extend(rows(2010, 2000, 1000));
        records
    }

    fn scenario_budget() -> SampleBudget {
        SampleBudget {
            trigger_threshold: 2000,
            protected_year_boundary: 2000,
            recent_quota: 500,
        }
    }

    #[test]
    fn test_small_input_is_identity() {
        let mut rng = SmallRng::seed_from_u64(1);
        let records = rows(2015, 2000, 0);
        let budget = scenario_budget();

        assert_eq!(reduce(&records, &budget, true, &mut rng), records);
        assert_eq!(reduce(&records, &budget, false, &mut rng), records);
    }

    #[test]
    fn test_disabled_is_identity() {
        let mut rng = SmallRng::seed_from_u64(2);
        let records = scenario();

        let out = reduce(&records, &scenario_budget(), false, &mut rng);
        assert_eq!(out.len(), 3000);
        assert_eq!(out, records);
    }

    #[test]
    fn test_empty_input() {
        let mut rng = SmallRng::seed_from_u64(3);
        let empty: Vec<Record> = Vec::new();
        let zero = SampleBudget {
            trigger_threshold: 0,
            protected_year_boundary: 2000,
            recent_quota: 0,
        };

        assert!(reduce(&empty, &zero, true, &mut rng).is_empty());
        assert!(reduce(&empty, &scenario_budget(), false, &mut rng).is_empty());
    }

    #[test]
    fn test_identity_paths_are_idempotent() {
        let mut rng = SmallRng::seed_from_u64(4);
        let records = scenario();
        let budget = scenario_budget();

        let once = reduce(&records, &budget, false, &mut rng);
        let twice = reduce(&once, &budget, false, &mut rng);
        assert_eq!(once, twice);

        let small = rows(1995, 10, 0);
        let once = reduce(&small, &budget, true, &mut rng);
        assert_eq!(reduce(&once, &budget, true, &mut rng), once);
    }

    #[test]
    fn test_scenario_keeps_protected_rows() {
        let mut rng = SmallRng::seed_from_u64(5);
        let records = scenario();

        let out = reduce(&records, &scenario_budget(), true, &mut rng);

        let old: Vec<&Record> = out.iter().filter(|r| r.year == 1990).collect();
        assert_eq!(old.len(), 1000);
        // Protected rows come first, in input order
        assert_eq!(out[..1000], records[..1000]);

        assert!(out.len() >= 1000 && out.len() <= 3000);
        let recent = out.len() - 1000;
        // 500 expected, standard deviation ~19.4
        assert!((400..=600).contains(&recent), "recent kept: {}", recent);

        // Every output record comes from the input, none duplicated
        let mut names: Vec<&str> = out.iter().map(|r| r.track.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), out.len());
        assert!(out.iter().all(|r| records.contains(r)));
    }

    #[test]
    fn test_recent_under_quota_kept_whole() {
        let mut rng = SmallRng::seed_from_u64(6);
        let mut records = rows(1985, 2500, 0);
        records.extend(rows(2005, 300, 2500));

        let out = reduce(&records, &scenario_budget(), true, &mut rng);
        assert_eq!(out, records);
    }

    #[test]
    fn test_zero_quota_drops_recent() {
        let mut rng = SmallRng::seed_from_u64(7);
        let records = scenario();
        let budget = SampleBudget {
            recent_quota: 0,
            ..scenario_budget()
        };

        let out = reduce(&records, &budget, true, &mut rng);
        assert_eq!(out.len(), 1000);
        assert!(out.iter().all(|r| r.year < 2000));
    }

    #[test]
    fn test_zero_threshold_always_triggers() {
        let mut rng = SmallRng::seed_from_u64(8);
        let records = rows(2020, 10, 0);
        let budget = SampleBudget {
            trigger_threshold: 0,
            protected_year_boundary: 2000,
            recent_quota: 0,
        };

        assert!(reduce(&records, &budget, true, &mut rng).is_empty());
    }

    #[derive(Clone)]
    struct YearOnly(i32);

    impl Dated for YearOnly {
        fn year(&self) -> i32 {
            self.0
        }
    }

    #[test]
    fn test_mean_recent_count_matches_quota() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let records: Vec<YearOnly> = std::iter::repeat_n(YearOnly(1990), 1000)
            .chain(std::iter::repeat_n(YearOnly(2010), 2000))
            .collect();
        let budget = scenario_budget();
        let runs = 10_000;

        let total_recent: usize = (0..runs)
            .map(|_| {
                reduce(&records, &budget, true, &mut rng)
                    .iter()
                    .filter(|r| r.0 >= 2000)
                    .count()
            })
            .sum();

        let mean = total_recent as f64 / runs as f64;
        let quota = budget.recent_quota as f64;
        assert!(
            (mean - quota).abs() < quota * 0.05,
            "mean recent count {} not within 5% of {}",
            mean,
            quota
        );
    }

    #[test]
    fn test_retention_count_varies() {
        // Bernoulli retention, not an exact-K sample
        let mut rng = SmallRng::seed_from_u64(9);
        let records = scenario();
        let budget = scenario_budget();

        let sizes: std::collections::HashSet<usize> = (0..20)
            .map(|_| reduce(&records, &budget, true, &mut rng).len())
            .collect();
        assert!(sizes.len() > 1);
    }
}
