//! Generic group-and-aggregate helper shared by every chart

use std::collections::BTreeMap;

/// Group `items` by `key`, fold each group into an accumulator, then finish it.
///
/// Groups come back ordered by key.
pub fn group_and_aggregate<I, K, A, V>(
    items: I,
    key: impl Fn(&I::Item) -> Option<K>,
    init: impl Fn() -> A,
    fold: impl Fn(&mut A, I::Item),
    finish: impl Fn(A) -> V,
) -> BTreeMap<K, V>
where
    I: IntoIterator,
    K: Ord,
{
    let mut groups: BTreeMap<K, A> = BTreeMap::new();
    for item in items {
        let Some(k) = key(&item) else { continue };
        fold(groups.entry(k).or_insert_with(&init), item);
    }
    groups.into_iter().map(|(k, acc)| (k, finish(acc))).collect()
}

/// Running mean
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// `None` when nothing was added
    pub fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

impl FromIterator<f64> for Mean {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut mean = Mean::default();
        iter.into_iter().for_each(|v| mean.add(v));
        mean
    }
}
