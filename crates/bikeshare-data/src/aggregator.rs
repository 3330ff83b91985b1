//! Frequency aggregation: value counts, group-by counts and the mode.

use std::collections::BTreeMap;

// ── FrequencyTable ────────────────────────────────────────────────────────────

/// Occurrence count of every distinct value in a column.
///
/// Values are kept in ascending order, which also fixes the tie-break for
/// [`FrequencyTable::mode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<T: Ord> {
    counts: BTreeMap<T, usize>,
}

impl<T: Ord> FrequencyTable<T> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Count one more occurrence of `value`.
    pub fn add(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    /// The most frequent value.
    ///
    /// When several values share the highest count the smallest of them is
    /// returned. `None` for an empty table.
    pub fn mode(&self) -> Option<&T> {
        let mut best: Option<(&T, usize)> = None;
        for (value, &count) in &self.counts {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value)
    }

    /// Number of distinct values seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of values counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(value, count)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(value, &count)| (value, count))
    }
}

impl<T: Ord> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        for value in iter {
            table.add(value);
        }
        table
    }
}

impl<T: Ord + Clone> FrequencyTable<T> {
    /// Owned `(value, count)` pairs in ascending value order.
    pub fn to_counts(&self) -> Vec<(T, usize)> {
        self.iter().map(|(value, count)| (value.clone(), count)).collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
