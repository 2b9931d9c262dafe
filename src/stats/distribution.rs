//! Frequency counters and ranked distributions.

use indexmap::IndexMap;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Ranked value counts, most frequent first, ties broken by value.
pub type Distribution = IndexMap<String, usize>;

/// Accumulates occurrence counts for string values.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    counts: HashMap<String, usize>,
}

impl Counter {
    /// Create an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence.
    pub fn add(&mut self, value: &str) {
        self.add_n(value, 1);
    }

    /// Count `n` occurrences.
    pub fn add_n(&mut self, value: &str, n: usize) {
        if let Some(count) = self.counts.get_mut(value) {
            *count += n;
        } else {
            self.counts.insert(value.to_string(), n);
        }
    }

    /// Fold another counter into this one.
    pub fn merge(&mut self, other: &Self) {
        for (value, n) in &other.counts {
            self.add_n(value, *n);
        }
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Ranked distribution, optionally truncated to the top `limit` values.
    #[must_use]
    pub fn most_common(&self, limit: Option<usize>) -> Distribution {
        let mut ranked: Vec<(&String, &usize)> = self.counts.iter().collect();
        ranked.sort_unstable_by(|a, b| Reverse(a.1).cmp(&Reverse(b.1)).then_with(|| a.0.cmp(b.0)));
        ranked
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|(value, count)| (value.clone(), *count))
            .collect()
    }
}
