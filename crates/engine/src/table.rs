// crates/engine/src/table.rs
use serde::Serialize;
use std::collections::BTreeMap;

/// Occurrence count per item name, iterated in ascending name order.
///
/// Every stored count is at least 1; a name that was never recorded reads as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `token`, returning its new count.
    pub fn record(&mut self, token: &str) -> u64 {
        if let Some(count) = self.counts.get_mut(token) {
            *count += 1;
            return *count;
        }
        self.counts.insert(token.to_owned(), 1);
        1
    }

    /// Insert a pre-aggregated count. Zero counts are not stored.
    pub(crate) fn insert_count(&mut self, name: String, count: u64) {
        if count > 0 {
            *self.counts.entry(name).or_insert(0) += count;
        }
    }

    /// Exact-match lookup; 0 means the item never appeared.
    #[must_use]
    pub fn get(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(name, &count)| (name.as_str(), count))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens recorded.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

impl<S: AsRef<str>> Extend<S> for FrequencyTable {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for token in iter {
            self.record(token.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
