use std::collections::HashMap;

use itertools::Itertools;
use tracing::warn;

use crate::types::FrequencyEntry;

/// What [`FrequencyTable::observe`] did with a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Existing entry incremented.
    Counted,
    /// New entry created with count 1.
    Inserted,
    /// Table full; the word was not recorded.
    Dropped,
}

/// Occurrence counts keyed on the normalized word.
///
/// Entries stay in first-seen order until ranked.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    index: HashMap<String, usize>,
    capacity: Option<usize>,
    dropped: u64,
}

impl FrequencyTable {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn observe(&mut self, word: &str) -> Observation {
        if let Some(&i) = self.index.get(word) {
            self.entries[i].count += 1;
            return Observation::Counted;
        }

        if self.capacity.is_some_and(|cap| self.entries.len() >= cap) {
            self.dropped += 1;
            warn!(
                word,
                limit = self.entries.len(),
                "Reached maximum unique word limit. Some words may not be counted."
            );
            return Observation::Dropped;
        }

        self.index.insert(word.to_owned(), self.entries.len());
        self.entries.push(FrequencyEntry::new(word, 1));
        Observation::Inserted
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&i| self.entries[i].count)
    }

    /// Occurrences rejected because the table was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Consume the table, returning ranked entries and the dropped count.
    pub fn into_ranked(self) -> (Vec<FrequencyEntry>, u64) {
        (rank(self.entries), self.dropped)
    }
}

/// Sort by count, highest first. Equal counts keep their input order.
pub fn rank(entries: impl IntoIterator<Item = FrequencyEntry>) -> Vec<FrequencyEntry> {
    // sorted_by is a stable sort
    entries
        .into_iter()
        .sorted_by(|a, b| b.count.cmp(&a.count))
        .collect()
}
