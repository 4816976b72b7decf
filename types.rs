use serde::Serialize;

/// One normalized word and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: u64,
}

impl FrequencyEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self { word: word.into(), count }
    }
}

/// Aggregate counts from the first pass over the input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub chars: u64,
    pub words: u64,
    pub lines: u64,
}

/// Result of a full analysis run.
///
/// `words` counts every whitespace-delimited run, so the sum of entry counts
/// may be smaller: punctuation-only tokens and words dropped at capacity are
/// not part of any entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    stats: TextStats,
    entries: Vec<FrequencyEntry>,
    dropped: u64,
}

impl AnalysisResult {
    /// `entries` must already be ranked.
    pub fn new(stats: TextStats, entries: Vec<FrequencyEntry>, dropped: u64) -> Self {
        Self { stats, entries, dropped }
    }

    pub fn chars(&self) -> u64 {
        self.stats.chars
    }

    pub fn words(&self) -> u64 {
        self.stats.words
    }

    pub fn lines(&self) -> u64 {
        self.stats.lines
    }

    /// Entries sorted by count, highest first.
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn unique_words(&self) -> usize {
        self.entries.len()
    }

    /// Occurrences discarded because the table was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Sum of all entry counts.
    pub fn counted(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn top(&self, n: usize) -> &[FrequencyEntry] {
        &self.entries[..n.min(self.entries.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult::new(
            TextStats { chars: 30, words: 7, lines: 1 },
            vec![FrequencyEntry::new("world", 3), FrequencyEntry::new("hello", 2)],
            1,
        )
    }

    #[test]
    fn top_clamps_to_available_entries() {
        let result = sample();
        assert_eq!(result.top(1), &[FrequencyEntry::new("world", 3)]);
        assert_eq!(result.top(10).len(), 2);
        assert!(result.top(0).is_empty());
    }

    #[test]
    fn counted_can_trail_words() {
        let result = sample();
        assert_eq!(result.counted(), 5);
        assert!(result.counted() <= result.words());
        assert_eq!(result.unique_words(), 2);
    }
}
