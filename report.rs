use std::io::{self, Write};

use itertools::Itertools;
use serde::Serialize;

use crate::error::Result;
use crate::types::{AnalysisResult, FrequencyEntry};

const WORD_COLUMN_WIDTH: usize = 20;

/// Whitespace-delimited words per unique word, or 0 when nothing was counted.
pub fn average_occurrence(result: &AnalysisResult) -> f64 {
    match result.unique_words() {
        0 => 0.0,
        unique => result.words() as f64 / unique as f64,
    }
}

/// How many unique words fall in each occurrence bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub once: usize,
    pub two_to_five: usize,
    pub six_to_ten: usize,
    pub more_than_ten: usize,
}

impl Distribution {
    pub fn from_entries(entries: &[FrequencyEntry]) -> Self {
        let buckets = entries.iter().counts_by(|e| match e.count {
            0..=1 => 0u8,
            2..=5 => 1,
            6..=10 => 2,
            _ => 3,
        });
        let get = |bucket: u8| buckets.get(&bucket).copied().unwrap_or(0);
        Self {
            once: get(0),
            two_to_five: get(1),
            six_to_ten: get(2),
            more_than_ten: get(3),
        }
    }

    pub fn total(&self) -> usize {
        self.once + self.two_to_five + self.six_to_ten + self.more_than_ten
    }

    /// Share of `bucket` among all unique words, 0.0 when there are none.
    pub fn percent(&self, bucket: usize) -> f64 {
        match self.total() {
            0 => 0.0,
            total => bucket as f64 * 100.0 / total as f64,
        }
    }
}

/// Render the plain-text report.
pub fn write_text<W: Write>(out: &mut W, result: &AnalysisResult, top_n: usize) -> io::Result<()> {
    writeln!(out, "\n=== File Analysis Results ===")?;
    writeln!(out, "Characters: {}", result.chars())?;
    writeln!(out, "Words: {}", result.words())?;
    writeln!(out, "Lines: {}", result.lines())?;
    writeln!(out, "Unique words: {}", result.unique_words())?;

    writeln!(out, "\nTop {top_n} most frequent words:")?;
    writeln!(out, "{:<WORD_COLUMN_WIDTH$} {}", "WORD", "FREQUENCY")?;
    writeln!(out, "{}", "-".repeat(25))?;
    for entry in result.top(top_n) {
        writeln!(out, "{:<WORD_COLUMN_WIDTH$} {}", entry.word, entry.count)?;
    }

    writeln!(out, "\nWord Statistics:")?;
    writeln!(out, "Average word occurrence: {:.2}", average_occurrence(result))?;

    let dist = Distribution::from_entries(result.entries());
    writeln!(out, "\nFrequency Distribution:")?;
    for (label, bucket) in [
        ("once", dist.once),
        ("2-5 times", dist.two_to_five),
        ("6-10 times", dist.six_to_ten),
        ("more than 10 times", dist.more_than_ten),
    ] {
        writeln!(
            out,
            "Words appearing {label}: {bucket} ({:.1}%)",
            dist.percent(bucket)
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    chars: u64,
    words: u64,
    lines: u64,
    unique_words: usize,
    counted: u64,
    dropped: u64,
    average_occurrence: f64,
    top: &'a [FrequencyEntry],
    distribution: Distribution,
}

/// Render the report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, result: &AnalysisResult, top_n: usize) -> Result<()> {
    let report = JsonReport {
        chars: result.chars(),
        words: result.words(),
        lines: result.lines(),
        unique_words: result.unique_words(),
        counted: result.counted(),
        dropped: result.dropped(),
        average_occurrence: average_occurrence(result),
        top: result.top(top_n),
        distribution: Distribution::from_entries(result.entries()),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
