use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};

pub const DEFAULT_TOP_N: usize = 10; // rows shown in the top words table
pub const MAX_UNIQUE_WORDS: usize = 1000; // default frequency table capacity

/// Knobs for a single analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Maximum number of distinct words tracked. `None` removes the bound.
    pub max_unique_words: Option<usize>,
    /// Normalized words longer than this are truncated. `None` keeps them whole.
    pub max_word_len: Option<usize>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            max_unique_words: Some(MAX_UNIQUE_WORDS),
            max_word_len: None,
        }
    }
}

impl AnalyzerOptions {
    pub fn unbounded() -> Self {
        Self {
            max_unique_words: None,
            max_word_len: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Count characters, words and lines in a text file and rank its words
#[derive(Parser, Debug)]
#[command(name = "wordfreq")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// File to analyze. Prompted for on stdin when omitted.
    pub file: Option<PathBuf>,

    /// Number of most frequent words to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Maximum number of distinct words tracked
    #[arg(long, default_value_t = MAX_UNIQUE_WORDS, conflicts_with = "unbounded")]
    pub max_unique_words: usize,

    /// Track every distinct word, ignoring --max-unique-words
    #[arg(long)]
    pub unbounded: bool,

    /// Truncate normalized words to this many characters
    #[arg(long, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_word_len: Option<usize>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            max_unique_words: (!self.unbounded).then_some(self.max_unique_words),
            max_word_len: self.max_word_len,
        }
    }
}
