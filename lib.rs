//! Character, word and line counts plus a ranked word-frequency table for a
//! text stream.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod frequency;
pub mod report;
pub mod stats;
pub mod tokenize;
pub mod types;

pub use analyzer::{analyze, analyze_file};
pub use config::AnalyzerOptions;
pub use error::{AnalyzerError, Result};
pub use frequency::{FrequencyTable, Observation, rank};
pub use types::{AnalysisResult, FrequencyEntry, TextStats};
