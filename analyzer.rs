use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::debug;

use crate::config::AnalyzerOptions;
use crate::error::{AnalyzerError, Result};
use crate::frequency::FrequencyTable;
use crate::stats::count_stats;
use crate::tokenize::Tokens;
use crate::types::AnalysisResult;

/// Run both passes over `input`: aggregate counts, then rewind and build the
/// frequency table. Both passes start at the stream's current position.
pub fn analyze<R: Read + Seek>(input: R, options: &AnalyzerOptions) -> Result<AnalysisResult> {
    let mut reader = BufReader::new(input);
    let start = reader.stream_position()?;

    let stats = count_stats(&mut reader)?;
    debug!(
        chars = stats.chars,
        words = stats.words,
        lines = stats.lines,
        "counted stats"
    );

    reader.seek(SeekFrom::Start(start))?;

    let mut table = FrequencyTable::new(options.max_unique_words);
    let mut tokens = Tokens::new(&mut reader).with_max_len(options.max_word_len);
    for word in tokens.by_ref() {
        table.observe(&word?);
    }
    debug!(
        raw = tokens.raw_count(),
        unique = table.len(),
        dropped = table.dropped(),
        "counted word frequencies"
    );

    let (entries, dropped) = table.into_ranked();
    Ok(AnalysisResult::new(stats, entries, dropped))
}

/// Open `path` and analyze it. The file is closed before returning.
pub fn analyze_file(path: impl AsRef<Path>, options: &AnalyzerOptions) -> Result<AnalysisResult> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AnalyzerError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    analyze(file, options)
}
