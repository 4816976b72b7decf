use std::io::{self, BufRead};

use crate::types::TextStats;

/// Whitespace as understood by C's `isspace` in the "C" locale.
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

/// Count bytes, whitespace-delimited words and lines, consuming the reader.
///
/// A final line without a trailing `'\n'` still counts as a line.
pub fn count_stats<R: BufRead>(mut reader: R) -> io::Result<TextStats> {
    let mut stats = TextStats::default();
    let mut in_word = false;
    let mut last = None;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }
        for &b in buf {
            if b == b'\n' {
                stats.lines += 1;
            }
            if is_space(b) {
                in_word = false;
            } else if !in_word {
                in_word = true;
                stats.words += 1;
            }
        }
        stats.chars += buf.len() as u64;
        last = buf.last().copied();
        let len = buf.len();
        reader.consume(len);
    }

    if matches!(last, Some(b) if b != b'\n') {
        stats.lines += 1;
    }
    Ok(stats)
}
