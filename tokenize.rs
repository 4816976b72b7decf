use std::io::{self, BufRead};

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::stats::is_space;

// Everything that survives normalization is ASCII alphanumeric.
static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u)[^a-z0-9]+").unwrap());

/// Lowercase ASCII letters, then drop every byte that is not ASCII alphanumeric.
pub fn normalize(raw: &[u8]) -> String {
    let lower = raw.to_ascii_lowercase();
    NON_ALNUM
        .replace_all(&lower, &b""[..])
        .iter()
        .map(|&b| char::from(b))
        .collect()
}

/// Lazy stream of normalized words.
///
/// Splits on the same whitespace set as [`crate::stats::count_stats`], so
/// [`Tokens::raw_count`] ends up equal to its word count. Tokens that
/// normalize to nothing are skipped.
pub struct Tokens<R> {
    reader: R,
    max_len: Option<usize>,
    raw_count: u64,
    finished: bool,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            max_len: None,
            raw_count: 0,
            finished: false,
        }
    }

    /// Truncate normalized words to at most `max_len` characters.
    pub fn with_max_len(mut self, max_len: Option<usize>) -> Self {
        self.max_len = max_len;
        self
    }

    /// Whitespace-delimited runs seen so far, including the skipped ones.
    pub fn raw_count(&self) -> u64 {
        self.raw_count
    }

    fn next_raw(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut raw = Vec::new();
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                return Ok((!raw.is_empty()).then_some(raw));
            }

            let mut used = 0;
            let mut ended = false;
            for &b in buf {
                used += 1;
                if !is_space(b) {
                    raw.push(b);
                } else if !raw.is_empty() {
                    ended = true;
                    break;
                }
            }
            self.reader.consume(used);
            if ended {
                return Ok(Some(raw));
            }
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let raw = match self.next_raw() {
                Ok(Some(raw)) => raw,
                Ok(None) => {
                    self.finished = true;
                    return None;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            };
            self.raw_count += 1;

            let mut word = normalize(&raw);
            if let Some(max) = self.max_len {
                word.truncate(max);
            }
            if word.is_empty() {
                continue;
            }
            return Some(Ok(word));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        Tokens::new(input.as_bytes())
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn normalize_lowercases_and_strips() {
        assert_eq!(normalize(b"Hello,"), "hello");
        assert_eq!(normalize(b"don't"), "dont");
        assert_eq!(normalize(b"(R2-D2)"), "r2d2");
        assert_eq!(normalize(b"---"), "");
    }

    #[test]
    fn normalize_drops_non_ascii_bytes() {
        assert_eq!(normalize("Caf\u{e9}".as_bytes()), "caf");
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(
            words("Hello hello\tWORLD\nworld  world\n"),
            ["hello", "hello", "world", "world", "world"]
        );
    }

    #[test]
    fn punctuation_only_tokens_are_skipped_but_counted_raw() {
        let mut tokens = Tokens::new("a --- b ... c".as_bytes());
        let out: Vec<String> = tokens.by_ref().map(Result::unwrap).collect();
        assert_eq!(out, ["a", "b", "c"]);
        assert_eq!(tokens.raw_count(), 5);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(words("").is_empty());
        assert!(words(" \n\t ").is_empty());
    }

    #[test]
    fn truncates_to_max_len() {
        let out: Vec<String> = Tokens::new("Supercalifragilistic tiny".as_bytes())
            .with_max_len(Some(5))
            .map(Result::unwrap)
            .collect();
        assert_eq!(out, ["super", "tiny"]);
    }

    #[test]
    fn zero_max_len_yields_no_words() {
        let mut tokens = Tokens::new("alpha beta gamma".as_bytes()).with_max_len(Some(0));
        assert!(tokens.by_ref().next().is_none());
        assert_eq!(tokens.raw_count(), 3);
    }

    #[test]
    fn tokens_survive_small_buffers() {
        let reader = io::BufReader::with_capacity(2, "alpha beta\ngamma".as_bytes());
        let out: Vec<String> = Tokens::new(reader).map(Result::unwrap).collect();
        assert_eq!(out, ["alpha", "beta", "gamma"]);
    }
}
