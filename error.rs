use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Could not open file '{}'.", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),

    #[error("failed to read filename from stdin: {0}")]
    Prompt(#[source] io::Error),

    #[error("failed to render JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_open_message_names_the_path() {
        let err = AnalyzerError::FileOpen {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "nope"),
        };
        assert_eq!(err.to_string(), "Could not open file 'missing.txt'.");
    }

    #[test]
    fn io_errors_convert_to_read() {
        let err: AnalyzerError = io::Error::other("disk gone").into();
        match err {
            AnalyzerError::Read(_) => (),
            _ => panic!("Expected Read error"),
        }
    }
}
