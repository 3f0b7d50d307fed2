//! Error types for ledgerview-parser

use std::io;
use thiserror::Error;

/// The ledger content could not be turned into records
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Header is missing column: {column}")]
    MissingColumn { column: String },

    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },
}

/// The ledger file could not be loaded
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl LoadError {
    /// True when the file does not exist at all
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Unreadable { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

impl From<csv::Error> for ParseError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|p| p.line()).unwrap_or(0);
        let message = match error.kind() {
            csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
                format!("expected {} fields, found {}", expected_len, len)
            }
            csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
            _ => error.to_string(),
        };
        ParseError::MalformedRow { line, message }
    }
}
