// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop the decode-and-analyze pipeline.
///
/// No variant is retried: the inputs are already-fetched text, so a failure
/// means the page no longer looks the way the decoder expects.
#[derive(Error, Debug)]
pub enum Error {
    /// A required header label is absent for this position's page.
    #[error("{position} page has no '{field}' column in its header row")]
    Schema { position: String, field: &'static str },

    /// A resolved column does not fit inside the per-athlete stride.
    #[error("column {column} for '{field}' does not fit a stride of {stride} cells")]
    Layout {
        field: &'static str,
        column: usize,
        stride: usize,
    },

    /// A decoded sequence is shorter than the athlete count.
    #[error("'{field}' decoded {found} values, expected {expected}")]
    StreamLength {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// A cell expected to be numeric (or a well-formed name) is not.
    #[error("row {row}: '{field}' value {value:?} is not valid")]
    Parse {
        field: &'static str,
        row: usize,
        value: String,
    },

    /// Regression needs at least two records.
    #[error("need at least 2 players to fit a line, found {found}")]
    InsufficientData { found: usize },

    /// The page markup is missing a part the extractor relies on.
    #[error("page layout not recognised: {0}")]
    Page(String),

    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// Writing the report failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An input page could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
