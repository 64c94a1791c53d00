//! Failure reporting for map analysis.
//!
//! Every variant of [`MapError`] is observed by the user as the same line,
//! [`MAP_ERROR_MESSAGE`]. The variants only carry detail for the logs.

use thiserror::Error;

/// The line printed in place of a map that failed validation.
pub const MAP_ERROR_MESSAGE: &str = "map error";

pub type Result<T> = std::result::Result<T, MapError>;

#[derive(Debug, Error)]
pub enum MapError {
    /// The source had no first line at all.
    #[error("missing header line")]
    MissingHeader,

    /// The first line could not be split into a row count and three markers.
    #[error("invalid header '{0}'")]
    InvalidHeader(String),

    /// The empty marker collides with the obstacle or full marker.
    #[error("marker '{0}' is used twice in the header")]
    DuplicateMarker(char),

    #[error("unknown character '{found}' at line {line}, column {col}")]
    UnknownCharacter { found: char, line: usize, col: usize },

    #[error("line {line} is {found} cells wide, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("header declares {declared} lines but {found} were read")]
    RowCount { declared: usize, found: usize },

    #[error("unreadable map source: {0}")]
    Io(#[from] std::io::Error),
}
