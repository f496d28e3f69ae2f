//! Result and Error types for swtools-stdout

use std::path::PathBuf;

/// Type alias for `Result<T, stdout::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `swtools-stdout` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("log file {0:?} does not exist")]
    FileNotFound(PathBuf),

    #[error("no line contains \"{prefix}\" followed by \"{suffix}\"")]
    PatternNotFound { prefix: String, suffix: String },

    #[error("failed to parse {field} from \"{text}\"")]
    ParseError { field: String, text: String },

    #[error("failed to parse column {column} of step table row on line {line} (\"{text}\")")]
    RowParseError {
        line: usize,
        column: usize,
        text: String,
    },

    #[error("scheduler report value for {category} is not a number (\"{text}\")")]
    FormatError { category: String, text: String },

    #[error("step table failed integrity check: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("thread count for normalisation must be non-zero")]
    InvalidThreadCount,
}

/// Reasons for a step table to be rejected
///
/// The table is all-or-nothing, any of these fail the whole parse.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum IntegrityError {
    #[error("no step table rows found")]
    NoSteps,

    #[error("{rows} rows collected but final step is {last}")]
    UnexpectedLength { rows: usize, last: u32 },

    #[error("row {row} holds step {found}")]
    NonContiguous { row: usize, found: u32 },
}
