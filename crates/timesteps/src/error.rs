//! Result and Error types for the timesteps module

use std::path::PathBuf;

/// Type alias for `Result<T, timesteps::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `swtools-timesteps`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// No timesteps file where one was expected
    #[error("no timesteps file found at {0:?}")]
    FileNotFound(PathBuf),

    /// A value in a complete row is not a number, logged when the row is skipped
    #[error("failed to parse column {column} on line {line} (\"{text}\")")]
    ParseError {
        line: usize,
        column: usize,
        text: String,
    },

    /// Scaling needs at least one run to compare against
    #[error("no runs provided for scaling comparison")]
    NoScalingPoints,

    /// A run that never reached the common simulation time
    #[error("run with {threads} threads has no rows up to sim time {sim_time}")]
    SimTimeNotReached { threads: u32, sim_time: f64 },

    /// A run that took no time can not be compared with
    #[error("run with {threads} threads has a zero time to solution")]
    ZeroTimeToSolution { threads: u32 },
}
