// Crate types
use crate::error::{Error, Result};
use crate::reader;

// Other libraries
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Header lines printed before the step table by a typical run
pub const DEFAULT_HEADER_LINES: usize = 40;

/// How to treat a delimiter pair that matches no line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Missing values are a [PatternNotFound](Error::PatternNotFound) error
    #[default]
    Strict,
    /// Missing values are simply `None`
    Lenient,
}

/// Captured console output of a single simulation run
///
/// This [Stdout] is the primary data structure for pulling values out of a
/// log. The file is read once on construction and held as a list of lines.
/// Every accessor is a fresh scan over those lines, so nothing is cached and
/// calling an accessor twice gives the same answer.
///
/// | Accessor                                   | Result                   |
/// | ------------------------------------------ | ------------------------ |
/// | [num_particles](Stdout::num_particles)     | `u64`                    |
/// | [num_ranks](Stdout::num_ranks)             | `u32`                    |
/// | [threads_per_rank](Stdout::threads_per_rank) | `u32`                  |
/// | [num_top_level_cells](Stdout::num_top_level_cells) | `u64`            |
/// | [ic_loading_time](Stdout::ic_loading_time) | [Time](swtools_utils::Time) |
/// | [parse_timesteps](Stdout::parse_timesteps) | [Timesteps](crate::Timesteps) |
/// | [scheduler_report_task_times](Stdout::scheduler_report_task_times) | [SchedulerReport](crate::SchedulerReport) |
#[derive(Debug, Clone, Default)]
pub struct Stdout {
    pub(crate) lines: Vec<String>,
    pub(crate) strictness: Strictness,
}

impl Stdout {
    /// Read a captured log file
    ///
    /// The `path` may be a [&str], [String], [Path], etc..
    ///
    /// Example
    /// ```rust, no_run
    /// # use swtools_stdout::Stdout;
    /// let stdout = Stdout::from_file("path/to/output.log").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        info!("Reading {:?}", path.file_name().unwrap_or(path.as_os_str()));
        let lines = reader::read_lines(open(path)?)?;
        Ok(Self::from_lines(lines))
    }

    /// Read captured output from any buffered stream
    ///
    /// ```rust
    /// # use swtools_stdout::Stdout;
    /// let log = "main: MPI is up and running with 16 node(s).\n";
    /// let stdout = Stdout::from_reader(log.as_bytes()).unwrap();
    /// assert_eq!(stdout.num_ranks().unwrap(), 16);
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::from_lines(reader::read_lines(reader)?))
    }

    /// Wrap lines that are already in memory
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            strictness: Strictness::default(),
        }
    }

    /// Choose how [find_value_in_line](Stdout::find_value_in_line) reports a
    /// missing value
    pub fn set_strictness(&mut self, strictness: Strictness) {
        self.strictness = strictness;
    }

    /// Builder-style version of [set_strictness](Stdout::set_strictness)
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.set_strictness(strictness);
        self
    }

    /// Current strictness setting
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Every line of the log, without line endings
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines in the log
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True for an empty log
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A log that exists but cannot be opened is as good as missing
fn open(path: &Path) -> Result<BufReader<File>> {
    reader::init_reader(path).map_err(|e| {
        warn!("Unable to open {path:?}: {e}");
        Error::FileNotFound(path.to_path_buf())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unopenable_log_is_not_found() {
        // skips the is_file() guard in from_file
        let err = open(Path::new("./data/kh_v3.log")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(p) if p.ends_with("kh_v3.log")));
    }

    #[test]
    fn readable_log_opens() {
        assert!(open(Path::new("./data/kh_v2.log")).is_ok());
    }
}
