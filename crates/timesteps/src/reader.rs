//! Simple read operations for timesteps_*.txt files
//!
//! Rows are whitespace separated, with `#` marking comment lines. A run that
//! is killed part way through a step can leave a truncated final row, so only
//! rows with more than ten tokens are read. A complete row holding a value
//! that is not a number is skipped with a warning rather than failing the
//! whole file.

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

// crate modules
use crate::error::{Error, Result};
use crate::timeline::{Timeline, TimelineRow};

// swtools modules
use swtools_utils::Time;

// external crates
use log::{debug, info, warn};
use nom::character::complete;
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::IResult;

/// Rows with this many tokens or fewer are incomplete
const MIN_TOKENS: usize = 10;

/// Column of the simulation time
const SIM_TIME: usize = 1;

/// Column of the particle updates
const UPDATES: usize = 7;

/// Read every complete row of a timesteps file
///
/// Returns a Result containing a [Timeline] with all the rows extracted from
/// the file at `path`. Only a missing or unreadable file is an error.
///
/// ```rust, no_run
/// # use swtools_timesteps::read_timesteps_file;
/// let timeline = read_timesteps_file("run/timesteps_28.txt").unwrap();
/// println!("{:.3}", timeline.time_to_solution());
/// ```
pub fn read_timesteps_file<P: AsRef<Path>>(path: P) -> Result<Timeline> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    info!("Reading {:?}", path.file_name().unwrap_or(path.as_os_str()));
    let reader = init_reader(path)?;

    let mut rows = Vec::new();
    let mut skipped = 0;
    for (i, line) in reader.lines().enumerate() {
        match parse_row(i + 1, &line?) {
            Ok(Some(row)) => rows.push(row),
            Ok(None) => skipped += 1,
            Err(e) => {
                warn!("Skipping row: {e}");
                skipped += 1;
            }
        }
    }
    debug!("{} rows read, {skipped} lines skipped", rows.len());

    Ok(Timeline::from(rows))
}

/// Find the timesteps file of a run
///
/// The first `timesteps_*.txt` file in `run_directory`, sorted by name.
pub fn find_timesteps_file<P: AsRef<Path>>(run_directory: P) -> Result<PathBuf> {
    let directory = run_directory.as_ref();

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_timesteps_file(&path) {
            candidates.push(path);
        }
    }
    candidates.sort();

    debug!("Timesteps files in {directory:?}: {candidates:?}");
    candidates
        .into_iter()
        .next()
        .ok_or_else(|| Error::FileNotFound(directory.join("timesteps_*.txt")))
}

/// Total wall-clock time of the run in `run_directory`, in hours
///
/// ```rust, no_run
/// # use swtools_timesteps::time_to_solution;
/// let hours = time_to_solution("path/to/run").unwrap();
/// ```
pub fn time_to_solution<P: AsRef<Path>>(run_directory: P) -> Result<Time> {
    let path = find_timesteps_file(run_directory)?;
    Ok(read_timesteps_file(path)?.time_to_solution())
}

/// Initialise a reader from anything that can be turned into a path
fn init_reader(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

fn is_timesteps_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| {
            name.starts_with("timesteps_") && name.ends_with(".txt")
        })
}

/// Interpret a line, `None` for comments and incomplete rows
fn parse_row(line: usize, i: &str) -> Result<Option<TimelineRow>> {
    if i.trim_start().starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = i.split_whitespace().collect();
    if tokens.len() <= MIN_TOKENS {
        return Ok(None);
    }

    let wallclock = tokens.len() - 2;
    Ok(Some(TimelineRow {
        sim_time: column(&tokens, SIM_TIME, line, whole_f64)?,
        updates: column(&tokens, UPDATES, line, whole_u64)?,
        wallclock: Time::ms(column(&tokens, wallclock, line, whole_f64)?),
    }))
}

fn column<T>(tokens: &[&str], index: usize, line: usize, parser: fn(&str) -> IResult<&str, T>) -> Result<T> {
    let text = tokens[index];
    parser(text).map(|(_, v)| v).map_err(|_| Error::ParseError {
        line,
        column: index,
        text: text.to_string(),
    })
}

fn whole_f64(i: &str) -> IResult<&str, f64> {
    all_consuming(double)(i)
}

fn whole_u64(i: &str) -> IResult<&str, u64> {
    all_consuming(complete::u64)(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str =
        "  3   3.750000e-03  1.0000000  0.0000000  1.250000e-03  43  56  4096  0  0  0  0  21.500  0";

    #[test]
    fn complete_row() {
        let row = parse_row(1, ROW).unwrap().unwrap();
        assert_eq!(row.sim_time, 3.75e-3);
        assert_eq!(row.updates, 4096);
        assert_eq!(row.wallclock, Time::ms(21.5));
    }

    #[test]
    fn comments_and_short_rows_are_skipped() {
        assert_eq!(parse_row(1, "# Step Time").unwrap(), None);
        assert_eq!(parse_row(1, "   # indented comment").unwrap(), None);
        assert_eq!(parse_row(1, "  8  1.0e-02  1.0").unwrap(), None);
        assert_eq!(parse_row(1, "").unwrap(), None);
    }

    #[test]
    fn bad_value_reports_position() {
        let row = ROW.replace("4096", "lots");
        let err = parse_row(12, &row).unwrap_err();
        assert!(matches!(
            err,
            Error::ParseError {
                line: 12,
                column: 7,
                ..
            }
        ));
    }

    #[test]
    fn timesteps_file_names() {
        assert!(is_timesteps_file(Path::new("run/timesteps_28.txt")));
        assert!(!is_timesteps_file(Path::new("run/timesteps_28.txt.bak")));
        assert!(!is_timesteps_file(Path::new("run/statistics.txt")));
    }
}
