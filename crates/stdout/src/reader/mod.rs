mod scalar;
mod scheduler;
mod timesteps;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::trace;

use crate::error::Result;

/// Initialise a reader from anything that can be turned into a path
pub(crate) fn init_reader(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Collect every line of the stream, line endings removed
pub(crate) fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    trace!("Read {} lines", lines.len());
    Ok(lines)
}
