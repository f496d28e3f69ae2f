// internal
use crate::core::{ColumnMap, Timesteps};
use crate::error::{Error, Result};
use crate::parsers::*;
use crate::stdout::Stdout;

// external
use log::{debug, error, trace};

// ! Step table
impl Stdout {
    /// Parse the step table using the canonical [ColumnMap::V2] layout
    ///
    /// The first `header_lines` lines are the run banner and are always
    /// skipped, [DEFAULT_HEADER_LINES](crate::DEFAULT_HEADER_LINES) suits
    /// most runs. Every following line indented by a blank is a step row.
    ///
    /// The result holds every step from 0 to the final step exactly once, or
    /// the call fails. No partial tables are returned.
    ///
    /// ```rust
    /// # use swtools_stdout::Stdout;
    /// let log = "\
    /// banner line
    ///   0  0.0 1.0 0.0 0.0 0 56 4096 0 0 0 0 25.000 0
    ///   1  0.1 1.0 0.0 0.1 0 56 4096 0 0 0 0 12.500 0
    /// ";
    /// let stdout = Stdout::from_reader(log.as_bytes()).unwrap();
    /// let steps = stdout.parse_timesteps(1).unwrap();
    /// assert_eq!(steps.len(), 2);
    /// assert_eq!(steps.total_updates(), 8192);
    /// ```
    pub fn parse_timesteps(&self, header_lines: usize) -> Result<Timesteps> {
        self.parse_timesteps_with(header_lines, &ColumnMap::V2)
    }

    /// Parse the step table with an explicit column layout
    pub fn parse_timesteps_with(&self, header_lines: usize, columns: &ColumnMap) -> Result<Timesteps> {
        debug!("---------------------");
        debug!(" Parsing step table  ");
        debug!("---------------------");
        debug!("Header      = {header_lines} lines");
        debug!("Columns     = {columns:?}");

        let mut records = Vec::new();
        for (i, line) in self.lines.iter().enumerate().skip(header_lines) {
            if !is_step_row(line) {
                continue;
            }
            // report 1-based line numbers like an editor would
            let record = step_row(i + 1, line, columns)?;
            trace!("{record:?}");
            records.push(record);
        }
        debug!("Rows        = {}", records.len());

        Timesteps::try_from(records).map_err(|e| {
            if let Error::Integrity(reason) = &e {
                error!("Step table rejected: {reason}");
            }
            e
        })
    }
}
