// internal
use crate::core::Field;
use crate::error::{Error, Result};
use crate::parsers::*;
use crate::stdout::{Strictness, Stdout};

// swtools
use swtools_utils::Time;

// external
use log::{debug, trace};
use nom::IResult;

// ! One-off scalar values
impl Stdout {
    /// Find the first value declared between two delimiters
    ///
    /// Lines are scanned in order. The first line holding the `prefix` and,
    /// somewhere after it, the `suffix` gives the result: the trimmed text
    /// between the first `prefix` and the first `suffix` that follows it. No
    /// later lines are considered.
    ///
    /// If nothing matches, [Strictness::Strict] returns a
    /// [PatternNotFound](Error::PatternNotFound) error while
    /// [Strictness::Lenient] returns `Ok(None)`.
    ///
    /// ```rust
    /// # use swtools_stdout::{Stdout, Strictness};
    /// let log = "main: Running on 1048576 gas particles\n";
    /// let stdout = Stdout::from_reader(log.as_bytes()).unwrap();
    ///
    /// let value = stdout.find_value_in_line(("Running on", "gas")).unwrap();
    /// assert_eq!(value.as_deref(), Some("1048576"));
    ///
    /// // missing values are an error by default...
    /// assert!(stdout.find_value_in_line(("Running with", "thread")).is_err());
    ///
    /// // ...or just None when lenient
    /// let stdout = stdout.with_strictness(Strictness::Lenient);
    /// assert_eq!(stdout.find_value_in_line(("Running with", "thread")).unwrap(), None);
    /// ```
    pub fn find_value_in_line(&self, delimiters: (&str, &str)) -> Result<Option<String>> {
        match (self.first_value(delimiters), self.strictness) {
            (Some(value), _) => Ok(Some(value.to_string())),
            (None, Strictness::Lenient) => Ok(None),
            (None, Strictness::Strict) => Err(pattern_not_found(delimiters)),
        }
    }

    /// Total number of particles in the simulation
    pub fn num_particles(&self) -> Result<u64> {
        self.scalar(Field::NumParticles, whole_u64)
    }

    /// Number of MPI ranks the run used
    pub fn num_ranks(&self) -> Result<u32> {
        self.scalar(Field::NumRanks, whole_u32)
    }

    /// Number of threads on each rank
    pub fn threads_per_rank(&self) -> Result<u32> {
        self.scalar(Field::ThreadsPerRank, whole_u32)
    }

    /// Number of top-level cells in the domain decomposition
    pub fn num_top_level_cells(&self) -> Result<u64> {
        self.scalar(Field::NumTopLevelCells, whole_u64)
    }

    /// Time taken to read the initial conditions
    pub fn ic_loading_time(&self) -> Result<Time> {
        self.scalar(Field::IcLoadingTime, whole_f64).map(Time::ms)
    }

    /// Raw text of a known field regardless of strictness
    pub fn field_text(&self, field: Field) -> Result<&str> {
        let delimiters = field.delimiters();
        self.first_value(delimiters)
            .ok_or_else(|| pattern_not_found(delimiters))
    }

    // Typed fields are always required, strictness only affects raw lookups
    fn scalar<T: std::fmt::Debug>(
        &self,
        field: Field,
        parser: fn(&str) -> IResult<&str, T>,
    ) -> Result<T> {
        let text = self.field_text(field)?;
        let (_, value) = parser(text).map_err(|_| Error::ParseError {
            field: field.name().to_string(),
            text: text.to_string(),
        })?;
        debug!("{:<32}= {value:?}", field.name());
        Ok(value)
    }

    fn first_value(&self, (prefix, suffix): (&str, &str)) -> Option<&str> {
        let value = self
            .lines
            .iter()
            .find_map(|line| delimited_value(line, prefix, suffix));
        trace!("{prefix:?} .. {suffix:?} => {value:?}");
        value
    }
}

fn pattern_not_found((prefix, suffix): (&str, &str)) -> Error {
    Error::PatternNotFound {
        prefix: prefix.to_string(),
        suffix: suffix.to_string(),
    }
}
