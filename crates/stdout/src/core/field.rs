/// One-off scalar values declared near the top of a run log
///
/// Every field is written once as `<prefix><value><suffix>` on a single line,
/// so the delimiter pairs below are all that is needed to find them. Changing
/// the wording of a log message is a change to this table only.
///
/// | Field              | Example line                                          |
/// | ------------------ | ----------------------------------------------------- |
/// | `NumParticles`     | `main: Running on 1048576 gas particles`              |
/// | `NumRanks`         | `main: MPI is up and running with 16 node(s)`         |
/// | `ThreadsPerRank`   | `main: Running with 28 thread(s) per rank`            |
/// | `NumTopLevelCells` | `space_init: Number of top-level cells: 512 (8x8x8)`  |
/// | `IcLoadingTime`    | `main: Reading initial conditions took 1432.781 ms`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    NumParticles,
    NumRanks,
    ThreadsPerRank,
    NumTopLevelCells,
    IcLoadingTime,
}

impl Field {
    /// Literal (prefix, suffix) substrings surrounding the value
    pub fn delimiters(&self) -> (&'static str, &'static str) {
        match self {
            Field::NumParticles => ("main: Running on", "gas"),
            Field::NumRanks => ("main: MPI is up and running with", "node"),
            Field::ThreadsPerRank => ("main: Running with", "thread"),
            Field::NumTopLevelCells => ("space_init: Number of top-level cells:", "("),
            Field::IcLoadingTime => ("main: Reading initial conditions took", "ms"),
        }
    }

    /// Readable name for error messages
    pub fn name(&self) -> &'static str {
        match self {
            Field::NumParticles => "number of particles",
            Field::NumRanks => "number of ranks",
            Field::ThreadsPerRank => "threads per rank",
            Field::NumTopLevelCells => "number of top-level cells",
            Field::IcLoadingTime => "initial conditions loading time",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
