//! Everything worth knowing about a run, collected from its log

// standard library
use std::collections::BTreeMap;
use std::fmt::Display;

// swtools modules
use swtools_stdout::{Category, ColumnMap, Error, Result, Stdout, Timesteps};
use swtools_utils::{f, OptionExt, StringExt, Time, TimeUnit, ValueExt};

// external crates
use itertools::Itertools;
use log::{debug, warn};
use serde::Serialize;

/// Width of the label column in the text summary
const LABEL_WIDTH: usize = 30;

/// Choices that change what is collected from the log
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Number of banner lines before the step table
    pub header_lines: usize,
    /// Layout of the step table rows
    pub columns: ColumnMap,
    /// Drop scheduler values that round to zero
    pub compact: bool,
    /// Average scheduler times over the threads of a rank
    pub per_thread: bool,
    /// Step that clean steps are compared against
    pub reference_step: u32,
    /// Unit for every reported time
    pub unit: TimeUnit,
}

/// One-off values declared by the run, `None` where the log has no such line
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scalars {
    pub num_particles: Option<u64>,
    pub num_ranks: Option<u32>,
    pub threads_per_rank: Option<u32>,
    pub num_top_level_cells: Option<u64>,
    pub ic_loading_time: Option<Time>,
}

impl Scalars {
    /// Read every scalar field, tolerating the ones that are missing
    ///
    /// Any failure other than a missing line is still an error.
    pub fn collect(stdout: &Stdout, unit: TimeUnit) -> Result<Self> {
        Ok(Self {
            num_particles: optional(stdout.num_particles())?,
            num_ranks: optional(stdout.num_ranks())?,
            threads_per_rank: optional(stdout.threads_per_rank())?,
            num_top_level_cells: optional(stdout.num_top_level_cells())?,
            ic_loading_time: optional(stdout.ic_loading_time())?.map(|t| t.to(unit)),
        })
    }
}

/// Totals over the step table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepSummary {
    pub count: usize,
    pub final_step: u32,
    pub total_duration: Time,
    pub total_updates: u64,
    pub reference_step: u32,
    pub clean_steps: Vec<u32>,
    pub clean_duration: Time,
}

impl StepSummary {
    pub fn new(steps: &Timesteps, reference_step: u32, unit: TimeUnit) -> Self {
        let clean = steps.clean_steps(reference_step);
        Self {
            count: steps.len(),
            final_step: steps.final_step(),
            total_duration: steps.total_duration().to(unit),
            total_updates: steps.total_updates(),
            reference_step,
            clean_steps: clean.iter().map(|r| r.step).collect(),
            clean_duration: Time::total(clean.iter().map(|r| &r.duration), unit),
        }
    }
}

/// Total time per task category over every scheduler report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchedulerSummary {
    pub per_thread: bool,
    pub totals: BTreeMap<Category, Time>,
}

/// Full summary of a run log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub log: String,
    pub scalars: Scalars,
    pub steps: StepSummary,
    pub scheduler: SchedulerSummary,
}

impl RunSummary {
    /// Collect everything from a log already read into memory
    pub fn collect(log: &str, stdout: &Stdout, options: &Options) -> Result<Self> {
        debug!("Collecting summary with {options:?}");

        let scalars = Scalars::collect(stdout, options.unit)?;

        let steps = stdout.parse_timesteps_with(options.header_lines, &options.columns)?;
        let steps = StepSummary::new(&steps, options.reference_step, options.unit);

        let report = match options.per_thread {
            true => stdout.scheduler_report_per_thread(options.compact)?,
            false => stdout.scheduler_report_task_times(options.compact)?,
        };
        let totals = report
            .totals()
            .into_iter()
            .map(|(category, time)| (category, time.to(options.unit)))
            .collect();

        Ok(Self {
            log: log.to_string(),
            scalars,
            steps,
            scheduler: SchedulerSummary {
                per_thread: options.per_thread,
                totals,
            },
        })
    }

    /// Plain text summary for the terminal
    pub fn table(&self) -> String {
        let mut s = f!("Run summary for {}\n", self.log);
        s += &"-".repeat(LABEL_WIDTH + 20);
        s += "\n";

        let scalars = &self.scalars;
        s += &row("Particles", scalars.num_particles.map(count).display());
        s += &row("MPI ranks", scalars.num_ranks.display());
        s += &row("Threads per rank", scalars.threads_per_rank.display());
        s += &row("Top-level cells", scalars.num_top_level_cells.display());
        s += &row("IC loading time", scalars.ic_loading_time.map(time).display());

        let steps = &self.steps;
        s += "\nStep table\n";
        s += &row("Steps", f!("{} (final step {})", steps.count, steps.final_step));
        s += &row("Total duration", time(steps.total_duration));
        s += &row("Total updates", count(steps.total_updates));
        s += &row(
            &f!("Clean steps (vs step {})", steps.reference_step),
            clean_list(&steps.clean_steps),
        );
        s += &row("Clean step duration", time(steps.clean_duration));

        s += match self.scheduler.per_thread {
            true => "\nScheduler totals (per thread)\n",
            false => "\nScheduler totals (all threads)\n",
        };
        if self.scheduler.totals.is_empty() {
            s += &row("No scheduler reports", "");
        }
        for (category, total) in &self.scheduler.totals {
            s += &row(&category.name().capitalise(), time(*total));
        }

        s
    }
}

/// Treat a missing line as an absent value
fn optional<T>(value: Result<T>) -> Result<Option<T>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(Error::PatternNotFound { prefix, .. }) => {
            warn!("No line starting with {prefix:?}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn row(label: &str, value: impl Display) -> String {
    f!("  {label:<LABEL_WIDTH$}{value}\n")
}

fn count(n: u64) -> String {
    (n as f64).sci(5, 2)
}

fn time(t: Time) -> String {
    f!("{t:.2}")
}

fn clean_list(steps: &[u32]) -> String {
    match steps.is_empty() {
        true => "none".to_string(),
        false => steps.iter().join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const LOG: &str = "\
main: Running on 4096 gas particles
main: MPI is up and running with 2 node(s)
main: Reading initial conditions took 1500.000 ms
   Step  Time  Scale-factor
     0 0.0 1.0 0.0 0.1 43 56 4096 0 0 0 0 250.000 1
     1 0.1 1.0 0.0 0.1 43 56 1024 0 0 0 0 100.000 0
     2 0.2 1.0 0.0 0.1 43 56 1024 0 0 0 0 150.000 0
scheduler_report_task_times: drift: 12.25 ms hydro: 0.00 ms
scheduler_report_task_times: drift: 7.75 ms hydro: 1.50 ms
";

    #[fixture]
    fn stdout() -> Stdout {
        Stdout::from_reader(LOG.as_bytes()).unwrap()
    }

    #[fixture]
    fn options() -> Options {
        Options {
            header_lines: 4,
            columns: ColumnMap::V2,
            compact: true,
            per_thread: false,
            reference_step: 1,
            unit: TimeUnit::Millisecond,
        }
    }

    #[rstest]
    fn missing_scalars_are_none(stdout: Stdout) {
        let scalars = Scalars::collect(&stdout, TimeUnit::Second).unwrap();
        assert_eq!(scalars.num_particles, Some(4096));
        assert_eq!(scalars.num_ranks, Some(2));
        assert_eq!(scalars.threads_per_rank, None);
        assert_eq!(scalars.num_top_level_cells, None);
        assert_eq!(
            scalars.ic_loading_time,
            Some(Time::new(1.5, TimeUnit::Second))
        );
    }

    #[rstest]
    fn step_totals(stdout: Stdout, options: Options) {
        let summary = RunSummary::collect("test.log", &stdout, &options).unwrap();
        assert_eq!(summary.steps.count, 3);
        assert_eq!(summary.steps.final_step, 2);
        assert_eq!(summary.steps.total_duration, Time::ms(500.0));
        assert_eq!(summary.steps.total_updates, 6144);
        assert_eq!(summary.steps.clean_steps, vec![1, 2]);
        assert_eq!(summary.steps.clean_duration, Time::ms(250.0));
    }

    #[rstest]
    fn scheduler_totals(stdout: Stdout, options: Options) {
        // compact, so only the categories with time spent are left
        let summary = RunSummary::collect("test.log", &stdout, &options).unwrap();
        let totals = &summary.scheduler.totals;
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&Category::Drift], Time::ms(20.0));
        assert_eq!(totals[&Category::Hydro], Time::ms(1.5));
    }

    #[rstest]
    fn per_thread_needs_threads(stdout: Stdout, mut options: Options) {
        options.per_thread = true;
        let err = RunSummary::collect("test.log", &stdout, &options).unwrap_err();
        assert!(matches!(err, Error::PatternNotFound { .. }));
    }

    #[rstest]
    fn text_table(stdout: Stdout, options: Options) {
        let table = RunSummary::collect("test.log", &stdout, &options)
            .unwrap()
            .table();

        assert!(table.starts_with("Run summary for test.log\n"));
        assert!(table.contains(&row("Particles", "4.09600e+03")));
        assert!(table.contains(&row("Threads per rank", "none")));
        assert!(table.contains(&row("Clean steps (vs step 1)", "1, 2")));
        assert!(table.contains(&row("Total duration", "500.00 ms")));
        assert!(table.contains(&row("Drift", "20.00 ms")));
        assert!(table.contains("(all threads)"));
    }

    #[rstest]
    fn json_keys(stdout: Stdout, options: Options) {
        let summary = RunSummary::collect("test.log", &stdout, &options).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["scalars"]["num_particles"], 4096);
        assert!(json["scalars"]["threads_per_rank"].is_null());
        assert_eq!(json["steps"]["clean_steps"], serde_json::json!([1, 2]));
        assert_eq!(json["scheduler"]["totals"]["drift"]["value"], 20.0);
        assert_eq!(json["scheduler"]["totals"]["drift"]["unit"], "millisecond");
    }
}
