// internal
use crate::core::{Category, SchedulerReport};
use crate::error::{Error, Result};
use crate::parsers::*;
use crate::stdout::Stdout;

// swtools
use swtools_utils::{f, Time};

// external
use log::{debug, trace};

// ! Scheduler reports
impl Stdout {
    /// Collect the time spent per task category from every scheduler report
    ///
    /// Each category keeps one value per report line that mentions it, in file
    /// order. With `compact` set, values that round to zero at two decimal
    /// places are dropped and categories left with nothing are removed.
    ///
    /// Values are totals over every thread of rank 0, see
    /// [scheduler_report_per_thread](Stdout::scheduler_report_per_thread) for
    /// per-thread averages.
    ///
    /// ```rust
    /// # use swtools_stdout::{Category, Stdout};
    /// # use swtools_utils::Time;
    /// let log = "scheduler_report_task_times: drift: 12.34 ms hydro: 0.00 ms\n";
    /// let stdout = Stdout::from_reader(log.as_bytes()).unwrap();
    ///
    /// let report = stdout.scheduler_report_task_times(true).unwrap();
    /// assert_eq!(report.get(Category::Drift), Some([Time::ms(12.34)].as_slice()));
    /// assert!(!report.contains(Category::Hydro));
    /// ```
    pub fn scheduler_report_task_times(&self, compact: bool) -> Result<SchedulerReport> {
        debug!("-------------------------");
        debug!(" Parsing scheduler report ");
        debug!("-------------------------");

        let mut report = SchedulerReport::default();
        for category in Category::ALL {
            let times = self.category_times(category, compact)?;
            debug!("{:<18}= {} values", category.key(), times.len());

            if compact && times.is_empty() {
                continue;
            }
            report.insert(category, times);
        }

        Ok(report)
    }

    /// Scheduler report averaged over the threads of each rank
    ///
    /// Combines [scheduler_report_task_times](Stdout::scheduler_report_task_times)
    /// with [threads_per_rank](Stdout::threads_per_rank), which must be
    /// present in the log.
    pub fn scheduler_report_per_thread(&self, compact: bool) -> Result<SchedulerReport> {
        let threads = self.threads_per_rank()?;
        self.scheduler_report_task_times(compact)?.per_thread(threads)
    }

    fn category_times(&self, category: Category, compact: bool) -> Result<Vec<Time>> {
        let name = category.name();
        let prefix = f!("{name}:");

        let mut times = Vec::new();
        for line in self.lines.iter() {
            if !(is_scheduler_report(line) && line.contains(name)) {
                continue;
            }

            // the name can show up without being a "<name>: <value> ms" entry
            let Some(text) = delimited_value(line, &prefix, "ms") else {
                trace!("No {prefix:?} entry in {line:?}");
                continue;
            };

            let (_, value) = whole_decimal(text).map_err(|_| Error::FormatError {
                category: name.to_string(),
                text: text.to_string(),
            })?;

            if compact && is_zero_to_two_places(value) {
                continue;
            }
            times.push(Time::ms(value));
        }

        Ok(times)
    }
}

/// Matches rounding to 2 decimal places and comparing with zero
fn is_zero_to_two_places(value: f64) -> bool {
    (value * 100.0).round() == 0.0
}
