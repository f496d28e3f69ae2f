// crate modules
use crate::error::{Error, Result};

// swtools modules
use swtools_utils::{StringExt, Time, TimeUnit};

// standard library
use std::collections::BTreeMap;

// external crates
use serde::Serialize;

/// Task categories summarised by the scheduler report
///
/// Ordering follows the order the categories are reported in, which is also
/// the iteration order of a [SchedulerReport].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Drift,
    Sorts,
    Resort,
    Hydro,
    Gravity,
    Feedback,
    BlackHoles,
    Cooling,
    StarFormation,
    Limiter,
    Sync,
    TimeIntegration,
    Mpi,
    Fof,
    Others,
    Sink,
    DeadTime,
    Total,
}

impl Category {
    /// Every category, in report order
    pub const ALL: [Category; 18] = [
        Category::Drift,
        Category::Sorts,
        Category::Resort,
        Category::Hydro,
        Category::Gravity,
        Category::Feedback,
        Category::BlackHoles,
        Category::Cooling,
        Category::StarFormation,
        Category::Limiter,
        Category::Sync,
        Category::TimeIntegration,
        Category::Mpi,
        Category::Fof,
        Category::Others,
        Category::Sink,
        Category::DeadTime,
        Category::Total,
    ];

    /// Name exactly as written in the log, e.g. "black holes"
    pub fn name(&self) -> &'static str {
        match self {
            Category::Drift => "drift",
            Category::Sorts => "sorts",
            Category::Resort => "resort",
            Category::Hydro => "hydro",
            Category::Gravity => "gravity",
            Category::Feedback => "feedback",
            Category::BlackHoles => "black holes",
            Category::Cooling => "cooling",
            Category::StarFormation => "star formation",
            Category::Limiter => "limiter",
            Category::Sync => "sync",
            Category::TimeIntegration => "time integration",
            Category::Mpi => "mpi",
            Category::Fof => "fof",
            Category::Others => "others",
            Category::Sink => "sink",
            Category::DeadTime => "dead time",
            Category::Total => "total",
        }
    }

    /// Structured field name, e.g. "black_holes"
    ///
    /// ```rust
    /// # use swtools_stdout::Category;
    /// assert_eq!(Category::BlackHoles.key(), "black_holes");
    /// assert_eq!(Category::Drift.key(), "drift");
    /// ```
    pub fn key(&self) -> String {
        self.name().to_field_name()
    }

    /// Find a category from either its log name or field name
    pub fn from_key(key: &str) -> Option<Category> {
        let key = key.to_field_name();
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Time spent per task category, one value per report emission
///
/// Values are the cumulative time across every thread on rank 0 since the
/// previous report. Use [SchedulerReport::per_thread] for an average per
/// thread.
///
/// Serialises as a map keyed by [Category::key].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct SchedulerReport {
    tasks: BTreeMap<Category, Vec<Time>>,
}

impl SchedulerReport {
    /// Set the full list of times for a category
    pub(crate) fn insert(&mut self, category: Category, times: Vec<Time>) {
        self.tasks.insert(category, times);
    }

    /// Times recorded for a category, if it is present in the report
    pub fn get(&self, category: Category) -> Option<&[Time]> {
        self.tasks.get(&category).map(Vec::as_slice)
    }

    /// Times recorded for a structured field name such as "dead_time"
    pub fn get_key(&self, key: &str) -> Option<&[Time]> {
        Category::from_key(key).and_then(|c| self.get(c))
    }

    /// Check if a category is present
    pub fn contains(&self, category: Category) -> bool {
        self.tasks.contains_key(&category)
    }

    /// Categories present, in report order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.tasks.keys().copied()
    }

    /// Structured field names of the categories present, in report order
    pub fn keys(&self) -> Vec<String> {
        self.tasks.keys().map(Category::key).collect()
    }

    /// Iterate over (category, times) pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Time])> + '_ {
        self.tasks.iter().map(|(c, t)| (*c, t.as_slice()))
    }

    /// Number of categories present
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True if no category is present
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Sum over all emissions for each category, in milliseconds
    pub fn totals(&self) -> BTreeMap<Category, Time> {
        self.tasks
            .iter()
            .map(|(c, t)| (*c, Time::total(t, TimeUnit::Millisecond)))
            .collect()
    }

    /// Average time per thread
    ///
    /// Every value is divided by `threads`, the number of threads on the rank
    /// that wrote the report.
    ///
    /// ```rust
    /// # use swtools_stdout::SchedulerReport;
    /// let report = SchedulerReport::default();
    /// assert!(report.per_thread(0).is_err());
    /// assert!(report.per_thread(4).is_ok());
    /// ```
    pub fn per_thread(&self, threads: u32) -> Result<SchedulerReport> {
        if threads == 0 {
            return Err(Error::InvalidThreadCount);
        }

        let threads = f64::from(threads);
        let tasks: BTreeMap<Category, Vec<Time>> = self
            .tasks
            .iter()
            .map(|(c, t)| (*c, t.iter().map(|time| *time / threads).collect()))
            .collect();

        Ok(SchedulerReport { tasks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keys() {
        assert_eq!(Category::StarFormation.key(), "star_formation");
        assert_eq!(Category::from_key("dead time"), Some(Category::DeadTime));
        assert_eq!(Category::from_key("dead_time"), Some(Category::DeadTime));
        assert_eq!(Category::from_key("unknown"), None);
    }

    #[test]
    fn report_order_follows_category_list() {
        let mut report = SchedulerReport::default();
        report.insert(Category::Total, vec![Time::ms(3.0)]);
        report.insert(Category::Drift, vec![Time::ms(1.0)]);
        report.insert(Category::BlackHoles, vec![Time::ms(2.0)]);
        assert_eq!(report.keys(), vec!["drift", "black_holes", "total"]);
    }

    #[test]
    fn per_thread_divides_every_value() {
        let mut report = SchedulerReport::default();
        report.insert(Category::Hydro, vec![Time::ms(8.0), Time::ms(4.0)]);

        let averaged = report.per_thread(4).unwrap();
        assert_eq!(
            averaged.get(Category::Hydro),
            Some([Time::ms(2.0), Time::ms(1.0)].as_slice())
        );
    }

    #[test]
    fn totals_sum_each_category() {
        let mut report = SchedulerReport::default();
        report.insert(Category::Mpi, vec![Time::ms(1.5), Time::ms(2.5)]);
        assert_eq!(report.totals()[&Category::Mpi], Time::ms(4.0));
    }
}
