// swtools modules
use swtools_utils::{Time, TimeUnit};

// external crates
use serde::Serialize;

/// A single complete row of a timesteps file
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelineRow {
    /// Simulation time at the end of the step, in internal units
    pub sim_time: f64,
    /// Number of particle updates in the step
    pub updates: u64,
    /// Wall-clock duration of the step
    pub wallclock: Time,
}

/// Every complete row of a timesteps file, in file order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    pub(crate) rows: Vec<TimelineRow>,
}

impl Timeline {
    /// Rows in file order
    pub fn rows(&self) -> &[TimelineRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no complete rows were found
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Simulation time of every row
    pub fn sim_times(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.sim_time).collect()
    }

    /// Running total of the wall-clock time, in milliseconds
    ///
    /// ```rust
    /// # use swtools_timesteps::{Timeline, TimelineRow};
    /// # use swtools_utils::Time;
    /// let row = |ms| TimelineRow { sim_time: 0.0, updates: 1, wallclock: Time::ms(ms) };
    /// let timeline = Timeline::from(vec![row(1.0), row(2.0), row(3.0)]);
    ///
    /// let cumulative: Vec<f64> = timeline
    ///     .cumulative_wallclock()
    ///     .iter()
    ///     .map(|t| t.value)
    ///     .collect();
    /// assert_eq!(cumulative, vec![1.0, 3.0, 6.0]);
    /// ```
    pub fn cumulative_wallclock(&self) -> Vec<Time> {
        self.rows
            .iter()
            .scan(Time::zero(TimeUnit::Millisecond), |total, row| {
                *total = *total + row.wallclock;
                Some(*total)
            })
            .collect()
    }

    /// Total wall-clock time of every row, in milliseconds
    pub fn total_wallclock(&self) -> Time {
        Time::total(self.rows.iter().map(|r| &r.wallclock), TimeUnit::Millisecond)
    }

    /// Total wall-clock time in hours
    pub fn time_to_solution(&self) -> Time {
        self.total_wallclock().to(TimeUnit::Hour)
    }

    /// Simulation time reached by the final row
    pub fn final_sim_time(&self) -> Option<f64> {
        self.rows.last().map(|r| r.sim_time)
    }

    /// Cumulative wall-clock time at the last row not beyond `sim_time`
    ///
    /// `None` if the first row is already past `sim_time`.
    ///
    /// ```rust
    /// # use swtools_timesteps::{Timeline, TimelineRow};
    /// # use swtools_utils::Time;
    /// let row = |sim_time| TimelineRow { sim_time, updates: 1, wallclock: Time::ms(10.0) };
    /// let timeline = Timeline::from(vec![row(0.5), row(1.0), row(1.5)]);
    ///
    /// assert_eq!(timeline.wallclock_at(1.2), Some(Time::ms(20.0)));
    /// assert_eq!(timeline.wallclock_at(1.5), Some(Time::ms(30.0)));
    /// assert_eq!(timeline.wallclock_at(0.1), None);
    /// ```
    pub fn wallclock_at(&self, sim_time: f64) -> Option<Time> {
        self.rows
            .iter()
            .zip(self.cumulative_wallclock())
            .filter(|(row, _)| row.sim_time <= sim_time)
            .map(|(_, wallclock)| wallclock)
            .last()
    }

    /// Sum of every particle update
    pub fn total_updates(&self) -> u64 {
        self.rows.iter().map(|r| r.updates).sum()
    }
}

impl From<Vec<TimelineRow>> for Timeline {
    fn from(rows: Vec<TimelineRow>) -> Self {
        Self { rows }
    }
}
