// crate modules
use crate::error::{Error, Result};
use crate::timeline::Timeline;

// swtools modules
use swtools_utils::{Time, TimeUnit};

// external crates
use log::{debug, info};
use serde::Serialize;

/// Kind of scaling test a set of runs belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Scaling {
    /// Fixed problem size, more threads should mean proportionally less time
    Strong,
    /// Problem size grows with the threads, time should stay constant
    Weak,
}

/// Time to solution of one run in a scaling test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalingPoint {
    /// Total number of threads the run used
    pub threads: u32,
    /// Total wall-clock time of the run
    pub time_to_solution: Time,
}

/// Performance of a run relative to the baseline run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Speedup {
    /// Total number of threads the run used
    pub threads: u32,
    /// Baseline time to solution over this time to solution
    pub speedup: f64,
    /// Fraction of ideal scaling achieved, 1.0 is perfect
    pub efficiency: f64,
}

/// Compare runs against the one with the fewest threads
///
/// Results are sorted by thread count. The baseline always has a speedup and
/// efficiency of exactly 1.
///
/// - Strong scaling efficiency is the speedup scaled by the thread ratio
/// - Weak scaling efficiency is the speedup itself
///
/// ```rust
/// # use swtools_timesteps::{speedup, Scaling, ScalingPoint};
/// # use swtools_utils::{Time, TimeUnit};
/// let point = |threads, hours| ScalingPoint {
///     threads,
///     time_to_solution: Time::new(hours, TimeUnit::Hour),
/// };
///
/// let results = speedup(&[point(16, 0.5), point(4, 2.0)], Scaling::Strong).unwrap();
/// assert_eq!(results[0].threads, 4);
/// assert_eq!(results[1].speedup, 4.0);
/// assert_eq!(results[1].efficiency, 1.0);
/// ```
pub fn speedup(points: &[ScalingPoint], scaling: Scaling) -> Result<Vec<Speedup>> {
    let mut points = points.to_vec();
    points.sort_by_key(|p| p.threads);

    let baseline = *points.first().ok_or(Error::NoScalingPoints)?;
    if let Some(p) = points.iter().find(|p| p.time_to_solution.value == 0.0) {
        return Err(Error::ZeroTimeToSolution { threads: p.threads });
    }
    debug!("Baseline    = {baseline:?}");

    let base_time = baseline.time_to_solution.value_in(TimeUnit::Millisecond);
    let results = points
        .iter()
        .map(|p| {
            let speedup = base_time / p.time_to_solution.value_in(TimeUnit::Millisecond);
            let efficiency = match scaling {
                Scaling::Strong => speedup * f64::from(baseline.threads) / f64::from(p.threads),
                Scaling::Weak => speedup,
            };
            Speedup {
                threads: p.threads,
                speedup,
                efficiency,
            }
        })
        .collect();

    Ok(results)
}

/// Time to solution of every run, cut at the sim time the slowest run reached
///
/// Runs stopped by a wall-clock limit rarely finish at the same simulation
/// time. Each run is measured up to its last row at or before the smallest
/// final simulation time of all runs, so every point covers the same work.
///
/// ```rust
/// # use swtools_timesteps::{normalised_points, Timeline, TimelineRow};
/// # use swtools_utils::{Time, TimeUnit};
/// let timeline = |n: u32| {
///     let rows = (1..=n)
///         .map(|i| TimelineRow { sim_time: f64::from(i), updates: 1, wallclock: Time::ms(1800.0) })
///         .collect::<Vec<_>>();
///     Timeline::from(rows)
/// };
///
/// let points = normalised_points(&[(1, timeline(4)), (4, timeline(2))]).unwrap();
/// assert_eq!(points[0].time_to_solution, Time::ms(3600.0).to(TimeUnit::Hour));
/// ```
pub fn normalised_points(runs: &[(u32, Timeline)]) -> Result<Vec<ScalingPoint>> {
    let slowest = runs
        .iter()
        .filter_map(|(_, timeline)| timeline.final_sim_time())
        .min_by(f64::total_cmp)
        .ok_or(Error::NoScalingPoints)?;
    info!("Normalising runs to sim time {slowest}");

    runs.iter()
        .map(|(threads, timeline)| -> Result<ScalingPoint> {
            let wallclock = timeline
                .wallclock_at(slowest)
                .ok_or(Error::SimTimeNotReached {
                    threads: *threads,
                    sim_time: slowest,
                })?;
            Ok(ScalingPoint {
                threads: *threads,
                time_to_solution: wallclock.to(TimeUnit::Hour),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::TimelineRow;
    use rstest::rstest;

    fn timeline(sim_times: &[f64], ms: f64) -> Timeline {
        let rows = sim_times
            .iter()
            .map(|&sim_time| TimelineRow {
                sim_time,
                updates: 64,
                wallclock: Time::ms(ms),
            })
            .collect::<Vec<TimelineRow>>();
        Timeline::from(rows)
    }

    fn point(threads: u32, ms: f64) -> ScalingPoint {
        ScalingPoint {
            threads,
            time_to_solution: Time::ms(ms),
        }
    }

    #[test]
    fn baseline_is_unity() {
        let results = speedup(&[point(8, 100.0), point(2, 400.0)], Scaling::Weak).unwrap();
        assert_eq!(results[0].threads, 2);
        assert_eq!(results[0].speedup, 1.0);
        assert_eq!(results[0].efficiency, 1.0);
    }

    #[test]
    fn weak_efficiency_is_speedup() {
        let results = speedup(&[point(1, 100.0), point(8, 125.0)], Scaling::Weak).unwrap();
        assert_eq!(results[1].speedup, 0.8);
        assert_eq!(results[1].efficiency, 0.8);
    }

    #[test]
    fn invalid_inputs() {
        assert!(matches!(
            speedup(&[], Scaling::Strong),
            Err(Error::NoScalingPoints)
        ));
        assert!(matches!(
            speedup(&[point(1, 10.0), point(2, 0.0)], Scaling::Strong),
            Err(Error::ZeroTimeToSolution { threads: 2 })
        ));
    }

    #[rstest]
    #[case(&[0.5, 1.0, 1.5, 2.0], &[0.5, 1.0], 1.0)] // case 1
    #[case(&[0.5, 1.0], &[0.5, 1.0, 1.5, 2.0], 1.0)] // case 2
    #[case(&[0.5, 1.0, 1.5], &[0.25, 1.2], 1.2)] // case 3
    fn cut_at_slowest_run(#[case] a: &[f64], #[case] b: &[f64], #[case] slowest: f64) {
        let runs = [(1, timeline(a, 100.0)), (2, timeline(b, 100.0))];
        let points = normalised_points(&runs).unwrap();

        // both runs measured over the rows at or before the common sim time
        for (point, (_, run)) in points.iter().zip(&runs) {
            let rows = run.rows().iter().filter(|r| r.sim_time <= slowest).count();
            let expected = Time::ms(100.0 * rows as f64).to(TimeUnit::Hour);
            assert_eq!(point.time_to_solution, expected);
        }
    }

    #[test]
    fn normalised_weak_scaling() {
        // the longer run stops being compared once the shorter one ended
        let runs = [
            (1, timeline(&[1.0, 2.0, 3.0, 4.0], 900.0)),
            (4, timeline(&[1.0, 2.0], 1800.0)),
        ];
        let points = normalised_points(&runs).unwrap();
        let results = speedup(&points, Scaling::Weak).unwrap();
        assert!((results[1].speedup - 0.5).abs() < 1e-12);
    }

    #[test]
    fn unreachable_sim_time() {
        let runs = [(1, timeline(&[1.0, 2.0], 1.0)), (2, timeline(&[3.0], 1.0))];
        assert!(matches!(
            normalised_points(&runs),
            Err(Error::SimTimeNotReached { threads: 2, .. })
        ));
        assert!(matches!(
            normalised_points(&[]),
            Err(Error::NoScalingPoints)
        ));
    }
}
