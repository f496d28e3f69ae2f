// crate modules
use crate::error::{Error, IntegrityError};

// swtools modules
use swtools_utils::{Time, TimeUnit};

// external crates
use serde::Serialize;

/// One row of the console step table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimestepRecord {
    /// Step index, counting from 0
    pub step: u32,
    /// Number of particle updates in the step
    pub updates: u64,
    /// Wall-clock duration of the step
    pub duration: Time,
    /// Status/property flag, only in newer log formats
    pub status: Option<u32>,
}

impl TimestepRecord {
    /// No irregular event flagged for the step
    ///
    /// Logs without a status column cannot flag anything, so a missing status
    /// counts as regular.
    pub fn is_regular(&self) -> bool {
        self.status.map_or(true, |status| status == 0)
    }
}

/// Complete, contiguous step table of a run
///
/// Can only be built from a list of records that holds every step from 0 to
/// the final step exactly once and in order.
///
/// ```rust
/// # use swtools_stdout::{Timesteps, TimestepRecord};
/// # use swtools_utils::Time;
/// let record = |step| TimestepRecord {
///     step,
///     updates: 64,
///     duration: Time::ms(1.5),
///     status: Some(0),
/// };
///
/// assert!(Timesteps::try_from(vec![record(0), record(1)]).is_ok());
/// assert!(Timesteps::try_from(vec![record(0), record(2)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Timesteps {
    records: Vec<TimestepRecord>,
}

impl Timesteps {
    /// Records in step order
    pub fn records(&self) -> &[TimestepRecord] {
        &self.records
    }

    /// Iterate over records in step order
    pub fn iter(&self) -> std::slice::Iter<'_, TimestepRecord> {
        self.records.iter()
    }

    /// Number of steps, always the final step index + 1
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Never true for a successfully parsed table, provided for completeness
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record for a given step, if it exists
    pub fn get(&self, step: u32) -> Option<&TimestepRecord> {
        self.records.get(step as usize)
    }

    /// Index of the final step
    pub fn final_step(&self) -> u32 {
        self.records.last().map_or(0, |r| r.step)
    }

    /// Sum of every step duration in milliseconds
    pub fn total_duration(&self) -> Time {
        Time::total(self.records.iter().map(|r| &r.duration), TimeUnit::Millisecond)
    }

    /// Sum of every particle update
    pub fn total_updates(&self) -> u64 {
        self.records.iter().map(|r| r.updates).sum()
    }

    /// Steps comparable with a reference step for timing analysis
    ///
    /// A clean step has no irregular event flagged and performs exactly as
    /// many particle updates as the `reference` step. Returns an empty list if
    /// the reference step does not exist.
    pub fn clean_steps(&self, reference: u32) -> Vec<&TimestepRecord> {
        let Some(target) = self.get(reference) else {
            return Vec::new();
        };

        self.records
            .iter()
            .filter(|r| r.is_regular() && r.updates == target.updates)
            .collect()
    }
}

impl TryFrom<Vec<TimestepRecord>> for Timesteps {
    type Error = Error;

    /// Validate the density of the step indices
    ///
    /// This will fail on an empty list, a length that does not match the
    /// final step, or any step found out of place.
    fn try_from(records: Vec<TimestepRecord>) -> Result<Self, Self::Error> {
        let last = records.last().ok_or(IntegrityError::NoSteps)?.step;

        if records.len() != last as usize + 1 {
            return Err(IntegrityError::UnexpectedLength {
                rows: records.len(),
                last,
            }
            .into());
        }

        // length alone would let duplicates cancel out gaps
        if let Some((row, record)) = records
            .iter()
            .enumerate()
            .find(|(i, r)| r.step as usize != *i)
        {
            return Err(IntegrityError::NonContiguous {
                row,
                found: record.step,
            }
            .into());
        }

        Ok(Self { records })
    }
}

impl<'a> IntoIterator for &'a Timesteps {
    type Item = &'a TimestepRecord;
    type IntoIter = std::slice::Iter<'a, TimestepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl std::ops::Index<usize> for Timesteps {
    type Output = TimestepRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(step: u32, updates: u64, status: Option<u32>) -> TimestepRecord {
        TimestepRecord {
            step,
            updates,
            duration: Time::ms(2.0),
            status,
        }
    }

    #[test]
    fn rejects_duplicates_hidden_by_length() {
        let records = vec![record(0, 1, None), record(2, 1, None), record(2, 1, None)];
        let err = Timesteps::try_from(records).unwrap_err();
        assert!(matches!(
            err,
            Error::Integrity(IntegrityError::NonContiguous { row: 1, found: 2 })
        ));
    }

    #[test]
    fn rejects_empty_table() {
        let err = Timesteps::try_from(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Integrity(IntegrityError::NoSteps)));
    }

    #[test]
    fn totals() {
        let steps =
            Timesteps::try_from(vec![record(0, 10, None), record(1, 20, None)]).unwrap();
        assert_eq!(steps.total_updates(), 30);
        assert_eq!(steps.total_duration(), Time::ms(4.0));
        assert_eq!(steps.final_step(), 1);
    }

    #[test]
    fn clean_steps_match_reference_updates() {
        let steps = Timesteps::try_from(vec![
            record(0, 100, Some(0)),
            record(1, 100, Some(0)),
            record(2, 100, Some(4)),
            record(3, 50, Some(0)),
            record(4, 100, None),
        ])
        .unwrap();

        let clean: Vec<u32> = steps.clean_steps(1).iter().map(|r| r.step).collect();
        assert_eq!(clean, vec![0, 1, 4]);
        assert!(steps.clean_steps(99).is_empty());
    }
}
