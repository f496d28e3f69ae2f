use crate::error::{Error, Result};
use crate::f;

// standard library
use std::fmt::Display;
use std::ops::{Add, Div};
use std::str::FromStr;

// external crates
use serde::Serialize;

/// Units of wall-clock time found in simulation outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Milliseconds, what SWIFT reports almost everything in
    #[default]
    Millisecond,
    /// Seconds
    Second,
    /// Hours, mostly for time-to-solution
    Hour,
}

impl TimeUnit {
    /// Number of milliseconds in one of this unit
    pub fn milliseconds(&self) -> f64 {
        match self {
            TimeUnit::Millisecond => 1.0,
            TimeUnit::Second => 1.0e3,
            TimeUnit::Hour => 3.6e6,
        }
    }

    /// Short unit label, e.g. "ms"
    pub fn abbreviation(&self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "ms",
            TimeUnit::Second => "s",
            TimeUnit::Hour => "hr",
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    /// Parse common abbreviations, case insensitive
    ///
    /// ```rust
    /// # use swtools_utils::TimeUnit;
    /// assert_eq!("ms".parse(), Ok(TimeUnit::Millisecond));
    /// assert_eq!("Hour".parse(), Ok(TimeUnit::Hour));
    /// assert!("fortnight".parse::<TimeUnit>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ms" | "millisecond" | "milliseconds" => Ok(TimeUnit::Millisecond),
            "s" | "sec" | "second" | "seconds" => Ok(TimeUnit::Second),
            "h" | "hr" | "hour" | "hours" => Ok(TimeUnit::Hour),
            _ => Err(Error::UnknownTimeUnit {
                unit: s.to_string(),
            }),
        }
    }
}

/// A duration tagged with its unit
///
/// Arithmetic between two [Time] values converts the right hand side into the
/// unit of the left hand side, so units never get silently mixed up.
///
/// ```rust
/// # use swtools_utils::{Time, TimeUnit};
/// let step = Time::ms(1800.0) + Time::new(1.2, TimeUnit::Second);
/// assert_eq!(step, Time::ms(3000.0));
/// assert_eq!(step.to(TimeUnit::Second).value, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct Time {
    /// Numerical value in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: TimeUnit,
}

impl Time {
    /// New [Time] of `value` in `unit`
    pub fn new(value: f64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    /// Shorthand for a value in milliseconds
    pub fn ms(value: f64) -> Self {
        Self::new(value, TimeUnit::Millisecond)
    }

    /// Zero time in the given unit
    pub fn zero(unit: TimeUnit) -> Self {
        Self::new(0.0, unit)
    }

    /// Convert to a different unit
    pub fn to(self, unit: TimeUnit) -> Self {
        Self::new(self.value_in(unit), unit)
    }

    /// Numerical value expressed in `unit`
    pub fn value_in(&self, unit: TimeUnit) -> f64 {
        if self.unit == unit {
            self.value
        } else {
            self.value * self.unit.milliseconds() / unit.milliseconds()
        }
    }

    /// Sum any number of times, expressed in `unit`
    ///
    /// ```rust
    /// # use swtools_utils::{Time, TimeUnit};
    /// let times = [Time::ms(500.0), Time::ms(1500.0)];
    /// assert_eq!(Time::total(&times, TimeUnit::Second), Time::new(2.0, TimeUnit::Second));
    /// ```
    pub fn total<'a, I>(times: I, unit: TimeUnit) -> Self
    where
        I: IntoIterator<Item = &'a Time>,
    {
        times
            .into_iter()
            .fold(Self::zero(unit), |total, time| total + *time)
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Self::Output {
        Time::new(self.value + rhs.value_in(self.unit), self.unit)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Self::Output {
        Time::new(self.value / rhs, self.unit)
    }
}

impl Display for Time {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match fmt.precision() {
            Some(p) => f!("{:.p$}", self.value),
            None => f!("{}", self.value),
        };
        write!(fmt, "{value} {}", self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_between_units() {
        let time = Time::ms(7_200_000.0);
        assert_eq!(time.to(TimeUnit::Hour), Time::new(2.0, TimeUnit::Hour));
        assert_eq!(time.value_in(TimeUnit::Second), 7200.0);
        assert_eq!(time.to(TimeUnit::Millisecond), time);
    }

    #[test]
    fn addition_keeps_left_unit() {
        let sum = Time::new(1.0, TimeUnit::Second) + Time::ms(250.0);
        assert_eq!(sum.unit, TimeUnit::Second);
        assert_eq!(sum.value, 1.25);
    }

    #[test]
    fn display_with_precision() {
        assert_eq!(f!("{:.2}", Time::ms(12.3456)), "12.35 ms");
        assert_eq!(f!("{}", Time::new(1.5, TimeUnit::Hour)), "1.5 hr");
    }

    #[test]
    fn total_of_nothing_is_zero() {
        let empty: Vec<Time> = Vec::new();
        assert_eq!(Time::total(&empty, TimeUnit::Hour), Time::zero(TimeUnit::Hour));
    }
}
