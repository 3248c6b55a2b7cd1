//! Clock time model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::time_span::{TimeSpan, split_hh_mm};
use crate::error::{EngineError, EngineResult};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute precision, from 00:00 to 23:59.
///
/// Clock times are ordered chronologically and serialize as `"HH:MM"`.
///
/// # Example
///
/// ```
/// use timesheet_checker::models::{ClockTime, TimeSpan};
///
/// let start = ClockTime::new(8, 0).unwrap();
/// let end = ClockTime::new(18, 45).unwrap();
/// assert!(start < end);
/// assert_eq!(start.span_until(end).unwrap(), TimeSpan::new(10, 45).unwrap());
/// assert!(ClockTime::new(24, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Midnight at the start of a day.
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// Creates a clock time.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidClockTime`] if `hour` is not in 0..=23 or
    /// `minute` is not in 0..=59.
    pub fn new(hour: u32, minute: u32) -> EngineResult<Self> {
        match (u8::try_from(hour), u8::try_from(minute)) {
            (Ok(h), Ok(m)) if h < 24 && m < 60 => Ok(Self { hour: h, minute: m }),
            _ => Err(EngineError::InvalidClockTime { hour, minute }),
        }
    }

    /// Creates a clock time in a constant context.
    ///
    /// # Panics
    ///
    /// Panics if `hour` is not in 0..=23 or `minute` is not in 0..=59; in a
    /// `const` item this is a compile error.
    pub const fn from_hm(hour: u8, minute: u8) -> Self {
        assert!(hour < 24 && minute < 60, "clock time out of range");
        Self { hour, minute }
    }

    /// Returns the hour (0..=23).
    pub const fn hour(&self) -> u32 {
        self.hour as u32
    }

    /// Returns the minute (0..=59).
    pub const fn minute(&self) -> u32 {
        self.minute as u32
    }

    /// Returns the span elapsed since midnight.
    pub const fn since_midnight(&self) -> TimeSpan {
        TimeSpan::from_minutes(self.hour as u32 * 60 + self.minute as u32)
    }

    /// Returns the span from this clock time until `end` on the same day.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TimeSpanUnderflow`] if `end` is earlier than `self`.
    pub fn span_until(self, end: ClockTime) -> EngineResult<TimeSpan> {
        end.since_midnight().checked_sub(self.since_midnight())
    }

    /// Returns the clock time `span` later on the same day.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidClockTime`] if the result would pass 23:59,
    /// or [`EngineError::TimeSpanOverflow`] if `span` is too large to add at all.
    pub fn checked_add(self, span: TimeSpan) -> EngineResult<ClockTime> {
        let total = self.since_midnight().checked_add(span)?.total_minutes();
        if total >= MINUTES_PER_DAY {
            return Err(EngineError::InvalidClockTime {
                hour: total / 60,
                minute: total % 60,
            });
        }
        ClockTime::new(total / 60, total % 60)
    }

    /// Returns the clock time `span` earlier on the same day.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TimeSpanUnderflow`] if the result would be before 00:00.
    pub fn checked_sub(self, span: TimeSpan) -> EngineResult<ClockTime> {
        let total = self.since_midnight().checked_sub(span)?.total_minutes();
        ClockTime::new(total / 60, total % 60)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = split_hh_mm(s)?;
        ClockTime::new(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}
