//! Timesheet entry model.
//!
//! An [`Entry`] is one row of a monthly timesheet: a block of work (or
//! vacation) on a single calendar date with start, end and pause.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::{ClockTime, TimeSpan};
use crate::error::{EngineError, EngineResult};

/// Represents a single work entry on a timesheet.
///
/// Entries are validated on construction: the end must lie strictly after the
/// start and the pause must fit into the interval between them. Deserialization
/// goes through the same checks.
///
/// The pause is tracked separately and is *not* part of
/// [`working_time`](Entry::working_time), so pause rules can be checked against
/// the whole worked interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryRecord", into = "EntryRecord")]
pub struct Entry {
    description: String,
    date: NaiveDate,
    start: ClockTime,
    end: ClockTime,
    pause: TimeSpan,
    vacation: bool,
}

/// Unvalidated wire form of an [`Entry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryRecord {
    #[serde(rename = "action")]
    description: String,
    #[serde(rename = "day")]
    date: NaiveDate,
    start: ClockTime,
    end: ClockTime,
    #[serde(default)]
    pause: TimeSpan,
    #[serde(default)]
    vacation: bool,
}

impl Entry {
    /// Creates a validated entry.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntry`] if `end <= start` or if the pause
    /// is longer than `end - start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_checker::models::{ClockTime, Entry, TimeSpan};
    /// use chrono::NaiveDate;
    ///
    /// let entry = Entry::new(
    ///     "Tutorium",
    ///     NaiveDate::from_ymd_opt(2019, 11, 22).unwrap(),
    ///     ClockTime::new(8, 0).unwrap(),
    ///     ClockTime::new(18, 45).unwrap(),
    ///     TimeSpan::new(0, 45).unwrap(),
    ///     false,
    /// )
    /// .unwrap();
    /// assert_eq!(entry.working_time(), TimeSpan::new(10, 45).unwrap());
    /// assert_eq!(entry.net_working_time(), TimeSpan::new(10, 0).unwrap());
    ///
    /// let reversed = Entry::new(
    ///     "Tutorium",
    ///     NaiveDate::from_ymd_opt(2019, 11, 22).unwrap(),
    ///     ClockTime::new(12, 0).unwrap(),
    ///     ClockTime::new(12, 0).unwrap(),
    ///     TimeSpan::ZERO,
    ///     false,
    /// );
    /// assert!(reversed.is_err());
    /// ```
    pub fn new(
        description: impl Into<String>,
        date: NaiveDate,
        start: ClockTime,
        end: ClockTime,
        pause: TimeSpan,
        vacation: bool,
    ) -> EngineResult<Self> {
        let description = description.into();

        if end <= start {
            return Err(EngineError::InvalidEntry {
                description,
                message: format!("end {} must be after start {}", end, start),
            });
        }

        let interval = start.span_until(end)?;
        if pause > interval {
            return Err(EngineError::InvalidEntry {
                description,
                message: format!("pause {} exceeds worked interval {}", pause, interval),
            });
        }

        Ok(Self {
            description,
            date,
            start,
            end,
            pause,
            vacation,
        })
    }

    /// Returns the description of the activity.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the calendar date of the entry.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the start time.
    pub fn start(&self) -> ClockTime {
        self.start
    }

    /// Returns the end time.
    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Returns the pause taken during the entry.
    pub fn pause(&self) -> TimeSpan {
        self.pause
    }

    /// Returns true if the entry records vacation rather than work.
    pub fn is_vacation(&self) -> bool {
        self.vacation
    }

    /// Returns the worked interval `end - start`, pause included.
    pub fn working_time(&self) -> TimeSpan {
        TimeSpan::from_minutes(
            self.end.since_midnight().total_minutes() - self.start.since_midnight().total_minutes(),
        )
    }

    /// Returns the worked interval minus the pause.
    pub fn net_working_time(&self) -> TimeSpan {
        TimeSpan::from_minutes(self.working_time().total_minutes() - self.pause.total_minutes())
    }

    /// Returns the day of the week of the entry.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}

impl TryFrom<EntryRecord> for Entry {
    type Error = EngineError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        Entry::new(
            record.description,
            record.date,
            record.start,
            record.end,
            record.pause,
            record.vacation,
        )
    }
}

impl From<Entry> for EntryRecord {
    fn from(entry: Entry) -> Self {
        EntryRecord {
            description: entry.description,
            date: entry.date,
            start: entry.start,
            end: entry.end,
            pause: entry.pause,
            vacation: entry.vacation,
        }
    }
}
