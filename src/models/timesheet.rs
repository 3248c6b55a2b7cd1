//! Timesheet model.
//!
//! This module contains the [`Timesheet`] type that aggregates one month of
//! entries together with employee and profession metadata, and the per-day
//! aggregation used by the daily rules.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Employee, Entry, Profession, TimeSpan};
use crate::error::{EngineError, EngineResult};

/// Aggregated times of all entries on one calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotals {
    /// Sum of `end - start` over all entries of the day.
    pub worked: TimeSpan,
    /// Sum of pauses over all entries of the day.
    pub pause: TimeSpan,
    /// Sum of net working time (pause excluded) over the non-vacation entries.
    pub net_work: TimeSpan,
}

/// A monthly work record for one employee.
///
/// The timesheet is built once and then treated as read-only. Every entry's
/// date must fall within the timesheet's `(year, month)`; entry order is kept
/// but carries no meaning for validation.
///
/// # Example
///
/// ```
/// use timesheet_checker::models::{
///     ClockTime, Employee, Entry, Profession, TimeSpan, Timesheet, WorkingArea,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = Entry::new(
///     "Tutorium",
///     NaiveDate::from_ymd_opt(2019, 11, 22).unwrap(),
///     ClockTime::new(10, 0).unwrap(),
///     ClockTime::new(12, 0).unwrap(),
///     TimeSpan::ZERO,
///     false,
/// )
/// .unwrap();
///
/// let timesheet = Timesheet::new(
///     Employee { name: "Max Mustermann".to_string(), staff_id: 1234567 },
///     Profession {
///         department_name: "Fakultät für Informatik".to_string(),
///         working_area: WorkingArea::Ub,
///         max_working_time: TimeSpan::new(40, 0).unwrap(),
///         hourly_wage: Decimal::new(1031, 2),
///     },
///     2019,
///     11,
///     vec![entry],
///     TimeSpan::ZERO,
///     TimeSpan::ZERO,
/// )
/// .unwrap();
///
/// assert_eq!(timesheet.total_working_time(), TimeSpan::new(2, 0).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimesheetRecord", into = "TimesheetRecord")]
pub struct Timesheet {
    employee: Employee,
    profession: Profession,
    year: i32,
    month: u32,
    entries: Vec<Entry>,
    carry_over_from_previous: TimeSpan,
    carry_over_to_next: TimeSpan,
}

/// Unvalidated wire form of a [`Timesheet`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TimesheetRecord {
    employee: Employee,
    profession: Profession,
    year: i32,
    month: u32,
    #[serde(default)]
    entries: Vec<Entry>,
    #[serde(default)]
    carry_over_from_previous: TimeSpan,
    #[serde(default)]
    carry_over_to_next: TimeSpan,
}

impl Timesheet {
    /// Creates a validated timesheet.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimesheet`] if `month` is not in 1..=12 or
    /// if any entry is dated outside `(year, month)`.
    pub fn new(
        employee: Employee,
        profession: Profession,
        year: i32,
        month: u32,
        entries: Vec<Entry>,
        carry_over_from_previous: TimeSpan,
        carry_over_to_next: TimeSpan,
    ) -> EngineResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(EngineError::InvalidTimesheet {
                message: format!("{}-{:02} is not a valid month", year, month),
            });
        }

        if let Some(stray) = entries
            .iter()
            .find(|e| e.date().year() != year || e.date().month() != month)
        {
            return Err(EngineError::InvalidTimesheet {
                message: format!(
                    "entry '{}' on {} lies outside {}-{:02}",
                    stray.description(),
                    stray.date(),
                    year,
                    month
                ),
            });
        }

        Ok(Self {
            employee,
            profession,
            year,
            month,
            entries,
            carry_over_from_previous,
            carry_over_to_next,
        })
    }

    /// Returns the employee.
    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    /// Returns the profession.
    pub fn profession(&self) -> &Profession {
        &self.profession
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the hours carried over from the previous month.
    pub fn carry_over_from_previous(&self) -> TimeSpan {
        self.carry_over_from_previous
    }

    /// Returns the hours carried over to the next month.
    pub fn carry_over_to_next(&self) -> TimeSpan {
        self.carry_over_to_next
    }

    /// Returns the sum of all entries' working time.
    pub fn total_working_time(&self) -> TimeSpan {
        self.entries.iter().map(Entry::working_time).sum()
    }

    /// Returns the net working time recorded as vacation.
    pub fn vacation_time(&self) -> TimeSpan {
        self.entries
            .iter()
            .filter(|e| e.is_vacation())
            .map(Entry::net_working_time)
            .sum()
    }

    /// Returns the monthly total adjusted by both carry-over balances.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TimeSpanUnderflow`] if more hours are carried to
    /// the next month than are available, or [`EngineError::TimeSpanOverflow`]
    /// if the incoming balance is too large.
    pub fn balanced_working_time(&self) -> EngineResult<TimeSpan> {
        self.total_working_time()
            .checked_add(self.carry_over_from_previous)?
            .checked_sub(self.carry_over_to_next)
    }

    /// Aggregates the entries per calendar date, in chronological order.
    ///
    /// ```
    /// # use timesheet_checker::models::*;
    /// # use chrono::NaiveDate;
    /// # use rust_decimal::Decimal;
    /// # let day = NaiveDate::from_ymd_opt(2019, 11, 22).unwrap();
    /// # let entry = |s: &str, e: &str| {
    /// #     Entry::new("x", day, s.parse().unwrap(), e.parse().unwrap(), TimeSpan::ZERO, false).unwrap()
    /// # };
    /// # let profession = Profession {
    /// #     department_name: "Informatik".to_string(),
    /// #     working_area: WorkingArea::Ub,
    /// #     max_working_time: TimeSpan::new(40, 0).unwrap(),
    /// #     hourly_wage: Decimal::new(1031, 2),
    /// # };
    /// # let employee = Employee { name: "Max".to_string(), staff_id: 1 };
    /// let sheet = Timesheet::new(
    ///     employee, profession, 2019, 11,
    ///     vec![entry("08:00", "13:00"), entry("15:00", "20:00")],
    ///     TimeSpan::ZERO, TimeSpan::ZERO,
    /// ).unwrap();
    ///
    /// let days = sheet.daily_totals();
    /// assert_eq!(days[&day].worked, TimeSpan::new(10, 0).unwrap());
    /// ```
    pub fn daily_totals(&self) -> BTreeMap<NaiveDate, DayTotals> {
        let mut days: BTreeMap<NaiveDate, DayTotals> = BTreeMap::new();
        for entry in &self.entries {
            let day = days.entry(entry.date()).or_default();
            day.worked = day.worked + entry.working_time();
            day.pause = day.pause + entry.pause();
            if !entry.is_vacation() {
                day.net_work = day.net_work + entry.net_working_time();
            }
        }
        days
    }
}

impl TryFrom<TimesheetRecord> for Timesheet {
    type Error = EngineError;

    fn try_from(record: TimesheetRecord) -> Result<Self, Self::Error> {
        Timesheet::new(
            record.employee,
            record.profession,
            record.year,
            record.month,
            record.entries,
            record.carry_over_from_previous,
            record.carry_over_to_next,
        )
    }
}

impl From<Timesheet> for TimesheetRecord {
    fn from(sheet: Timesheet) -> Self {
        TimesheetRecord {
            employee: sheet.employee,
            profession: sheet.profession,
            year: sheet.year,
            month: sheet.month,
            entries: sheet.entries,
            carry_over_from_previous: sheet.carry_over_from_previous,
            carry_over_to_next: sheet.carry_over_to_next,
        }
    }
}
