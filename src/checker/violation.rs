//! Rule identifiers and violation records.
//!
//! A [`Violation`] carries the facts of one rule breach. Human-readable text is
//! produced in one place, [`render_message`], and stored on the
//! [`CheckerError`] handed to callers.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ClockTime, TimeSpan};

/// Identifies one of the rules a timesheet is checked against.
///
/// Variants are listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// Monthly working time against the profession's maximum.
    TotalTime,
    /// Per-date pause tiers.
    DayPause,
    /// Per-date maximum net working time.
    DayTime,
    /// Permitted daily time window.
    DayBounds,
    /// No work on Sundays or public holidays.
    ValidWorkingDay,
    /// Number of entries against the document capacity.
    RowCount,
    /// Department name must be present.
    DepartmentName,
}

impl RuleId {
    /// Returns a human-readable rule name.
    pub fn name(&self) -> &'static str {
        match self {
            RuleId::TotalTime => "Total Working Time",
            RuleId::DayPause => "Daily Pause",
            RuleId::DayTime => "Daily Working Time",
            RuleId::DayBounds => "Daily Time Window",
            RuleId::ValidWorkingDay => "Valid Working Day",
            RuleId::RowCount => "Document Row Count",
            RuleId::DepartmentName => "Department Name",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            RuleId::TotalTime => "total_time",
            RuleId::DayPause => "day_pause",
            RuleId::DayTime => "day_time",
            RuleId::DayBounds => "day_bounds",
            RuleId::ValidWorkingDay => "valid_working_day",
            RuleId::RowCount => "row_count",
            RuleId::DepartmentName => "department_name",
        };
        f.write_str(id)
    }
}

/// The facts of a single rule breach.
///
/// Entry references are zero-based indices into
/// [`Timesheet::entries`](crate::models::Timesheet::entries).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The monthly working time exceeds the profession's maximum.
    TotalTimeExceeded {
        /// Sum of all entries' working time.
        worked: TimeSpan,
        /// The profession's maximum.
        limit: TimeSpan,
    },
    /// A day reached a pause tier without the required pause.
    PauseTooShort {
        /// The offending date.
        date: NaiveDate,
        /// Worked time of the day, pause included.
        worked: TimeSpan,
        /// Pause taken that day.
        pause: TimeSpan,
        /// Pause required by the strictest tier reached.
        required: TimeSpan,
    },
    /// A day's net working time exceeds the daily maximum.
    DayTimeExceeded {
        /// The offending date.
        date: NaiveDate,
        /// Net working time of the day.
        worked: TimeSpan,
        /// The daily maximum.
        limit: TimeSpan,
    },
    /// An entry starts before the permitted window.
    StartTooEarly {
        /// Date of the entry.
        date: NaiveDate,
        /// Index of the entry.
        entry: usize,
        /// Start of the entry.
        start: ClockTime,
        /// Earliest permitted start.
        bound: ClockTime,
    },
    /// An entry ends after the permitted window.
    EndTooLate {
        /// Date of the entry.
        date: NaiveDate,
        /// Index of the entry.
        entry: usize,
        /// End of the entry.
        end: ClockTime,
        /// Latest permitted end.
        bound: ClockTime,
    },
    /// An entry is dated on a Sunday.
    SundayWork {
        /// Date of the entry.
        date: NaiveDate,
        /// Index of the entry.
        entry: usize,
    },
    /// An entry is dated on a public holiday.
    HolidayWork {
        /// Date of the entry.
        date: NaiveDate,
        /// Index of the entry.
        entry: usize,
        /// Name of the holiday.
        holiday: String,
    },
    /// More entries than the document can hold.
    RowCountExceeded {
        /// Number of entries.
        rows: usize,
        /// Document capacity.
        limit: usize,
    },
    /// The profession has no department name.
    DepartmentMissing,
}

impl Violation {
    /// Returns the rule this violation belongs to.
    pub fn rule(&self) -> RuleId {
        match self {
            Violation::TotalTimeExceeded { .. } => RuleId::TotalTime,
            Violation::PauseTooShort { .. } => RuleId::DayPause,
            Violation::DayTimeExceeded { .. } => RuleId::DayTime,
            Violation::StartTooEarly { .. } | Violation::EndTooLate { .. } => RuleId::DayBounds,
            Violation::SundayWork { .. } | Violation::HolidayWork { .. } => RuleId::ValidWorkingDay,
            Violation::RowCountExceeded { .. } => RuleId::RowCount,
            Violation::DepartmentMissing => RuleId::DepartmentName,
        }
    }

    /// Returns the date the violation refers to, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Violation::PauseTooShort { date, .. }
            | Violation::DayTimeExceeded { date, .. }
            | Violation::StartTooEarly { date, .. }
            | Violation::EndTooLate { date, .. }
            | Violation::SundayWork { date, .. }
            | Violation::HolidayWork { date, .. } => Some(*date),
            Violation::TotalTimeExceeded { .. }
            | Violation::RowCountExceeded { .. }
            | Violation::DepartmentMissing => None,
        }
    }

    /// Returns the index of the entry the violation refers to, if any.
    pub fn entry_index(&self) -> Option<usize> {
        match self {
            Violation::StartTooEarly { entry, .. }
            | Violation::EndTooLate { entry, .. }
            | Violation::SundayWork { entry, .. }
            | Violation::HolidayWork { entry, .. } => Some(*entry),
            _ => None,
        }
    }
}

/// Renders the user-facing message for a violation.
pub fn render_message(violation: &Violation) -> String {
    match violation {
        Violation::TotalTimeExceeded { worked, limit } => format!(
            "Maximum legal working time exceeded: {} worked, {} allowed.",
            worked, limit
        ),
        Violation::PauseTooShort {
            date,
            worked,
            pause,
            required,
        } => format!(
            "Maximum working time without pause exceeded on {}: {} worked with {} pause, {} required.",
            date, worked, pause, required
        ),
        Violation::DayTimeExceeded { date, worked, limit } => format!(
            "Maximum working time per day exceeded on {}: {} worked, {} allowed.",
            date, worked, limit
        ),
        Violation::StartTooEarly {
            date, start, bound, ..
        } => format!(
            "Working time is out of bounds on {}: starts at {}, earliest start is {}.",
            date, start, bound
        ),
        Violation::EndTooLate { date, end, bound, .. } => format!(
            "Working time is out of bounds on {}: ends at {}, latest end is {}.",
            date, end, bound
        ),
        Violation::SundayWork { date, .. } => {
            format!("Sunday is not a valid working day: {}.", date)
        }
        Violation::HolidayWork { date, holiday, .. } => format!(
            "Official holiday is not a valid working day: {} ({}).",
            date, holiday
        ),
        Violation::RowCountExceeded { rows, limit } => format!(
            "Exceeded the maximum number of rows for the document: {} entries, {} allowed.",
            rows, limit
        ),
        Violation::DepartmentMissing => "Name of the department is missing.".to_string(),
    }
}

/// A rule violation found while checking a timesheet.
///
/// # Example
///
/// ```
/// use timesheet_checker::checker::{CheckerError, RuleId, Violation};
///
/// let error = CheckerError::new(Violation::DepartmentMissing);
/// assert_eq!(error.rule, RuleId::DepartmentName);
/// assert_eq!(error.message, "Name of the department is missing.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerError {
    /// The rule that was violated.
    pub rule: RuleId,
    /// The facts of the violation.
    pub violation: Violation,
    /// The rendered, human-readable message.
    pub message: String,
}

impl CheckerError {
    /// Creates an error for `violation` and renders its message.
    pub fn new(violation: Violation) -> Self {
        Self {
            rule: violation.rule(),
            message: render_message(&violation),
            violation,
        }
    }

    /// Returns the date the error refers to, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        self.violation.date()
    }
}

impl From<Violation> for CheckerError {
    fn from(violation: Violation) -> Self {
        CheckerError::new(violation)
    }
}

impl fmt::Display for CheckerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
