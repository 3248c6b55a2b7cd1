//! Error types for the timesheet checker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Rule violations found while checking a timesheet are *not* errors; they are
//! collected as [`CheckerError`](crate::checker::CheckerError) values. The
//! variants here cover invalid input at construction time, configuration
//! problems and the fatal holiday-source failure of a check run.

use thiserror::Error;

use crate::holiday::HolidayError;
use crate::models::TimeSpan;

/// The main error type for the timesheet checker.
///
/// # Example
///
/// ```
/// use timesheet_checker::error::EngineError;
///
/// let error = EngineError::InvalidClockTime { hour: 24, minute: 0 };
/// assert_eq!(error.to_string(), "Clock time out of range: 24:00");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A clock time was constructed outside 00:00..=23:59.
    #[error("Clock time out of range: {hour:02}:{minute:02}")]
    InvalidClockTime {
        /// The requested hour.
        hour: u32,
        /// The requested minute.
        minute: u32,
    },

    /// A time span was constructed with a minute component of 60 or more.
    #[error("Time span out of range: {hours}h {minutes}min")]
    InvalidTimeSpan {
        /// The requested hours.
        hours: u32,
        /// The requested minutes.
        minutes: u32,
    },

    /// A larger time span was subtracted from a smaller one.
    #[error("Cannot subtract {subtrahend} from {minuend}")]
    TimeSpanUnderflow {
        /// The span subtracted from.
        minuend: TimeSpan,
        /// The span that was too large.
        subtrahend: TimeSpan,
    },

    /// A sum of time spans exceeded the representable range.
    #[error("Cannot add {addend} to {augend}: time span too large")]
    TimeSpanOverflow {
        /// The span added to.
        augend: TimeSpan,
        /// The span that was added.
        addend: TimeSpan,
    },

    /// A clock time or time span string could not be parsed.
    #[error("Failed to parse time '{input}': {message}")]
    ParseTime {
        /// The text that failed to parse.
        input: String,
        /// A description of the parse error.
        message: String,
    },

    /// An entry violated one of its construction invariants.
    #[error("Invalid entry '{description}': {message}")]
    InvalidEntry {
        /// The description of the offending entry.
        description: String,
        /// What made the entry invalid.
        message: String,
    },

    /// A timesheet violated one of its construction invariants.
    #[error("Invalid timesheet: {message}")]
    InvalidTimesheet {
        /// What made the timesheet invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds inconsistent values.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// The holiday source could not answer; aborts a whole check run.
    #[error("Holiday data unavailable: {0}")]
    HolidaySource(#[from] HolidayError),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_clock_time_pads_components() {
        let error = EngineError::InvalidClockTime { hour: 7, minute: 60 };
        assert_eq!(error.to_string(), "Clock time out of range: 07:60");
    }

    #[test]
    fn test_time_span_underflow_displays_both_spans() {
        let error = EngineError::TimeSpanUnderflow {
            minuend: TimeSpan::from_minutes(30),
            subtrahend: TimeSpan::from_minutes(45),
        };
        assert_eq!(error.to_string(), "Cannot subtract 00:45 from 00:30");
    }

    #[test]
    fn test_invalid_entry_displays_description_and_message() {
        let error = EngineError::InvalidEntry {
            description: "Tutorium".to_string(),
            message: "end must be after start".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid entry 'Tutorium': end must be after start"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_holiday_source_wraps_cause() {
        let error: EngineError = HolidayError::UnsupportedJurisdiction {
            code: "XX".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Holiday data unavailable: Unsupported jurisdiction code: XX"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_underflow() -> EngineResult<TimeSpan> {
            TimeSpan::from_minutes(10).checked_sub(TimeSpan::from_minutes(20))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_underflow()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::TimeSpanUnderflow { .. })
        ));
    }
}
