//! Public holiday computation for German states.
//!
//! Holidays are computed locally: fixed-date holidays come from a table of
//! per-state recognitions, movable feasts are offsets from Easter Sunday.
//! [`HolidayService`] caches the result per year and state and is the default
//! [`HolidayProvider`] used by the checker.

mod calendar;
mod computus;
mod jurisdiction;
mod service;

use thiserror::Error;

pub use calendar::{Holiday, HolidayCalendar};
pub use computus::easter_sunday;
pub use jurisdiction::Jurisdiction;
pub use service::{HolidayProvider, HolidayService};

/// Failure to produce holiday data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolidayError {
    /// The jurisdiction code is not known to the provider.
    #[error("Unsupported jurisdiction code: {code}")]
    UnsupportedJurisdiction {
        /// The code that was requested.
        code: String,
    },

    /// The year cannot be represented by the calendar.
    #[error("Year {year} is outside the supported calendar range")]
    YearOutOfRange {
        /// The requested year.
        year: i32,
    },

    /// The provider could not deliver data for another reason.
    #[error("Holiday source unavailable: {message}")]
    Unavailable {
        /// A description of the failure.
        message: String,
    },
}
