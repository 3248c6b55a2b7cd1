//! Holiday lookup with per-(year, state) caching.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::{Holiday, HolidayCalendar, HolidayError, Jurisdiction};

/// A source of public holidays.
///
/// Jurisdictions are passed as codes (e.g. `"BW"`) because they come straight
/// from configuration; an implementation fails with
/// [`HolidayError::UnsupportedJurisdiction`] for codes it does not know.
pub trait HolidayProvider: Send + Sync {
    /// Returns all holidays of `year` in `jurisdiction`.
    fn holidays(&self, year: i32, jurisdiction: &str) -> Result<Arc<HolidayCalendar>, HolidayError>;

    /// Returns the holiday on `date`, if there is one.
    fn holiday_on(&self, date: NaiveDate, jurisdiction: &str) -> Result<Option<Holiday>, HolidayError> {
        Ok(self.holidays(date.year(), jurisdiction)?.get(date).cloned())
    }

    /// Returns true if `date` is a holiday in `jurisdiction`.
    fn is_holiday(&self, date: NaiveDate, jurisdiction: &str) -> Result<bool, HolidayError> {
        Ok(self.holidays(date.year(), jurisdiction)?.contains(date))
    }
}

/// Computes German public holidays locally and caches them per year and state.
///
/// The cache sits behind a lock, so one service can be shared by checkers
/// running on different threads.
///
/// # Example
///
/// ```
/// use timesheet_checker::holiday::{HolidayProvider, HolidayService};
/// use chrono::NaiveDate;
///
/// let service = HolidayService::new();
/// let new_year = NaiveDate::from_ymd_opt(2100, 1, 1).unwrap();
/// assert!(service.is_holiday(new_year, "BW").unwrap());
/// assert!(service.is_holiday(new_year, "XX").is_err());
/// ```
#[derive(Debug, Default)]
pub struct HolidayService {
    cache: RwLock<HashMap<(i32, Jurisdiction), Arc<HolidayCalendar>>>,
}

impl HolidayService {
    /// Creates a service with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cached (year, state) calendars.
    pub fn cached_calendars(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl HolidayProvider for HolidayService {
    fn holidays(&self, year: i32, jurisdiction: &str) -> Result<Arc<HolidayCalendar>, HolidayError> {
        let state: Jurisdiction = jurisdiction.parse()?;

        if let Some(calendar) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(year, state))
        {
            return Ok(Arc::clone(calendar));
        }

        debug!(year, jurisdiction = %state, "Computing holiday calendar");
        let calendar = Arc::new(HolidayCalendar::compute(year, state)?);

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(cache.entry((year, state)).or_insert(calendar)))
    }
}
