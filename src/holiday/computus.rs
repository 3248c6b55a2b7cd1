//! Easter date computation.

use chrono::NaiveDate;

use super::HolidayError;

/// Computes Easter Sunday of a Gregorian year.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher). All divisions
/// are floor divisions, so the proleptic calendar extrapolates to any year the
/// date type can represent.
///
/// # Errors
///
/// Returns [`HolidayError::YearOutOfRange`] if the resulting date cannot be
/// represented.
///
/// # Example
///
/// ```
/// use timesheet_checker::holiday::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2024).unwrap(), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> Result<NaiveDate, HolidayError> {
    let y = i64::from(year);

    let a = y.rem_euclid(19);
    let b = y.div_euclid(100);
    let c = y.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);

    let n = h + l - 7 * m + 114;
    // month is 3 or 4, day is 1..=31
    let month = n.div_euclid(31) as u32;
    let day = (n.rem_euclid(31) + 1) as u32;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(HolidayError::YearOutOfRange { year })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_known_easter_dates() {
        assert_eq!(easter_sunday(2000).unwrap(), date(2000, 4, 23));
        assert_eq!(easter_sunday(2019).unwrap(), date(2019, 4, 21));
        assert_eq!(easter_sunday(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025).unwrap(), date(2025, 4, 20));
    }

    #[test]
    fn test_extreme_dates_of_the_cycle() {
        // latest possible Easter
        assert_eq!(easter_sunday(1943).unwrap(), date(1943, 4, 25));
        assert_eq!(easter_sunday(2038).unwrap(), date(2038, 4, 25));
        // earliest possible Easter
        assert_eq!(easter_sunday(1818).unwrap(), date(1818, 3, 22));
        assert_eq!(easter_sunday(2285).unwrap(), date(2285, 3, 22));
    }

    #[test]
    fn test_far_future() {
        assert_eq!(easter_sunday(2100).unwrap(), date(2100, 3, 28));
    }

    #[test]
    fn test_always_a_sunday_within_window() {
        use chrono::{Datelike, Weekday};

        for year in 1583..=4099 {
            let easter = easter_sunday(year).unwrap();
            assert_eq!(easter.weekday(), Weekday::Sun, "year {}", year);
            assert!(easter >= date(year, 3, 22) && easter <= date(year, 4, 25));
        }
    }

    #[test]
    fn test_unrepresentable_year() {
        assert!(matches!(
            easter_sunday(i32::MAX),
            Err(HolidayError::YearOutOfRange { .. })
        ));
    }
}
