//! Time span model.
//!
//! A [`TimeSpan`] is a nonnegative duration with minute precision. It is used
//! for worked times, pauses, monthly limits and carry-over balances.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A nonnegative duration expressed as hours and minutes.
///
/// Values are normalized to a total minute count, so `TimeSpan::new(1, 30)`
/// equals `TimeSpan::from_minutes(90)`. Ordering and equality compare total
/// minutes. Spans serialize as `"HH:MM"` strings, where the hour component may
/// exceed 23 (monthly limits such as `"40:00"`).
///
/// Subtraction never clamps: [`TimeSpan::checked_sub`] fails with
/// [`EngineError::TimeSpanUnderflow`] when the result would be negative.
///
/// # Example
///
/// ```
/// use timesheet_checker::models::TimeSpan;
///
/// let worked = TimeSpan::new(8, 15).unwrap();
/// let pause = TimeSpan::new(0, 45).unwrap();
/// assert_eq!(worked.checked_sub(pause).unwrap(), TimeSpan::new(7, 30).unwrap());
/// assert_eq!((worked + pause).to_string(), "09:00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSpan {
    minutes: u32,
}

impl TimeSpan {
    /// The empty span.
    pub const ZERO: TimeSpan = TimeSpan { minutes: 0 };

    /// Creates a span from hours and minutes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimeSpan`] if `minutes` is 60 or more, or
    /// if the total does not fit into the minute counter.
    pub fn new(hours: u32, minutes: u32) -> EngineResult<Self> {
        if minutes >= 60 {
            return Err(EngineError::InvalidTimeSpan { hours, minutes });
        }
        hours
            .checked_mul(60)
            .and_then(|total| total.checked_add(minutes))
            .map(TimeSpan::from_minutes)
            .ok_or(EngineError::InvalidTimeSpan { hours, minutes })
    }

    /// Creates a span from a total number of minutes.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Returns the whole hours of this span.
    pub const fn hours(&self) -> u32 {
        self.minutes / 60
    }

    /// Returns the minute component (0..=59) of this span.
    pub const fn minutes(&self) -> u32 {
        self.minutes % 60
    }

    /// Returns the span as a total number of minutes.
    pub const fn total_minutes(&self) -> u32 {
        self.minutes
    }

    /// Returns true for the empty span.
    pub const fn is_zero(&self) -> bool {
        self.minutes == 0
    }

    /// Adds `other` to this span.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TimeSpanOverflow`] if the sum does not fit into
    /// the minute counter.
    pub fn checked_add(self, other: TimeSpan) -> EngineResult<TimeSpan> {
        self.minutes
            .checked_add(other.minutes)
            .map(TimeSpan::from_minutes)
            .ok_or(EngineError::TimeSpanOverflow {
                augend: self,
                addend: other,
            })
    }

    /// Subtracts `other` from this span.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TimeSpanUnderflow`] if `other` is larger than `self`.
    pub fn checked_sub(self, other: TimeSpan) -> EngineResult<TimeSpan> {
        self.minutes
            .checked_sub(other.minutes)
            .map(TimeSpan::from_minutes)
            .ok_or(EngineError::TimeSpanUnderflow {
                minuend: self,
                subtrahend: other,
            })
    }

    /// Returns the span in hours as a Decimal.
    ///
    /// ```
    /// use timesheet_checker::models::TimeSpan;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(TimeSpan::from_minutes(90).as_hours(), Decimal::new(15, 1));
    /// ```
    pub fn as_hours(&self) -> Decimal {
        Decimal::new(i64::from(self.minutes), 0) / Decimal::new(60, 0)
    }
}

/// Saturates at the largest representable span; use
/// [`TimeSpan::checked_add`] to detect overflow.
impl Add for TimeSpan {
    type Output = TimeSpan;

    fn add(self, rhs: TimeSpan) -> TimeSpan {
        TimeSpan::from_minutes(self.minutes.saturating_add(rhs.minutes))
    }
}

impl Sum for TimeSpan {
    fn sum<I: Iterator<Item = TimeSpan>>(iter: I) -> Self {
        iter.fold(TimeSpan::ZERO, Add::add)
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl FromStr for TimeSpan {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = split_hh_mm(s)?;
        TimeSpan::new(hours, minutes)
    }
}

impl TryFrom<String> for TimeSpan {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSpan> for String {
    fn from(value: TimeSpan) -> Self {
        value.to_string()
    }
}

/// Splits an `"H:MM"` / `"HH:MM"` string into its numeric components.
pub(crate) fn split_hh_mm(s: &str) -> EngineResult<(u32, u32)> {
    let parse_error = |message: &str| EngineError::ParseTime {
        input: s.to_string(),
        message: message.to_string(),
    };

    let (hours, minutes) = s
        .trim()
        .split_once(':')
        .ok_or_else(|| parse_error("expected HH:MM"))?;
    if minutes.len() != 2 {
        return Err(parse_error("minutes must have two digits"));
    }
    let hours = hours
        .parse::<u32>()
        .map_err(|e| parse_error(&e.to_string()))?;
    let minutes = minutes
        .parse::<u32>()
        .map_err(|e| parse_error(&e.to_string()))?;
    Ok((hours, minutes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn span(s: &str) -> TimeSpan {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_normalizes_to_minutes() {
        assert_eq!(TimeSpan::new(1, 30).unwrap(), TimeSpan::from_minutes(90));
        assert_eq!(TimeSpan::new(40, 0).unwrap().total_minutes(), 2400);
    }

    #[test]
    fn test_new_rejects_sixty_minutes() {
        assert!(matches!(
            TimeSpan::new(1, 60),
            Err(EngineError::InvalidTimeSpan {
                hours: 1,
                minutes: 60
            })
        ));
    }

    #[test]
    fn test_checked_sub_underflow_is_error() {
        let result = span("00:30").checked_sub(span("00:45"));
        assert!(matches!(result, Err(EngineError::TimeSpanUnderflow { .. })));
    }

    #[test]
    fn test_huge_hours_are_rejected_not_wrapped() {
        assert!(matches!(
            "99999999:00".parse::<TimeSpan>(),
            Err(EngineError::InvalidTimeSpan {
                hours: 99_999_999,
                minutes: 0
            })
        ));
        assert!(TimeSpan::new(u32::MAX / 60, 59).is_err());
        assert!(serde_json::from_str::<TimeSpan>("\"99999999:00\"").is_err());
    }

    #[test]
    fn test_checked_add_overflow_is_error() {
        let max = TimeSpan::from_minutes(u32::MAX);
        assert!(matches!(
            max.checked_add(span("00:01")),
            Err(EngineError::TimeSpanOverflow { .. })
        ));
        assert_eq!(span("01:15").checked_add(span("00:45")).unwrap(), span("02:00"));
        // the operator saturates instead
        assert_eq!(max + span("00:01"), max);
    }

    #[test]
    fn test_checked_sub_to_zero() {
        assert_eq!(span("06:00").checked_sub(span("06:00")).unwrap(), TimeSpan::ZERO);
    }

    #[test]
    fn test_display_pads_and_allows_large_hours() {
        assert_eq!(TimeSpan::from_minutes(5).to_string(), "00:05");
        assert_eq!(TimeSpan::from_minutes(2400).to_string(), "40:00");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!("0830".parse::<TimeSpan>().is_err());
        assert!("08:3".parse::<TimeSpan>().is_err());
        assert!("08:60".parse::<TimeSpan>().is_err());
        assert!("-1:00".parse::<TimeSpan>().is_err());
    }

    #[test]
    fn test_sum_of_spans() {
        let total: TimeSpan = [span("01:15"), span("02:50"), span("00:55")]
            .into_iter()
            .sum();
        assert_eq!(total, span("05:00"));
    }

    #[test]
    fn test_as_hours() {
        assert_eq!(span("10:45").as_hours(), Decimal::new(1075, 2));
    }

    #[test]
    fn test_serde_uses_hh_mm_strings() {
        let json = serde_json::to_string(&span("40:00")).unwrap();
        assert_eq!(json, "\"40:00\"");
        let parsed: TimeSpan = serde_json::from_str("\"00:45\"").unwrap();
        assert_eq!(parsed, TimeSpan::from_minutes(45));
        assert!(serde_json::from_str::<TimeSpan>("\"00:75\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_add_then_sub_restores(a in 0u32..100_000, b in 0u32..100_000) {
            let a = TimeSpan::from_minutes(a);
            let b = TimeSpan::from_minutes(b);
            prop_assert_eq!((a + b).checked_sub(b).unwrap(), a);
        }

        #[test]
        fn prop_ordering_follows_total_minutes(a in 0u32..100_000, b in 0u32..100_000) {
            let lhs = TimeSpan::from_minutes(a);
            let rhs = TimeSpan::from_minutes(b);
            prop_assert_eq!(lhs.cmp(&rhs), a.cmp(&b));
            prop_assert_eq!(lhs.checked_sub(rhs).is_ok(), a >= b);
        }

        #[test]
        fn prop_display_parses_back(minutes in 0u32..100_000) {
            let value = TimeSpan::from_minutes(minutes);
            prop_assert_eq!(value.to_string().parse::<TimeSpan>().unwrap(), value);
        }
    }
}
