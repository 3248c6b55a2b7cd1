//! Public holiday table and per-year holiday calendars.
//!
//! The table lists every German public holiday with the states that recognize
//! it. Movable feasts are stored as day offsets from Easter Sunday.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::{HolidayError, Jurisdiction, Jurisdiction as J, easter_sunday};

/// A public holiday on a specific date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Tag der Deutschen Einheit").
    pub name: String,
    /// The state the holiday was computed for.
    pub jurisdiction: Jurisdiction,
}

/// How the date of a holiday is determined.
#[derive(Debug, Clone, Copy)]
enum Anchor {
    Fixed { month: u32, day: u32 },
    Easter(i64),
    /// Wednesday before November 23rd.
    RepentanceDay,
}

/// Which states observe a holiday.
#[derive(Debug, Clone, Copy)]
enum Recognition {
    Nationwide,
    States(&'static [Jurisdiction]),
}

/// Which years a holiday exists in.
#[derive(Debug, Clone, Copy)]
enum Validity {
    Always,
    Since(i32),
    Only(i32),
}

#[derive(Debug, Clone, Copy)]
struct HolidayRule {
    name: &'static str,
    anchor: Anchor,
    recognition: Recognition,
    validity: Validity,
}

impl HolidayRule {
    const fn new(name: &'static str, anchor: Anchor, recognition: Recognition) -> Self {
        Self {
            name,
            anchor,
            recognition,
            validity: Validity::Always,
        }
    }

    const fn valid(mut self, validity: Validity) -> Self {
        self.validity = validity;
        self
    }

    fn applies(&self, year: i32, jurisdiction: Jurisdiction) -> bool {
        let in_year = match self.validity {
            Validity::Always => true,
            Validity::Since(first) => year >= first,
            Validity::Only(only) => year == only,
        };
        let in_state = match self.recognition {
            Recognition::Nationwide => true,
            Recognition::States(states) => states.contains(&jurisdiction),
        };
        in_year && in_state
    }

    fn date(&self, year: i32, easter: NaiveDate) -> Result<NaiveDate, HolidayError> {
        let date = match self.anchor {
            Anchor::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            Anchor::Easter(offset) => easter.checked_add_signed(Duration::days(offset)),
            Anchor::RepentanceDay => NaiveDate::from_ymd_opt(year, 11, 22).and_then(|nov22| {
                let back = (nov22.weekday().num_days_from_monday() + 7
                    - Weekday::Wed.num_days_from_monday())
                    % 7;
                nov22.checked_sub_signed(Duration::days(i64::from(back)))
            }),
        };
        date.ok_or(HolidayError::YearOutOfRange { year })
    }
}

const fn fixed(month: u32, day: u32) -> Anchor {
    Anchor::Fixed { month, day }
}

const REFORMATION_DAY: &str = "Reformationstag";

static HOLIDAY_RULES: &[HolidayRule] = &[
    HolidayRule::new("Neujahr", fixed(1, 1), Recognition::Nationwide),
    HolidayRule::new(
        "Heilige Drei Könige",
        fixed(1, 6),
        Recognition::States(&[J::BadenWuerttemberg, J::Bayern, J::SachsenAnhalt]),
    ),
    HolidayRule::new(
        "Internationaler Frauentag",
        fixed(3, 8),
        Recognition::States(&[J::Berlin]),
    )
    .valid(Validity::Since(2019)),
    HolidayRule::new(
        "Internationaler Frauentag",
        fixed(3, 8),
        Recognition::States(&[J::MecklenburgVorpommern]),
    )
    .valid(Validity::Since(2023)),
    HolidayRule::new("Karfreitag", Anchor::Easter(-2), Recognition::Nationwide),
    HolidayRule::new(
        "Ostersonntag",
        Anchor::Easter(0),
        Recognition::States(&[J::Brandenburg]),
    ),
    HolidayRule::new("Ostermontag", Anchor::Easter(1), Recognition::Nationwide),
    HolidayRule::new("Tag der Arbeit", fixed(5, 1), Recognition::Nationwide),
    HolidayRule::new("Christi Himmelfahrt", Anchor::Easter(39), Recognition::Nationwide),
    HolidayRule::new(
        "Pfingstsonntag",
        Anchor::Easter(49),
        Recognition::States(&[J::Brandenburg]),
    ),
    HolidayRule::new("Pfingstmontag", Anchor::Easter(50), Recognition::Nationwide),
    HolidayRule::new(
        "Fronleichnam",
        Anchor::Easter(60),
        Recognition::States(&[
            J::BadenWuerttemberg,
            J::Bayern,
            J::Hessen,
            J::NordrheinWestfalen,
            J::RheinlandPfalz,
            J::Saarland,
        ]),
    ),
    HolidayRule::new(
        "Mariä Himmelfahrt",
        fixed(8, 15),
        Recognition::States(&[J::Saarland]),
    ),
    HolidayRule::new(
        "Weltkindertag",
        fixed(9, 20),
        Recognition::States(&[J::Thueringen]),
    )
    .valid(Validity::Since(2019)),
    HolidayRule::new(
        "Tag der Deutschen Einheit",
        fixed(10, 3),
        Recognition::Nationwide,
    ),
    HolidayRule::new(
        REFORMATION_DAY,
        fixed(10, 31),
        Recognition::States(&[
            J::Brandenburg,
            J::MecklenburgVorpommern,
            J::Sachsen,
            J::SachsenAnhalt,
            J::Thueringen,
        ]),
    ),
    HolidayRule::new(
        REFORMATION_DAY,
        fixed(10, 31),
        Recognition::States(&[J::Bremen, J::Hamburg, J::Niedersachsen, J::SchleswigHolstein]),
    )
    .valid(Validity::Since(2018)),
    // 500th anniversary of the Reformation
    HolidayRule::new(REFORMATION_DAY, fixed(10, 31), Recognition::Nationwide)
        .valid(Validity::Only(2017)),
    HolidayRule::new(
        "Allerheiligen",
        fixed(11, 1),
        Recognition::States(&[
            J::BadenWuerttemberg,
            J::Bayern,
            J::NordrheinWestfalen,
            J::RheinlandPfalz,
            J::Saarland,
        ]),
    ),
    HolidayRule::new(
        "Buß- und Bettag",
        Anchor::RepentanceDay,
        Recognition::States(&[J::Sachsen]),
    ),
    HolidayRule::new("1. Weihnachtstag", fixed(12, 25), Recognition::Nationwide),
    HolidayRule::new("2. Weihnachtstag", fixed(12, 26), Recognition::Nationwide),
];

/// All public holidays of one year in one state.
///
/// # Example
///
/// ```
/// use timesheet_checker::holiday::{HolidayCalendar, Jurisdiction};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::compute(2024, Jurisdiction::BadenWuerttemberg).unwrap();
/// let christmas = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// assert!(calendar.contains(christmas));
/// assert_eq!(calendar.get(christmas).unwrap().name, "1. Weihnachtstag");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayCalendar {
    year: i32,
    jurisdiction: Jurisdiction,
    holidays: BTreeMap<NaiveDate, Holiday>,
}

impl HolidayCalendar {
    /// Computes the holidays of `year` recognized in `jurisdiction`.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::YearOutOfRange`] if a holiday date of that year
    /// cannot be represented.
    pub fn compute(year: i32, jurisdiction: Jurisdiction) -> Result<Self, HolidayError> {
        let easter = easter_sunday(year)?;

        let mut holidays = BTreeMap::new();
        for rule in HOLIDAY_RULES.iter().filter(|r| r.applies(year, jurisdiction)) {
            let date = rule.date(year, easter)?;
            holidays.entry(date).or_insert_with(|| Holiday {
                date,
                name: rule.name.to_string(),
                jurisdiction,
            });
        }

        Ok(Self {
            year,
            jurisdiction,
            holidays,
        })
    }

    /// Returns the year of this calendar.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the state of this calendar.
    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }

    /// Returns true if `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Returns the holiday on `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    /// Returns the holidays in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.values()
    }

    /// Returns the number of holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the calendar holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn names(calendar: &HolidayCalendar) -> Vec<&str> {
        calendar.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_baden_wuerttemberg_2024() {
        let calendar = HolidayCalendar::compute(2024, J::BadenWuerttemberg).unwrap();
        let dates: Vec<NaiveDate> = calendar.iter().map(|h| h.date).collect();

        assert_eq!(
            dates,
            vec![
                date(2024, 1, 1),
                date(2024, 1, 6),
                date(2024, 3, 29),
                date(2024, 4, 1),
                date(2024, 5, 1),
                date(2024, 5, 9),
                date(2024, 5, 20),
                date(2024, 5, 30),
                date(2024, 10, 3),
                date(2024, 11, 1),
                date(2024, 12, 25),
                date(2024, 12, 26),
            ]
        );
    }

    #[test]
    fn test_movable_feast_offsets() {
        // Easter Sunday 2019 is April 21
        let calendar = HolidayCalendar::compute(2019, J::Bayern).unwrap();
        assert_eq!(calendar.get(date(2019, 4, 19)).unwrap().name, "Karfreitag");
        assert_eq!(calendar.get(date(2019, 4, 22)).unwrap().name, "Ostermontag");
        assert_eq!(calendar.get(date(2019, 5, 30)).unwrap().name, "Christi Himmelfahrt");
        assert_eq!(calendar.get(date(2019, 6, 10)).unwrap().name, "Pfingstmontag");
        assert_eq!(calendar.get(date(2019, 6, 20)).unwrap().name, "Fronleichnam");
    }

    #[test]
    fn test_corpus_christi_is_regional() {
        let corpus_christi = date(2024, 5, 30);
        assert!(HolidayCalendar::compute(2024, J::Hessen).unwrap().contains(corpus_christi));
        assert!(!HolidayCalendar::compute(2024, J::Berlin).unwrap().contains(corpus_christi));
    }

    #[test]
    fn test_brandenburg_observes_easter_and_whit_sunday() {
        let calendar = HolidayCalendar::compute(2024, J::Brandenburg).unwrap();
        assert!(calendar.contains(date(2024, 3, 31)));
        assert!(calendar.contains(date(2024, 5, 19)));
        assert!(!HolidayCalendar::compute(2024, J::Bremen).unwrap().contains(date(2024, 3, 31)));
    }

    #[test]
    fn test_repentance_day_in_saxony() {
        let calendar = HolidayCalendar::compute(2024, J::Sachsen).unwrap();
        assert_eq!(calendar.get(date(2024, 11, 20)).unwrap().name, "Buß- und Bettag");

        // November 22nd itself when it falls on a Wednesday
        let calendar = HolidayCalendar::compute(2023, J::Sachsen).unwrap();
        assert!(calendar.contains(date(2023, 11, 22)));
    }

    #[test]
    fn test_reformation_day_history() {
        let reformation = |y| date(y, 10, 31);
        assert!(!HolidayCalendar::compute(2016, J::Niedersachsen).unwrap().contains(reformation(2016)));
        assert!(HolidayCalendar::compute(2017, J::BadenWuerttemberg).unwrap().contains(reformation(2017)));
        assert!(!HolidayCalendar::compute(2018, J::BadenWuerttemberg).unwrap().contains(reformation(2018)));
        assert!(HolidayCalendar::compute(2018, J::Niedersachsen).unwrap().contains(reformation(2018)));
        assert!(HolidayCalendar::compute(1995, J::Sachsen).unwrap().contains(reformation(1995)));
    }

    #[test]
    fn test_reformation_day_is_not_duplicated_in_2017() {
        let calendar = HolidayCalendar::compute(2017, J::Sachsen).unwrap();
        let count = names(&calendar)
            .into_iter()
            .filter(|n| *n == REFORMATION_DAY)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_womens_day_since_year() {
        assert!(!HolidayCalendar::compute(2018, J::Berlin).unwrap().contains(date(2018, 3, 8)));
        assert!(HolidayCalendar::compute(2019, J::Berlin).unwrap().contains(date(2019, 3, 8)));
        assert!(!HolidayCalendar::compute(2022, J::MecklenburgVorpommern).unwrap().contains(date(2022, 3, 8)));
        assert!(HolidayCalendar::compute(2023, J::MecklenburgVorpommern).unwrap().contains(date(2023, 3, 8)));
    }

    #[test]
    fn test_every_state_has_nationwide_holidays() {
        for state in Jurisdiction::ALL {
            let calendar = HolidayCalendar::compute(2030, state).unwrap();
            assert!(calendar.len() >= 9, "{} has {} holidays", state, calendar.len());
            assert!(calendar.contains(date(2030, 10, 3)));
            assert!(calendar.iter().all(|h| h.jurisdiction == state));
        }
    }
}
