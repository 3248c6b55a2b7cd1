//! German federal states as holiday jurisdictions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::HolidayError;

/// A German federal state, identified by its two-letter code.
///
/// # Example
///
/// ```
/// use timesheet_checker::holiday::Jurisdiction;
///
/// let state: Jurisdiction = "bw".parse().unwrap();
/// assert_eq!(state, Jurisdiction::BadenWuerttemberg);
/// assert_eq!(state.code(), "BW");
/// assert!("XX".parse::<Jurisdiction>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Jurisdiction {
    /// Baden-Württemberg (BW).
    BadenWuerttemberg,
    /// Bayern (BY).
    Bayern,
    /// Berlin (BE).
    Berlin,
    /// Brandenburg (BB).
    Brandenburg,
    /// Bremen (HB).
    Bremen,
    /// Hamburg (HH).
    Hamburg,
    /// Hessen (HE).
    Hessen,
    /// Mecklenburg-Vorpommern (MV).
    MecklenburgVorpommern,
    /// Niedersachsen (NI).
    Niedersachsen,
    /// Nordrhein-Westfalen (NW).
    NordrheinWestfalen,
    /// Rheinland-Pfalz (RP).
    RheinlandPfalz,
    /// Saarland (SL).
    Saarland,
    /// Sachsen (SN).
    Sachsen,
    /// Sachsen-Anhalt (ST).
    SachsenAnhalt,
    /// Schleswig-Holstein (SH).
    SchleswigHolstein,
    /// Thüringen (TH).
    Thueringen,
}

impl Jurisdiction {
    /// All sixteen states.
    pub const ALL: [Jurisdiction; 16] = [
        Jurisdiction::BadenWuerttemberg,
        Jurisdiction::Bayern,
        Jurisdiction::Berlin,
        Jurisdiction::Brandenburg,
        Jurisdiction::Bremen,
        Jurisdiction::Hamburg,
        Jurisdiction::Hessen,
        Jurisdiction::MecklenburgVorpommern,
        Jurisdiction::Niedersachsen,
        Jurisdiction::NordrheinWestfalen,
        Jurisdiction::RheinlandPfalz,
        Jurisdiction::Saarland,
        Jurisdiction::Sachsen,
        Jurisdiction::SachsenAnhalt,
        Jurisdiction::SchleswigHolstein,
        Jurisdiction::Thueringen,
    ];

    /// Returns the two-letter state code.
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::BadenWuerttemberg => "BW",
            Jurisdiction::Bayern => "BY",
            Jurisdiction::Berlin => "BE",
            Jurisdiction::Brandenburg => "BB",
            Jurisdiction::Bremen => "HB",
            Jurisdiction::Hamburg => "HH",
            Jurisdiction::Hessen => "HE",
            Jurisdiction::MecklenburgVorpommern => "MV",
            Jurisdiction::Niedersachsen => "NI",
            Jurisdiction::NordrheinWestfalen => "NW",
            Jurisdiction::RheinlandPfalz => "RP",
            Jurisdiction::Saarland => "SL",
            Jurisdiction::Sachsen => "SN",
            Jurisdiction::SachsenAnhalt => "ST",
            Jurisdiction::SchleswigHolstein => "SH",
            Jurisdiction::Thueringen => "TH",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Jurisdiction {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Jurisdiction::ALL
            .into_iter()
            .find(|j| j.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| HolidayError::UnsupportedJurisdiction {
                code: s.to_string(),
            })
    }
}

impl TryFrom<String> for Jurisdiction {
    type Error = HolidayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Jurisdiction> for String {
    fn from(value: Jurisdiction) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_parses_back() {
        for state in Jurisdiction::ALL {
            assert_eq!(state.code().parse::<Jurisdiction>().unwrap(), state);
        }
    }

    #[test]
    fn test_unknown_code_is_unsupported() {
        assert!(matches!(
            "AT".parse::<Jurisdiction>(),
            Err(HolidayError::UnsupportedJurisdiction { code }) if code == "AT"
        ));
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(
            serde_json::to_string(&Jurisdiction::Sachsen).unwrap(),
            "\"SN\""
        );
    }
}
