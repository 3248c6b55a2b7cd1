//! Employee and profession models.
//!
//! This module defines the [`Employee`] a timesheet belongs to and the
//! [`Profession`] describing the contract the hours are worked under.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TimeSpan;

/// Represents the employee a timesheet is recorded for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The full name of the employee.
    pub name: String,
    /// The staff identification number.
    pub staff_id: u32,
}

/// How a position is funded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkingArea {
    /// Funded from the university budget ("UB").
    #[serde(alias = "UB")]
    Ub,
    /// Funded by external research grants ("GF").
    #[serde(alias = "GF")]
    Gf,
}

impl WorkingArea {
    /// Returns the short code printed on timesheet documents.
    pub fn code(&self) -> &'static str {
        match self {
            WorkingArea::Ub => "UB",
            WorkingArea::Gf => "GF",
        }
    }
}

/// Represents the contract under which hours are worked.
///
/// # Example
///
/// ```
/// use timesheet_checker::models::{Profession, TimeSpan, WorkingArea};
/// use rust_decimal::Decimal;
///
/// let profession = Profession {
///     department_name: "Fakultät für Informatik".to_string(),
///     working_area: WorkingArea::Ub,
///     max_working_time: TimeSpan::new(40, 0).unwrap(),
///     hourly_wage: Decimal::new(1031, 2),
/// };
/// assert!(profession.has_department_name());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profession {
    /// The department the employee works for.
    pub department_name: String,
    /// How the position is funded.
    pub working_area: WorkingArea,
    /// The maximum working time per month.
    pub max_working_time: TimeSpan,
    /// The hourly wage.
    pub hourly_wage: Decimal,
}

impl Profession {
    /// Returns true if a department name is present.
    pub fn has_department_name(&self) -> bool {
        !self.department_name.is_empty()
    }
}
