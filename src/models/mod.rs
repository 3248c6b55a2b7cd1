//! Core data models for the timesheet checker.
//!
//! This module contains the time primitives ([`ClockTime`], [`TimeSpan`]) and
//! the timesheet domain types built on top of them.

mod clock_time;
mod employee;
mod entry;
mod time_span;
mod timesheet;

pub use clock_time::ClockTime;
pub use employee::{Employee, Profession, WorkingArea};
pub use entry::Entry;
pub use time_span::TimeSpan;
pub use timesheet::{DayTotals, Timesheet};
