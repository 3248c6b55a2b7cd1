//! Timesheet checker for German minimum-wage documentation
//!
//! This crate validates monthly timesheets of hourly-paid employees against the
//! documentation duties of the Mindestlohngesetz (MiLoG §17) and the working
//! time limits of the Arbeitszeitgesetz: monthly maximum, pause tiers, daily
//! maximum, permitted time window, Sundays and public holidays.

#![warn(missing_docs)]

pub mod checker;
pub mod config;
pub mod error;
pub mod holiday;
pub mod models;
